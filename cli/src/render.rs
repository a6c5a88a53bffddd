use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use sapper_core::{CellState, CellView, GameStatus, Snapshot};

/// Colour of each adjacency count, 1 through 8.
const NUMBER_COLORS: [Color; 8] = [
    Color::Blue,
    Color::DarkGreen,
    Color::Red,
    Color::DarkBlue,
    Color::DarkRed,
    Color::Rgb {
        r: 64,
        g: 224,
        b: 208,
    },
    Color::Black,
    Color::Grey,
];

pub fn number_color(count: u8) -> Option<Color> {
    let index = usize::from(count).checked_sub(1)?;
    NUMBER_COLORS.get(index).copied()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

fn glyph(view: &CellView) -> char {
    match (view.state, view.is_mine, view.adjacent_mines) {
        (CellState::Flagged, _, _) => 'F',
        (CellState::Covered, _, _) => '#',
        (CellState::Revealed, Some(true), _) => '*',
        (CellState::Revealed, _, Some(0) | None) => '.',
        (CellState::Revealed, _, Some(count)) => char::from(b'0' + count),
    }
}

fn write_cell(out: &mut impl Write, view: &CellView, style: Style) -> io::Result<()> {
    let glyph = glyph(view);
    match view.adjacent_mines.and_then(number_color) {
        Some(color) if style.color => {
            write!(out, "{}", format!("{:>3}", glyph).with(color).bold())
        }
        _ => write!(out, "{:>3}", glyph),
    }
}

pub fn status_line(snapshot: &Snapshot) -> String {
    match snapshot.status {
        GameStatus::Playing => format!("Mines: {}", snapshot.flag_budget),
        GameStatus::Won => "Bravo! Minefield cleared!".to_owned(),
        GameStatus::Lost => "GAME OVER!".to_owned(),
    }
}

pub fn draw(out: &mut impl Write, snapshot: &Snapshot, style: Style) -> io::Result<()> {
    let (rows, cols) = snapshot.size;

    write!(out, "    ")?;
    for col in 0..cols {
        write!(out, "{:>3}", col)?;
    }
    writeln!(out)?;

    for row in 0..rows {
        write!(out, "{:>3} ", row)?;
        for view in snapshot.row(row).into_iter().flatten() {
            write_cell(out, view, style)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", status_line(snapshot))
}
