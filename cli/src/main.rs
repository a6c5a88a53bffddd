use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use sapper_core::{Difficulty, GameConfig, GameSession, StateChanged};

use input::Input;
use render::Style;

mod input;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Board preset: easy, medium or hard
    #[arg(short, long, default_value_t = Difficulty::Easy, value_parser = Difficulty::from_name)]
    difficulty: Difficulty,

    /// Custom board rows, overrides the preset
    #[arg(long, requires_all = ["cols", "mines"])]
    rows: Option<u8>,

    /// Custom board columns
    #[arg(long, requires_all = ["rows", "mines"])]
    cols: Option<u8>,

    /// Custom mine count
    #[arg(long, requires_all = ["rows", "cols"])]
    mines: Option<u16>,

    /// Print numbers without colours
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn config(&self) -> Result<GameConfig> {
        Ok(match (self.rows, self.cols, self.mines) {
            (Some(rows), Some(cols), Some(mines)) => GameConfig::new(rows, cols, mines)?,
            _ => self.difficulty.config(),
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let config = args.config().context("Invalid board")?;
    let mut session = GameSession::seeded(config, seed);
    session.subscribe(|event: &StateChanged| {
        log::debug!(
            "{:?}: {} cells changed, status {:?}",
            event.outcome,
            event.changed.len(),
            event.status
        );
    });

    let style = Style {
        color: !args.no_color,
    };
    run(&mut session, io::stdin().lock(), &mut io::stdout().lock(), style)
}

fn run(
    session: &mut GameSession,
    reader: impl BufRead,
    out: &mut impl Write,
    style: Style,
) -> Result<()> {
    render::draw(out, &session.snapshot(), style)?;
    prompt(out)?;

    for line in reader.lines() {
        let line = line.context("Could not read input")?;

        let result = match input::parse(&line) {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => {
                writeln!(out, "{}", input::HELP)?;
                prompt(out)?;
                continue;
            }
            Ok(Input::Command(command)) => session.handle(command),
            Ok(Input::Difficulty(name)) => session.apply_difficulty_named(&name),
            Err(err) => {
                writeln!(out, "{}", err)?;
                prompt(out)?;
                continue;
            }
        };

        match result {
            Ok(event) if event.is_noop() => writeln!(out, "Nothing to do there")?,
            Ok(_) => render::draw(out, &session.snapshot(), style)?,
            Err(err) => writeln!(out, "{}", err)?,
        }
        prompt(out)?;
    }

    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
