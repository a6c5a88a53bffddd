use sapper_core::{Command, Coord, Coord2};
use thiserror::Error;

/// One line typed by the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Difficulty(String),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty input, type h for help")]
    Empty,
    #[error("Unknown command {0:?}, type h for help")]
    UnknownCommand(String),
    #[error("Expected: {0} <row> <col>")]
    MissingCoords(&'static str),
    #[error("Not a coordinate: {0:?}")]
    BadCoord(String),
    #[error("Expected: d <easy|medium|hard>")]
    MissingDifficulty,
}

pub const HELP: &str = "\
Commands:
  r <row> <col>   reveal a cell
  f <row> <col>   flag or unflag a cell
  n               new game
  d <name>        change difficulty (easy, medium, hard)
  h               show this help
  q               quit";

pub fn parse(line: &str) -> Result<Input, InputError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(InputError::Empty);
    };

    Ok(match verb.to_ascii_lowercase().as_str() {
        "r" | "reveal" => Input::Command(Command::Reveal(coords("r", &mut words)?)),
        "f" | "flag" => Input::Command(Command::ToggleFlag(coords("f", &mut words)?)),
        "n" | "new" => Input::Command(Command::NewGame),
        "d" | "difficulty" => {
            let name: Vec<&str> = words.collect();
            if name.is_empty() {
                return Err(InputError::MissingDifficulty);
            }
            Input::Difficulty(name.join(" "))
        }
        "h" | "help" | "?" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        _ => return Err(InputError::UnknownCommand(verb.to_owned())),
    })
}

fn coords<'a>(
    verb: &'static str,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Coord2, InputError> {
    let (Some(row), Some(col)) = (words.next(), words.next()) else {
        return Err(InputError::MissingCoords(verb));
    };
    Ok((coord(row)?, coord(col)?))
}

fn coord(word: &str) -> Result<Coord, InputError> {
    word.parse()
        .map_err(|_| InputError::BadCoord(word.to_owned()))
}
