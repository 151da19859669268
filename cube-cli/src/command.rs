use anyhow::{anyhow, Result};
use cube_core::{Coord, Difficulty};
use std::str::FromStr;

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Coord),
    Reset,
    Status,
    Board,
    AiEnabled(bool),
    AiDifficulty(Difficulty),
    Tutorial,
    Next,
    Rotate,
    View,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let line = s.trim().to_ascii_lowercase();
        let mut words = line.split_whitespace();
        let head = words.next().ok_or_else(|| anyhow!("empty input"))?;

        let command = match head {
            "reset" | "r" => Command::Reset,
            "status" | "s" => Command::Status,
            "board" | "b" => Command::Board,
            "tutorial" | "t" => Command::Tutorial,
            "next" | "n" => Command::Next,
            "rotate" => Command::Rotate,
            "view" => Command::View,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            "ai" => match words.next() {
                Some("on") => Command::AiEnabled(true),
                Some("off") => Command::AiEnabled(false),
                Some(level) => Command::AiDifficulty(level.parse()?),
                None => return Err(anyhow!("usage: ai on|off|easy|hard")),
            },
            _ => return Ok(Command::Place(line.parse()?)),
        };
        Ok(command)
    }
}

pub const HELP: &str = "\
Commands:
  x y z          place your mark (each axis 0..=2)
  reset          start a new game
  status         show turn, cells remaining and scores
  board          redraw the board
  ai on|off      toggle the AI opponent (plays O)
  ai easy|hard   set AI difficulty
  tutorial       start the guided tutorial
  next           advance the tutorial
  rotate, view   change perspective
  quit           leave the game";
