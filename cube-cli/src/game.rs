use anyhow::Result;
use cube_core::{
    Coord, EngineError, Feedback, HeuristicAi, MoveResult, Policy, Session, Tutorial,
    TutorialEvent,
};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::command::{Command, HELP};
use crate::config::Config;

/// What the input loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The AI is due to move after the configured pause
    AiTurn,
    Quit,
}

/// Terminal front end owning one session
pub struct Frontend<W: Write> {
    config: Config,
    session: Session,
    ai: HeuristicAi,
    tutorial: Tutorial,
    out: W,
}

impl<W: Write> Frontend<W> {
    pub fn new(config: Config, out: W) -> Self {
        let ai = match config.seed {
            Some(seed) => HeuristicAi::with_seed(config.ai.difficulty, config.ai.player, seed),
            None => HeuristicAi::new(config.ai.difficulty, config.ai.player),
        };
        let mut tutorial = Tutorial::new();
        if config.tutorial {
            tutorial.start();
        }

        Self {
            config,
            session: Session::new(),
            ai,
            tutorial,
            out,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    #[allow(dead_code)]
    pub fn tutorial(&self) -> &Tutorial {
        &self.tutorial
    }

    pub fn ai_delay(&self) -> Duration {
        self.config.ai_delay()
    }

    pub fn intro(&mut self) -> Result<()> {
        writeln!(self.out, "3D Tic-Tac-Toe. Type `help` for commands.")?;
        if self.config.ai.enabled {
            writeln!(
                self.out,
                "AI plays {} on {}.",
                self.config.ai.player, self.config.ai.difficulty
            )?;
        }
        self.show_board()?;
        self.show_tutorial()
    }

    pub fn prompt(&mut self) -> Result<()> {
        if self.session.is_active() {
            write!(self.out, "{}> ", self.session.current_player())?;
        } else {
            write!(self.out, "> ")?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    pub fn handle(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "Handling command");
        match command {
            Command::Place(coord) => {
                if let Some(result) = self.place(coord)? {
                    self.report(&result)?;
                    self.tutorial_event(TutorialEvent::MarkPlaced)?;
                }
            }
            Command::Reset => {
                self.session.reset();
                writeln!(self.out, "New game.")?;
                self.show_board()?;
                self.show_status()?;
            }
            Command::Status => self.show_status()?,
            Command::Board => self.show_board()?,
            Command::AiEnabled(enabled) => {
                self.config.ai.enabled = enabled;
                info!(enabled, "AI toggled");
                writeln!(self.out, "AI {}.", if enabled { "on" } else { "off" })?;
            }
            Command::AiDifficulty(difficulty) => {
                self.config.ai.difficulty = difficulty;
                info!(%difficulty, "AI difficulty changed");
                writeln!(self.out, "AI difficulty: {}.", difficulty)?;
            }
            Command::Tutorial => {
                self.tutorial.start();
                self.show_tutorial()?;
            }
            Command::Next => self.tutorial_event(TutorialEvent::Next)?,
            Command::Rotate => {
                self.show_board()?;
                self.tutorial_event(TutorialEvent::Rotated)?;
            }
            Command::View => {
                self.show_board()?;
                self.tutorial_event(TutorialEvent::PresetUsed)?;
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(if self.ai_due() { Flow::AiTurn } else { Flow::Continue })
    }

    /// Let the AI move if it is still its turn
    pub fn ai_turn(&mut self) -> Result<()> {
        if !self.ai_due() {
            return Ok(());
        }

        self.ai.set_difficulty(self.config.ai.difficulty);
        let Some(coord) = self.ai.select_move(self.session.board()) else {
            return Ok(());
        };

        writeln!(self.out, "AI plays {}", coord)?;
        if let Some(result) = self.place(coord)? {
            self.report(&result)?;
        }
        Ok(())
    }

    fn ai_due(&self) -> bool {
        self.config.ai.enabled
            && self.session.is_active()
            && self.session.current_player() == self.config.ai.player
    }

    fn place(&mut self, coord: Coord) -> Result<Option<MoveResult>> {
        match self.session.apply_move(coord) {
            Ok(result) => Ok(Some(result)),
            Err(EngineError::CellOccupied(cell)) => {
                debug!(%cell, "Ignoring move on occupied cell");
                writeln!(self.out, "Cell {} is already taken.", cell)?;
                Ok(None)
            }
            Err(EngineError::GameOver) => {
                writeln!(self.out, "The game is over. Type `reset` to play again.")?;
                Ok(None)
            }
            Err(e) => {
                warn!("Rejected move: {}", e);
                writeln!(self.out, "{}", e)?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, result: &MoveResult) -> Result<()> {
        self.show_board()?;

        let cue = Feedback::for_move(result);
        debug!(?cue, "Move feedback");
        if self.config.sound && cue != Feedback::PlaceMark {
            // Terminal bell
            write!(self.out, "\x07")?;
        }
        if result.line_completed_by_mover {
            let plural = if result.lines_gained == 1 { "" } else { "s" };
            writeln!(
                self.out,
                "{} completed {} line{}!",
                result.mover, result.lines_gained, plural
            )?;
        }
        self.show_status()
    }

    fn show_board(&mut self) -> Result<()> {
        write!(self.out, "{}", self.session.board())?;
        Ok(())
    }

    fn show_status(&mut self) -> Result<()> {
        let status = self.session.status();
        match &status.banner {
            Some(banner) => writeln!(self.out, "{}", banner)?,
            None => writeln!(self.out, "{}", status)?,
        }
        Ok(())
    }

    fn show_tutorial(&mut self) -> Result<()> {
        if let Some(text) = self.tutorial.current_text() {
            writeln!(self.out, "[tutorial] {}", text)?;
        }
        Ok(())
    }

    fn tutorial_event(&mut self, event: TutorialEvent) -> Result<()> {
        if self.tutorial.handle(event) {
            self.show_tutorial()?;
        }
        Ok(())
    }
}

/// Interactive loop on stdin/stdout
pub async fn run(config: Config) -> Result<()> {
    let mut frontend = Frontend::new(config, std::io::stdout());
    frontend.intro()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        frontend.prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                frontend.say(&format!("{} (type `help` for commands)", e))?;
                continue;
            }
        };

        match frontend.handle(command)? {
            Flow::Quit => break,
            Flow::AiTurn => {
                tokio::time::sleep(frontend.ai_delay()).await;
                frontend.ai_turn()?;
            }
            Flow::Continue => {}
        }
    }

    info!(session = %frontend.session().id(), "Leaving game");
    Ok(())
}
