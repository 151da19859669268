//! Display-hook snapshot of a session

use std::fmt;

use crate::board::Player;
use crate::controller::{GameResult, Session};
use crate::detector::{CompletedLine, Score};

/// Everything a front end shows after a state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub current_player: Player,
    pub remaining: u8,
    pub score: Score,
    pub completed: Vec<CompletedLine>,
    /// Game-over banner, `None` while the game is running
    pub banner: Option<String>,
}

impl StatusView {
    pub fn from_session(session: &Session) -> Self {
        let score = session.score();
        Self {
            current_player: session.current_player(),
            remaining: session.board().remaining(),
            score,
            completed: session.completed_lines().to_vec(),
            banner: session.outcome().map(|result| banner(result, &score)),
        }
    }
}

/// Two-line game-over text, e.g. `"Player X wins!\nX: 5 - O: 3"`
pub fn banner(result: GameResult, score: &Score) -> String {
    format!("{}\n{}", result, score)
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.banner {
            Some(text) => write!(f, "{}", text.replace('\n', " ")),
            None => write!(
                f,
                "Current turn: {} | Cells remaining: {} | {}",
                self.current_player, self.remaining, self.score
            ),
        }
    }
}
