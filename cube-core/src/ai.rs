//! Heuristic move selection
//!
//! The AI looks exactly one ply ahead: on hard it completes its own line if it
//! can, otherwise blocks the opponent's, otherwise plays a random empty cell.
//! Lines are examined in table order and the first match wins.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::{Board, Coord, Player};
use crate::error::EngineError;
use crate::lines;

/// AI strength
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            other => Err(EngineError::Parse(format!("unknown difficulty '{}'", other))),
        }
    }
}

/// AI settings; may be changed between any two moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub enabled: bool,
    pub difficulty: Difficulty,
    /// Symbol the AI plays, the second player by convention
    pub player: Player,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            difficulty: Difficulty::Easy,
            player: Player::O,
        }
    }
}

/// First empty cell that would complete a line already holding two of
/// `player`'s marks
pub fn find_completing_move(board: &Board, player: Player) -> Option<Coord> {
    lines::all().iter().find_map(|line| {
        let owned = line.iter().filter(|&&c| board.get(c) == Some(player)).count();
        let empty = line.iter().copied().find(|&c| board.is_empty_at(c));
        match (owned, empty) {
            (2, Some(cell)) => Some(cell),
            _ => None,
        }
    })
}

/// Uniformly random empty cell
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    board.empty_cells().choose(rng).copied()
}

/// Pick a move for `ai_player`; `None` only when the board is full
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    ai_player: Player,
    rng: &mut R,
) -> Option<Coord> {
    if difficulty == Difficulty::Hard {
        if let Some(cell) = find_completing_move(board, ai_player) {
            trace!(%cell, "Completing own line");
            return Some(cell);
        }
        if let Some(cell) = find_completing_move(board, ai_player.opponent()) {
            trace!(%cell, "Blocking opponent line");
            return Some(cell);
        }
    }
    random_move(board, rng)
}

/// Trait for move selection policies
pub trait Policy: Send + Sync {
    /// Select a move for the given board, `None` if no cell is empty
    fn select_move(&mut self, board: &Board) -> Option<Coord>;
}

/// Random policy that selects empty cells uniformly at random
pub struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomPolicy {
    fn select_move(&mut self, board: &Board) -> Option<Coord> {
        random_move(board, &mut self.rng)
    }
}

/// Difficulty-driven heuristic player for one side
pub struct HeuristicAi {
    rng: ChaCha20Rng,
    difficulty: Difficulty,
    player: Player,
}

impl HeuristicAi {
    pub fn new(difficulty: Difficulty, player: Player) -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
            difficulty,
            player,
        }
    }

    pub fn with_seed(difficulty: Difficulty, player: Player, seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            difficulty,
            player,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Takes effect on the next selected move
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn player(&self) -> Player {
        self.player
    }
}

impl Policy for HeuristicAi {
    fn select_move(&mut self, board: &Board) -> Option<Coord> {
        select_move(board, self.difficulty, self.player, &mut self.rng)
    }
}
