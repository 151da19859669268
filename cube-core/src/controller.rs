//! Turn controller
//!
//! A `Session` owns everything about one game: the board, whose turn it is,
//! the latest scan and the phase. Moves are applied in a single pass so that
//! callers never observe a mark without its updated score and turn.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::board::{Board, Coord, Player};
use crate::detector::{self, CompletedLine, Scan, Score};
use crate::error::EngineError;
use crate::status::StatusView;

/// Final outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win(Player),
    Tie,
}

impl GameResult {
    /// Decide the outcome from final scores; equal scores are always a tie
    pub fn from_score(score: &Score) -> Self {
        match score.leader() {
            Some(player) => GameResult::Win(player),
            None => GameResult::Tie,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win(player) => write!(f, "Player {} wins!", player),
            GameResult::Tie => write!(f, "Game ended in a tie!"),
        }
    }
}

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingMove(Player),
    GameOver(GameResult),
}

/// Outcome of a successfully applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Player who placed the mark
    pub mover: Player,
    pub coord: Coord,
    /// Scores after the move
    pub score: Score,
    /// Whether the mover completed at least one new line
    pub line_completed_by_mover: bool,
    /// Number of lines the mover completed with this mark
    pub lines_gained: u32,
    /// Set when this move filled the board
    pub outcome: Option<GameResult>,
}

impl MoveResult {
    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }
}

/// One game from reset to game over
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    board: Board,
    current: Player,
    scan: Scan,
    phase: Phase,
}

impl Session {
    /// Create a new session with X to move
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            board: Board::new(),
            current: Player::X,
            scan: Scan::default(),
            phase: Phase::AwaitingMove(Player::X),
        }
    }

    /// Place the current player's mark at `coord`
    ///
    /// Rejected moves leave the session untouched.
    pub fn apply_move(&mut self, coord: Coord) -> Result<MoveResult, EngineError> {
        let mover = match self.phase {
            Phase::AwaitingMove(player) => player,
            Phase::GameOver(_) => return Err(EngineError::GameOver),
        };

        let previous = self.scan.score;
        self.board.set(coord, mover)?;

        self.scan = detector::scan(&self.board);
        let score = self.scan.score;
        let line_completed_by_mover = detector::newly_completed_by(mover, &previous, &score);
        let lines_gained = score.get(mover) - previous.get(mover);

        debug!(
            session = %self.id,
            player = %mover,
            %coord,
            previous = %previous,
            current = %score,
            lines_gained,
            "Applied move"
        );

        let outcome = if self.board.is_full() {
            let result = GameResult::from_score(&score);
            self.phase = Phase::GameOver(result);
            info!(session = %self.id, %result, score = %score, "Game over");
            Some(result)
        } else {
            self.current = mover.opponent();
            self.phase = Phase::AwaitingMove(self.current);
            None
        };

        Ok(MoveResult {
            mover,
            coord,
            score,
            line_completed_by_mover,
            lines_gained,
            outcome,
        })
    }

    /// Start a fresh game, from any phase
    pub fn reset(&mut self) {
        self.id = Uuid::new_v4();
        self.board.reset();
        self.current = Player::X;
        self.scan = Scan::default();
        self.phase = Phase::AwaitingMove(Player::X);
        info!(session = %self.id, "Session reset");
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or the last mover once the game is over
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn score(&self) -> Score {
        self.scan.score
    }

    /// Currently complete lines, for highlighting
    pub fn completed_lines(&self) -> &[CompletedLine] {
        &self.scan.completed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::AwaitingMove(_))
    }

    pub fn outcome(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            Phase::AwaitingMove(_) => None,
        }
    }

    /// Snapshot for display hooks
    pub fn status(&self) -> StatusView {
        StatusView::from_session(self)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
