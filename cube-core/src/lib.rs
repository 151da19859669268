//! Core engine for 3×3×3 tic-tac-toe
//! 
//! This crate provides everything needed to play a full game on a cube board:
//! - `lines`: The fixed table of 49 winning triples
//! - `board`: Cell coordinates, players and the 27-cell board
//! - `detector`: Full-rescan win detection and per-player scoring
//! - `controller`: The `Session` turn controller and move results
//! - `ai`: Single-ply heuristic move selection
//! - `feedback`, `status`, `tutorial`: Contracts consumed by front ends
//!
//! Games always run to all 27 marks; the player who completed more lines wins.

pub mod error;
pub mod lines;
pub mod board;
pub mod detector;
pub mod controller;
pub mod ai;
pub mod feedback;
pub mod status;
pub mod tutorial;

// Re-export main types for convenience
pub use error::EngineError;
pub use lines::Line;
pub use board::{Board, Coord, Player};
pub use detector::{scan, CompletedLine, Scan, Score};
pub use controller::{GameResult, MoveResult, Phase, Session};
pub use ai::{select_move, AiConfig, Difficulty, HeuristicAi, Policy, RandomPolicy};
pub use feedback::Feedback;
pub use status::StatusView;
pub use tutorial::{Tutorial, TutorialEvent};
