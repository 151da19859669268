//! Error type shared by all engine operations

use crate::board::Coord;

/// Errors produced by board and session operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid coordinate ({x}, {y}, {z}): every axis must be in 0..=2")]
    InvalidCoordinate { x: u8, y: u8, z: u8 },
    #[error("Cell {0} is already occupied")]
    CellOccupied(Coord),
    #[error("Game is over, reset to play again")]
    GameOver,
    #[error("Failed to parse coordinate: {0}")]
    Parse(String),
}
