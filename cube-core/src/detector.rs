//! Win detection by full rescan of the line table
//!
//! Marks are never retracted within a game, so a line that is complete stays
//! complete and rescanning all 49 lines after every move is both correct and
//! cheap.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::lines::{self, Line};

/// Count of completed lines per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub x: u32,
    pub o: u32,
}

impl Score {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn bump(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }

    /// Player with strictly more lines, `None` when level
    pub fn leader(&self) -> Option<Player> {
        if self.x > self.o {
            Some(Player::X)
        } else if self.o > self.x {
            Some(Player::O)
        } else {
            None
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {} - O: {}", self.x, self.o)
    }
}

/// A completed line and the player holding it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedLine {
    pub line: Line,
    pub player: Player,
}

/// Result of scanning a board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub score: Score,
    pub completed: Vec<CompletedLine>,
}

/// Owner of `line` if all three cells hold the same player
pub fn line_owner(board: &Board, line: &Line) -> Option<Player> {
    let first = board.get(line[0])?;
    if board.get(line[1]) == Some(first) && board.get(line[2]) == Some(first) {
        Some(first)
    } else {
        None
    }
}

/// Scan every line and tally completed lines per player
pub fn scan(board: &Board) -> Scan {
    let mut result = Scan::default();
    for line in lines::all() {
        if let Some(player) = line_owner(board, line) {
            result.score.bump(player);
            result.completed.push(CompletedLine {
                line: *line,
                player,
            });
        }
    }
    result
}

/// Whether `player` gained at least one line between two scores
pub fn newly_completed_by(player: Player, previous: &Score, current: &Score) -> bool {
    current.get(player) > previous.get(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    fn c(x: u8, y: u8, z: u8) -> Coord {
        Coord::new(x, y, z).unwrap()
    }

    fn board_with(marks: &[((u8, u8, u8), Player)]) -> Board {
        let mut board = Board::new();
        for &((x, y, z), p) in marks {
            board.set(c(x, y, z), p).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_scores_nothing() {
        let result = scan(&Board::new());
        assert_eq!(result.score, Score::default());
        assert!(result.completed.is_empty());
    }

    #[test]
    fn test_space_diagonal() {
        let board = board_with(&[
            ((0, 0, 0), Player::X),
            ((1, 1, 1), Player::X),
            ((2, 2, 2), Player::X),
        ]);
        let result = scan(&board);
        assert_eq!(result.score, Score { x: 1, o: 0 });
        assert_eq!(result.completed.len(), 1);
        assert_eq!(result.completed[0].player, Player::X);
        assert_eq!(result.completed[0].line, [c(0, 0, 0), c(1, 1, 1), c(2, 2, 2)]);
    }

    #[test]
    fn test_mixed_line_is_not_complete() {
        let board = board_with(&[
            ((0, 0, 0), Player::X),
            ((1, 0, 0), Player::O),
            ((2, 0, 0), Player::X),
        ]);
        assert_eq!(scan(&board).score, Score::default());
    }

    #[test]
    fn test_multiple_lines_per_player() {
        // X holds the z=0 row y=0 and the column x=0; O holds the z-pillar at (2,2)
        let board = board_with(&[
            ((0, 0, 0), Player::X),
            ((1, 0, 0), Player::X),
            ((2, 0, 0), Player::X),
            ((0, 1, 0), Player::X),
            ((0, 2, 0), Player::X),
            ((2, 2, 0), Player::O),
            ((2, 2, 1), Player::O),
            ((2, 2, 2), Player::O),
        ]);
        let result = scan(&board);
        assert_eq!(result.score, Score { x: 2, o: 1 });
        assert_eq!(result.completed.len(), 3);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let board = board_with(&[
            ((0, 1, 2), Player::O),
            ((1, 1, 2), Player::O),
            ((2, 1, 2), Player::O),
            ((1, 1, 1), Player::X),
        ]);
        assert_eq!(scan(&board), scan(&board));
    }

    #[test]
    fn test_newly_completed_by() {
        let prev = Score { x: 1, o: 2 };
        let curr = Score { x: 1, o: 3 };
        assert!(newly_completed_by(Player::O, &prev, &curr));
        assert!(!newly_completed_by(Player::X, &prev, &curr));
        assert!(!newly_completed_by(Player::X, &curr, &curr));
    }

    #[test]
    fn test_score_leader_and_display() {
        assert_eq!(Score { x: 3, o: 1 }.leader(), Some(Player::X));
        assert_eq!(Score { x: 0, o: 2 }.leader(), Some(Player::O));
        assert_eq!(Score { x: 0, o: 0 }.leader(), None);
        assert_eq!(Score { x: 4, o: 2 }.to_string(), "X: 4 - O: 2");
    }
}
