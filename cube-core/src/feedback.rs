//! Per-move feedback cues for front ends

use serde::{Deserialize, Serialize};

use crate::controller::MoveResult;

/// The single cue a front end plays after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    PlaceMark,
    CompleteLine,
    WinGame,
}

impl Feedback {
    /// Game over outranks a completed line, which outranks a plain placement
    pub fn for_move(result: &MoveResult) -> Self {
        if result.game_over() {
            Feedback::WinGame
        } else if result.line_completed_by_mover {
            Feedback::CompleteLine
        } else {
            Feedback::PlaceMark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, Player};
    use crate::controller::{GameResult, Session};
    use crate::detector::Score;

    fn result(line_completed_by_mover: bool, outcome: Option<GameResult>) -> MoveResult {
        MoveResult {
            mover: Player::X,
            coord: Coord::new(1, 1, 1).unwrap(),
            score: Score::default(),
            line_completed_by_mover,
            lines_gained: u32::from(line_completed_by_mover),
            outcome,
        }
    }

    #[test]
    fn test_cue_priority() {
        assert_eq!(Feedback::for_move(&result(false, None)), Feedback::PlaceMark);
        assert_eq!(Feedback::for_move(&result(true, None)), Feedback::CompleteLine);
        assert_eq!(
            Feedback::for_move(&result(true, Some(GameResult::Tie))),
            Feedback::WinGame
        );
    }

    #[test]
    fn test_win_cue_only_on_last_move() {
        let mut session = Session::new();
        let cues: Vec<Feedback> = Coord::all()
            .map(|coord| Feedback::for_move(&session.apply_move(coord).unwrap()))
            .collect();

        assert_eq!(cues.len(), 27);
        assert_eq!(cues[26], Feedback::WinGame);
        assert!(cues[..26].iter().all(|&cue| cue != Feedback::WinGame));
    }
}
