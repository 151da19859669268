use cube_core::{Difficulty, GameResult, HeuristicAi, Player, Policy, Session};
use std::fmt;
use tracing::{debug, info};

/// Results of a batch of unattended games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub ties: u32,
}

impl Tally {
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win(Player::X) => self.x_wins += 1,
            GameResult::Win(Player::O) => self.o_wins += 1,
            GameResult::Tie => self.ties += 1,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} tied",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.ties
        )
    }
}

/// Play one AI-vs-AI game to the end
pub fn play_game(x: &mut dyn Policy, o: &mut dyn Policy) -> (GameResult, Session) {
    let mut session = Session::new();
    loop {
        let choice = match session.current_player() {
            Player::X => x.select_move(session.board()),
            Player::O => o.select_move(session.board()),
        };
        let Some(coord) = choice else {
            break;
        };
        match session.apply_move(coord) {
            Ok(result) => {
                if let Some(outcome) = result.outcome {
                    return (outcome, session);
                }
            }
            Err(e) => {
                debug!("Policy chose an unplayable cell: {}", e);
                break;
            }
        }
    }
    // Unreachable for policies that only pick empty cells
    (GameResult::from_score(&session.score()), session)
}

/// Run `games` games with both sides at `difficulty`
pub fn run(games: u32, difficulty: Difficulty, seed: u64) -> Tally {
    info!(games, %difficulty, seed, "Starting self-play");
    let mut tally = Tally::default();

    for game in 0..games {
        let base = seed.wrapping_add(u64::from(game) * 2);
        let mut x = HeuristicAi::with_seed(difficulty, Player::X, base);
        let mut o = HeuristicAi::with_seed(difficulty, Player::O, base.wrapping_add(1));

        let (result, session) = play_game(&mut x, &mut o);
        debug!(game, session = %session.id(), %result, score = %session.score(), "Game finished");
        tally.record(result);

        if (game + 1) % 100 == 0 {
            info!("Completed {} games", game + 1);
        }
    }

    info!(%tally, "Self-play finished");
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::RandomPolicy;

    #[test]
    fn test_tally_counts_every_game() {
        let tally = run(20, Difficulty::Hard, 99);
        assert_eq!(tally.games(), 20);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        assert_eq!(run(10, Difficulty::Easy, 4), run(10, Difficulty::Easy, 4));
    }

    #[test]
    fn test_play_game_fills_board() {
        let mut x = RandomPolicy::with_seed(1);
        let mut o = RandomPolicy::with_seed(2);
        let (result, session) = play_game(&mut x, &mut o);
        assert_eq!(session.board().marks(), 27);
        assert_eq!(session.outcome(), Some(result));
    }

    #[test]
    fn test_tally_display() {
        let tally = Tally { x_wins: 3, o_wins: 1, ties: 2 };
        assert_eq!(tally.to_string(), "6 games: X won 3, O won 1, 2 tied");
    }
}
