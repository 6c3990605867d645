use tracing::info;

use crate::hit::Hit;
use crate::result::{TurnOutcome, TurnResult};
use crate::turn::Turn;

use super::Match;

/// How a countdown turn settles against the score it started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settlement {
    /// Score reverts to its pre-turn value.
    Bust,
    /// Score drops to the given value.
    Remaining(u32),
    /// Exactly zero on a double.
    Checkout,
}

const fn settle(before: u32, thrown: u32, finished_on_double: bool) -> Settlement {
    if thrown > before {
        return Settlement::Bust;
    }
    match before - thrown {
        // No double leaves 1.
        1 => Settlement::Bust,
        0 if finished_on_double => Settlement::Checkout,
        0 => Settlement::Bust,
        after => Settlement::Remaining(after),
    }
}

impl Match {
    pub(super) fn resolve_countdown(&mut self, turn: &Turn, starting_score: u32) -> TurnResult {
        let player = self.current_player_index;
        let thrown = turn.total();
        let finished_on_double = turn.last().is_some_and(Hit::is_double);

        let settlement = settle(self.players[player].score(), thrown, finished_on_double);
        let outcome = match settlement {
            Settlement::Bust => TurnOutcome::Continue,
            Settlement::Remaining(after) => {
                self.players[player].set_score(after);
                TurnOutcome::Continue
            }
            Settlement::Checkout => self.finish_leg(player, starting_score),
        };

        let bust = settlement == Settlement::Bust;
        TurnResult {
            player,
            outcome,
            points: if bust { 0 } else { thrown },
            bust,
        }
    }

    fn finish_leg(&mut self, player: usize, starting_score: u32) -> TurnOutcome {
        self.players[player].win_leg();
        for p in &mut self.players {
            p.set_score(starting_score);
        }

        let legs = self.players[player].legs();
        if legs >= self.legs_to_win {
            info!(player, legs, "match won");
            self.winner = Some(player);
            TurnOutcome::MatchWon { player }
        } else {
            info!(player, legs, "leg won");
            TurnOutcome::LegWon { player }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Settlement, settle};

    #[test]
    fn settle_edges() {
        assert_eq!(settle(40, 41, true), Settlement::Bust);
        assert_eq!(settle(40, 39, false), Settlement::Bust);
        assert_eq!(settle(40, 39, true), Settlement::Bust);
        assert_eq!(settle(40, 40, false), Settlement::Bust);
        assert_eq!(settle(40, 40, true), Settlement::Checkout);
        assert_eq!(settle(40, 38, false), Settlement::Remaining(2));
        assert_eq!(settle(501, 0, false), Settlement::Remaining(501));
    }
}
