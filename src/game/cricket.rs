use tracing::info;

use crate::hit::CRICKET_NUMBERS;
use crate::player::MARKS_TO_CLOSE;
use crate::result::{TurnOutcome, TurnResult};
use crate::turn::Turn;

use super::Match;

/// Marks scored on `number` this turn: the sum of multipliers of darts on it.
fn marks_thrown(turn: &Turn, number: u8) -> u32 {
    turn.hits()
        .iter()
        .filter(|hit| hit.value() == number)
        .map(|hit| u32::from(hit.multiplier()))
        .sum()
}

impl Match {
    /// Returns whether every player other than `player` has closed `number`.
    ///
    /// Vacuously true when `player` has no opponents.
    #[must_use]
    pub fn closed_by_opponents(&self, player: usize, number: u8) -> bool {
        self.players
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != player)
            .all(|(_, p)| p.marks().is_some_and(|marks| marks.is_closed(number)))
    }

    pub(super) fn resolve_cricket(&mut self, turn: &Turn) -> TurnResult {
        let player = self.current_player_index;
        let before = self.players[player].marks().copied().unwrap_or_default();

        // Opponent marks are only read here, so number order does not matter.
        let mut marks = before;
        let mut points = 0;
        for number in CRICKET_NUMBERS {
            let total = u32::from(before.get(number)) + marks_thrown(turn, number);
            marks.set(number, total.min(u32::from(MARKS_TO_CLOSE)) as u8);

            let extra = total.saturating_sub(u32::from(MARKS_TO_CLOSE));
            if extra > 0 && !self.closed_by_opponents(player, number) {
                points += extra * u32::from(number);
            }
        }

        let score = self.players[player].score().saturating_add(points);
        self.players[player].set_marks(marks);
        self.players[player].set_score(score);

        let sole_leader = self
            .players
            .iter()
            .enumerate()
            .all(|(index, p)| index == player || p.score() < score);

        let outcome = if marks.all_closed() && sole_leader {
            info!(player, score, "match won");
            self.winner = Some(player);
            TurnOutcome::MatchWon { player }
        } else {
            TurnOutcome::Continue
        };

        TurnResult {
            player,
            outcome,
            points,
            bust: false,
        }
    }
}
