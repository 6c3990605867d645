//! Match engine and state management.

use alloc::string::ToString;
use alloc::vec::Vec;

use tracing::debug;

use crate::error::{ResolveError, ValidationError};
use crate::options::{
    GameMode, MAX_LEGS, MAX_NAME_LENGTH, MAX_PLAYERS, MIN_PLAYERS, MatchOptions,
};
use crate::player::{Marks, Player};
use crate::result::TurnResult;
use crate::turn::{MAX_DARTS, Turn};

mod countdown;
mod cricket;
pub mod state;

pub use state::MatchPhase;

/// Checks a player name: non-blank and at most [`MAX_NAME_LENGTH`] characters.
pub(crate) fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() || name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::PlayerName);
    }
    Ok(())
}

/// A darts match: configuration, players, and whose turn it is.
///
/// The match owns every player's score, legs, and marks. Callers collect
/// darts in a [`Turn`] and hand it to [`Match::resolve_turn`], which is the
/// only place state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    mode: GameMode,
    players: Vec<Player>,
    current_player_index: usize,
    legs_to_win: u32,
    total_legs: u32,
    winner: Option<usize>,
}

impl Match {
    /// Creates a match from setup parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not 2 to 4 players, a name is blank or
    /// longer than [`MAX_NAME_LENGTH`] characters, or the leg count is not in
    /// `1..=MAX_LEGS`.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{GameMode, Match, MatchOptions, ValidationError};
    ///
    /// let options = MatchOptions::default().with_mode(GameMode::Cricket);
    /// let game = Match::new(&options, &["Anna", "Ben", "Cleo"]).unwrap();
    /// assert_eq!(game.players().len(), 3);
    ///
    /// assert_eq!(
    ///     Match::new(&options, &["Solo"]).unwrap_err(),
    ///     ValidationError::PlayerCount
    /// );
    /// ```
    pub fn new<S: AsRef<str>>(
        options: &MatchOptions,
        names: &[S],
    ) -> Result<Self, ValidationError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(ValidationError::PlayerCount);
        }
        if !(1..=MAX_LEGS).contains(&options.total_legs) {
            return Err(ValidationError::LegCount);
        }

        let mode = options.mode;
        let marks = (!mode.is_countdown()).then(Marks::new);
        let players = names
            .iter()
            .map(|name| {
                let name = name.as_ref().trim();
                check_name(name)?;
                Ok(Player::new(
                    name.to_string(),
                    mode.initial_score(),
                    0,
                    marks,
                    Vec::new(),
                ))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(Self {
            mode,
            players,
            current_player_index: 0,
            legs_to_win: options.legs_to_win(),
            total_legs: options.total_legs,
            winner: None,
        })
    }

    /// Assembles a match from already validated parts.
    pub(crate) const fn from_parts(
        mode: GameMode,
        players: Vec<Player>,
        current_player_index: usize,
        legs_to_win: u32,
        total_legs: u32,
        winner: Option<usize>,
    ) -> Self {
        Self {
            mode,
            players,
            current_player_index,
            legs_to_win,
            total_legs,
            winner,
        }
    }

    /// Resolves a completed turn for the current player.
    ///
    /// On success the turn is moved into the player's history, `turn` is left
    /// empty, and play passes to the next player, whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn does not hold exactly three darts or the
    /// match is already won. Nothing is changed in either case.
    pub fn resolve_turn(&mut self, turn: &mut Turn) -> Result<TurnResult, ResolveError> {
        if self.winner.is_some() {
            return Err(ResolveError::MatchOver);
        }
        if turn.len() != MAX_DARTS {
            return Err(ResolveError::IncompleteTurn);
        }

        let turn = core::mem::take(turn);
        let result = match self.mode.starting_score() {
            Some(starting_score) => self.resolve_countdown(&turn, starting_score),
            None => self.resolve_cricket(&turn),
        };
        debug!(
            player = result.player,
            points = result.points,
            bust = result.bust,
            "turn resolved"
        );

        self.players[result.player].record(turn);
        self.current_player_index = (self.current_player_index + 1) % self.players.len();

        Ok(result)
    }

    /// Returns the game mode.
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the players in throwing order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the index of the player to throw next.
    #[must_use]
    pub const fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// Returns the player to throw next.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Returns the legs a player needs to win the match.
    #[must_use]
    pub const fn legs_to_win(&self) -> u32 {
        self.legs_to_win
    }

    /// Returns the number of legs in the match.
    #[must_use]
    pub const fn total_legs(&self) -> u32 {
        self.total_legs
    }

    /// Returns the match winner, if the match is over.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        match self.winner {
            Some(player) => MatchPhase::Won { player },
            None if self.players.iter().all(|p| p.history().is_empty()) => MatchPhase::Setup,
            None => MatchPhase::InProgress,
        }
    }

    /// Returns the number of the leg being played, starting at 1.
    #[must_use]
    pub fn current_leg(&self) -> u32 {
        self.players
            .iter()
            .fold(1, |leg, player| leg.saturating_add(player.legs()))
    }

    /// Returns what the current player would have left if `turn` stood.
    ///
    /// Display only: the value may be negative or otherwise a bust. Returns
    /// `None` in Cricket.
    #[must_use]
    pub fn remaining_preview(&self, turn: &Turn) -> Option<i64> {
        self.mode
            .is_countdown()
            .then(|| i64::from(self.current_player().score()) - i64::from(turn.total()))
    }
}
