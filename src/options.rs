//! Match configuration options.

/// Fewest players a new match accepts.
pub const MIN_PLAYERS: usize = 2;
/// Most players a new match accepts.
pub const MAX_PLAYERS: usize = 4;
/// Most players a restored snapshot may hold.
pub const MAX_SNAPSHOT_PLAYERS: usize = 8;
/// Longest player name, in characters.
pub const MAX_NAME_LENGTH: usize = 10;
/// Longest match a new setup accepts, in legs.
pub const MAX_LEGS: u32 = 7;

/// Game variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Count down from 301, double out.
    Countdown301,
    /// Count down from 501, double out.
    #[default]
    Countdown501,
    /// Close 15 through 20 and the bull, scoring on numbers opponents have left open.
    Cricket,
}

impl GameMode {
    /// Returns the starting score for countdown modes, `None` for Cricket.
    #[must_use]
    pub const fn starting_score(self) -> Option<u32> {
        match self {
            Self::Countdown301 => Some(301),
            Self::Countdown501 => Some(501),
            Self::Cricket => None,
        }
    }

    /// Returns the countdown mode starting at `score`, if there is one.
    #[must_use]
    pub const fn from_starting_score(score: u32) -> Option<Self> {
        match score {
            301 => Some(Self::Countdown301),
            501 => Some(Self::Countdown501),
            _ => None,
        }
    }

    /// Returns whether this is a countdown mode.
    #[must_use]
    pub const fn is_countdown(self) -> bool {
        !matches!(self, Self::Cricket)
    }

    /// Score every player holds at the start of a leg.
    #[must_use]
    pub const fn initial_score(self) -> u32 {
        match self.starting_score() {
            Some(score) => score,
            None => 0,
        }
    }

    /// Legs needed to take a match of `total_legs`.
    ///
    /// Countdown matches are best-of: the majority, `ceil(total_legs / 2)`.
    /// Cricket keeps the full count for an outer "race to N" wrapper.
    #[must_use]
    pub const fn legs_to_win(self, total_legs: u32) -> u32 {
        if self.is_countdown() {
            total_legs.div_ceil(2)
        } else {
            total_legs
        }
    }
}

/// Setup parameters for a new match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use dartrs::{GameMode, MatchOptions};
///
/// let options = MatchOptions::default()
///     .with_mode(GameMode::Countdown301)
///     .with_total_legs(5);
/// assert_eq!(options.legs_to_win(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Game variant.
    pub mode: GameMode,
    /// Legs in the match (1..=[`MAX_LEGS`]).
    pub total_legs: u32,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            mode: GameMode::Countdown501,
            total_legs: 1,
        }
    }
}

impl MatchOptions {
    /// Sets the game mode.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{GameMode, MatchOptions};
    ///
    /// let options = MatchOptions::default().with_mode(GameMode::Cricket);
    /// assert_eq!(options.mode, GameMode::Cricket);
    /// ```
    #[must_use]
    pub const fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the number of legs.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_total_legs(3);
    /// assert_eq!(options.total_legs, 3);
    /// ```
    #[must_use]
    pub const fn with_total_legs(mut self, total_legs: u32) -> Self {
        self.total_legs = total_legs;
        self
    }

    /// Legs needed to win with these options.
    #[must_use]
    pub const fn legs_to_win(&self) -> u32 {
        self.mode.legs_to_win(self.total_legs)
    }
}
