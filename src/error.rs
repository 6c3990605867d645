//! Error types for match operations.

use thiserror::Error;

/// Errors that can occur when recording a dart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HitError {
    /// Value is not 0, 1..=20, or 25.
    #[error("value is not a board segment")]
    InvalidValue,
    /// Multiplier is not 1, 2 or 3 (or is not 1 on a miss).
    #[error("multiplier is not a board ring")]
    InvalidMultiplier,
    /// The bull has no treble ring.
    #[error("the bull cannot be trebled")]
    TripleBull,
}

/// Errors that can occur when resolving a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The turn does not hold exactly three darts.
    #[error("turn does not hold three darts")]
    IncompleteTurn,
    /// The match already has a winner.
    #[error("match is already over")]
    MatchOver,
}

/// Errors that can occur when validating setup parameters or a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The snapshot could not be parsed.
    #[error("snapshot could not be parsed")]
    Malformed,
    /// Too few or too many players.
    #[error("invalid player count")]
    PlayerCount,
    /// A player name is empty or too long.
    #[error("invalid player name")]
    PlayerName,
    /// A player score is negative or out of range for the mode.
    #[error("invalid player score")]
    Score,
    /// A player leg count is negative.
    #[error("invalid leg count for player")]
    Legs,
    /// Cricket marks are missing, incomplete, or out of range.
    #[error("invalid cricket marks")]
    Marks,
    /// A recorded hit is not a legal dart, or a turn holds too many darts.
    #[error("invalid hit history")]
    History,
    /// The current player index is out of range.
    #[error("current player index out of range")]
    CurrentPlayer,
    /// Legs to win or total legs is not a positive, consistent count.
    #[error("invalid match leg settings")]
    LegCount,
    /// The game mode is not 301, 501 or Cricket.
    #[error("invalid game mode")]
    Mode,
    /// The recorded winner is not a player of this match.
    #[error("invalid winner")]
    Winner,
}
