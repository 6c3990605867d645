//! Match lifecycle types.

/// Match lifecycle phase.
///
/// A leg transition in countdown games is momentary and is reported through
/// [`crate::TurnOutcome::LegWon`] rather than held as a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// No turn has been resolved yet.
    Setup,
    /// At least one turn has been resolved and nobody has won.
    InProgress,
    /// The match is over. There is no transition out of this phase.
    Won {
        /// Index of the winner.
        player: usize,
    },
}
