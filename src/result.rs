//! Turn resolution results.

/// What a resolved turn means for the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Play passes to the next player.
    Continue,
    /// The player checked out a leg but the match goes on.
    LegWon {
        /// Index of the leg winner.
        player: usize,
    },
    /// The player won the match. No further turns are accepted.
    MatchWon {
        /// Index of the match winner.
        player: usize,
    },
}

/// Result of resolving one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    /// Index of the player who threw.
    pub player: usize,
    /// Outcome for the match.
    pub outcome: TurnOutcome,
    /// Points counted this turn: subtracted in countdown, added in Cricket.
    /// Zero on a bust.
    pub points: u32,
    /// Whether the turn busted (countdown only).
    pub bust: bool,
}
