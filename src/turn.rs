//! The darts thrown in one visit to the board.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::HitError;
use crate::hit::Hit;

/// Number of darts in a full turn.
pub const MAX_DARTS: usize = 3;

/// Up to three hits recorded for the active player before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    hits: Vec<Hit>,
}

impl Turn {
    /// Creates an empty turn.
    #[must_use]
    pub const fn new() -> Self {
        Self { hits: Vec::new() }
    }

    /// Builds a turn from recorded hits.
    ///
    /// Returns `None` if there are more than [`MAX_DARTS`] hits.
    #[must_use]
    pub fn from_hits(hits: &[Hit]) -> Option<Self> {
        (hits.len() <= MAX_DARTS).then(|| Self {
            hits: hits.to_vec(),
        })
    }

    /// Appends a hit.
    ///
    /// Returns `false` and leaves the turn untouched if it already holds
    /// [`MAX_DARTS`] hits.
    pub fn register_hit(&mut self, hit: Hit) -> bool {
        if self.is_full() {
            return false;
        }
        self.hits.push(hit);
        true
    }

    /// Validates a raw value/multiplier pair and appends it.
    ///
    /// Returns `Ok(false)` if the turn was already full.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair is not a legal dart; the turn is unchanged.
    pub fn throw(&mut self, value: u8, multiplier: u8) -> Result<bool, HitError> {
        let hit = Hit::new(value, multiplier)?;
        Ok(self.register_hit(hit))
    }

    /// Clears all recorded hits.
    pub fn reset(&mut self) {
        self.hits.clear();
    }

    /// Returns the recorded hits in throw order.
    #[must_use]
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Returns the last dart thrown.
    #[must_use]
    pub fn last(&self) -> Option<&Hit> {
        self.hits.last()
    }

    /// Returns the number of recorded hits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Returns whether no hits have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Returns whether the turn holds [`MAX_DARTS`] hits and can be resolved.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.hits.len() >= MAX_DARTS
    }

    /// Sum of `value × multiplier` over the recorded hits.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.hits.iter().map(Hit::points).sum()
    }
}
