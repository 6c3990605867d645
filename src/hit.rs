//! Dart hits and board constants.

use crate::error::HitError;

/// Board value of the bullseye (outer bull is single, inner bull is double).
pub const BULL: u8 = 25;

/// Numbers that count in Cricket, in board order with the bull last.
pub const CRICKET_NUMBERS: [u8; 7] = [15, 16, 17, 18, 19, 20, BULL];

/// A dart that missed the scoring area.
pub const MISS: Hit = Hit {
    value: 0,
    multiplier: 1,
};

/// A single dart throw.
///
/// A `Hit` can only be built through [`Hit::new`] (or its shorthands), so every
/// value in circulation is a legal board segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hit {
    value: u8,
    multiplier: u8,
}

impl Hit {
    /// Creates a hit from a board value and ring multiplier.
    ///
    /// `value` is 0 for a miss, 1..=20, or [`BULL`]. `multiplier` is 1, 2 or 3;
    /// the bull only takes 1 (outer) or 2 (inner) and a miss only takes 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the value or multiplier is not a board segment.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{Hit, HitError};
    ///
    /// assert_eq!(Hit::new(20, 3).unwrap().points(), 60);
    /// assert_eq!(Hit::new(25, 3), Err(HitError::TripleBull));
    /// ```
    pub const fn new(value: u8, multiplier: u8) -> Result<Self, HitError> {
        if !matches!(value, 0..=20 | BULL) {
            return Err(HitError::InvalidValue);
        }
        if !matches!(multiplier, 1..=3) {
            return Err(HitError::InvalidMultiplier);
        }
        if value == BULL && multiplier == 3 {
            return Err(HitError::TripleBull);
        }
        if value == 0 && multiplier != 1 {
            return Err(HitError::InvalidMultiplier);
        }
        Ok(Self { value, multiplier })
    }

    /// Single ring of `value`.
    ///
    /// # Errors
    ///
    /// See [`Hit::new`].
    pub const fn single(value: u8) -> Result<Self, HitError> {
        Self::new(value, 1)
    }

    /// Double ring of `value`. `Hit::double(25)` is the inner bull.
    ///
    /// # Errors
    ///
    /// See [`Hit::new`].
    pub const fn double(value: u8) -> Result<Self, HitError> {
        Self::new(value, 2)
    }

    /// Treble ring of `value`.
    ///
    /// # Errors
    ///
    /// See [`Hit::new`].
    pub const fn triple(value: u8) -> Result<Self, HitError> {
        Self::new(value, 3)
    }

    /// The board value (0 for a miss).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// The ring multiplier.
    #[must_use]
    pub const fn multiplier(&self) -> u8 {
        self.multiplier
    }

    /// Points scored by this dart in a countdown game.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.value as u32 * self.multiplier as u32
    }

    /// Whether the dart landed in a double ring or the inner bull.
    #[must_use]
    pub const fn is_double(&self) -> bool {
        self.multiplier == 2
    }

    /// Whether this is a miss.
    #[must_use]
    pub const fn is_miss(&self) -> bool {
        self.value == 0
    }
}
