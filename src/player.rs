//! Per-player match state.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::hit::CRICKET_NUMBERS;
use crate::turn::Turn;

/// Marks needed to close a Cricket number.
pub const MARKS_TO_CLOSE: u8 = 3;

const fn slot(number: u8) -> Option<usize> {
    match number {
        15..=20 => Some((number - 15) as usize),
        25 => Some(6),
        _ => None,
    }
}

/// Cricket marks per scoring number, each in `0..=3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Marks([u8; 7]);

impl Marks {
    /// Creates marks with every number open.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; 7])
    }

    /// Returns the marks on `number`, or 0 if it is not a Cricket number.
    #[must_use]
    pub const fn get(&self, number: u8) -> u8 {
        match slot(number) {
            Some(index) => self.0[index],
            None => 0,
        }
    }

    /// Sets the marks on `number`, capped at three.
    ///
    /// Numbers outside [`CRICKET_NUMBERS`] are ignored.
    pub fn set(&mut self, number: u8, marks: u8) {
        if let Some(index) = slot(number) {
            self.0[index] = marks.min(MARKS_TO_CLOSE);
        }
    }

    /// Returns whether `number` has three marks.
    #[must_use]
    pub const fn is_closed(&self, number: u8) -> bool {
        self.get(number) >= MARKS_TO_CLOSE
    }

    /// Returns whether every Cricket number is closed.
    #[must_use]
    pub fn all_closed(&self) -> bool {
        self.0.iter().all(|&marks| marks >= MARKS_TO_CLOSE)
    }

    /// Iterates `(number, marks)` in [`CRICKET_NUMBERS`] order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        CRICKET_NUMBERS.iter().zip(self.0.iter()).map(|(&n, &m)| (n, m))
    }
}

/// A player in a match.
///
/// Score, legs, and marks only change through [`crate::Match::resolve_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    /// Remaining points (countdown) or accumulated points (Cricket).
    score: u32,
    /// Legs won so far (countdown modes).
    legs: u32,
    /// Present only in Cricket.
    marks: Option<Marks>,
    /// Resolved turns, oldest first.
    history: Vec<Turn>,
}

impl Player {
    pub(crate) const fn new(
        name: String,
        score: u32,
        legs: u32,
        marks: Option<Marks>,
        history: Vec<Turn>,
    ) -> Self {
        Self {
            name,
            score,
            legs,
            marks,
            history,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the number of legs won.
    #[must_use]
    pub const fn legs(&self) -> u32 {
        self.legs
    }

    /// Returns the Cricket marks, or `None` in countdown modes.
    #[must_use]
    pub const fn marks(&self) -> Option<&Marks> {
        self.marks.as_ref()
    }

    /// Returns resolved turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub(crate) const fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub(crate) const fn win_leg(&mut self) {
        self.legs = self.legs.saturating_add(1);
    }

    pub(crate) fn set_marks(&mut self, marks: Marks) {
        self.marks = Some(marks);
    }

    pub(crate) fn record(&mut self, turn: Turn) {
        self.history.push(turn);
    }
}
