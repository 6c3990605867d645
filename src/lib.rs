//! A darts scorekeeping engine with optional `no_std` support.
//!
//! The crate provides a [`Match`] type that resolves completed turns for the
//! countdown games (301, 501) and Cricket, including bust detection, leg
//! transitions, and win conditions. The [`snapshot`] module validates and
//! (de)serializes match state so a session can be resumed.
//!
//! # Example
//!
//! ```
//! use dartrs::{GameMode, Hit, Match, MatchOptions, Turn, TurnOutcome};
//!
//! let options = MatchOptions::default().with_mode(GameMode::Countdown501);
//! let mut game = Match::new(&options, &["Anna", "Ben"]).unwrap();
//!
//! let mut turn = Turn::new();
//! turn.register_hit(Hit::triple(20).unwrap());
//! turn.register_hit(Hit::triple(20).unwrap());
//! turn.register_hit(Hit::single(1).unwrap());
//!
//! let result = game.resolve_turn(&mut turn).unwrap();
//! assert_eq!(result.outcome, TurnOutcome::Continue);
//! assert_eq!(game.players()[0].score(), 380);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod error;
pub mod game;
pub mod hit;
pub mod options;
pub mod player;
pub mod result;
pub mod snapshot;
pub mod turn;

// Re-export main types
pub use error::{HitError, ResolveError, ValidationError};
pub use game::{Match, MatchPhase};
pub use hit::{BULL, CRICKET_NUMBERS, Hit, MISS};
pub use options::{
    GameMode, MAX_LEGS, MAX_NAME_LENGTH, MAX_PLAYERS, MAX_SNAPSHOT_PLAYERS, MIN_PLAYERS,
    MatchOptions,
};
pub use player::{Marks, Player};
pub use result::{TurnOutcome, TurnResult};
pub use snapshot::{RawHit, RawMode, RawPlayer, Snapshot};
pub use turn::{MAX_DARTS, Turn};
