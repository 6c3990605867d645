//! Match snapshots for persisting and resuming a session.
//!
//! A [`Snapshot`] is the loosely typed form of a match as it sits in storage:
//! every number is a plain signed integer and nothing is trusted. [`validate`]
//! is the only way back to a [`Match`], and it either accepts the whole
//! snapshot or rejects it with a [`ValidationError`]. Nothing is coerced.
//!
//! The JSON layout uses camel-case keys and writes the mode as `301`, `501`
//! or `"Cricket"`:
//!
//! ```
//! use dartrs::snapshot::{self, Snapshot};
//! use dartrs::{Match, MatchOptions};
//!
//! let game = Match::new(&MatchOptions::default(), &["Anna", "Ben"]).unwrap();
//! let json = snapshot::encode(&game).to_json().unwrap();
//! assert!(json.contains("\"startingScore\":501"));
//!
//! let restored = snapshot::validate(&Snapshot::from_json(&json).unwrap()).unwrap();
//! assert_eq!(restored, game);
//! ```

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ValidationError;
use crate::game::{Match, check_name};
use crate::hit::{CRICKET_NUMBERS, Hit};
use crate::options::{GameMode, MAX_SNAPSHOT_PLAYERS};
use crate::player::{MARKS_TO_CLOSE, Marks, Player};
use crate::turn::{MAX_DARTS, Turn};

const CRICKET_LABEL: &str = "Cricket";

/// Most a Cricket turn can score: three treble 20s.
const MAX_CRICKET_TURN_POINTS: u32 = 180;

/// A stored dart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHit {
    /// Board value.
    pub value: i64,
    /// Ring multiplier.
    pub multiplier: i64,
}

/// A stored game mode: a starting score or a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMode {
    /// Countdown starting score.
    Score(i64),
    /// Named mode (`"Cricket"`).
    Label(String),
}

/// A stored player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPlayer {
    /// Display name.
    pub name: String,
    /// Current score.
    pub score: i64,
    /// Legs won.
    pub legs: i64,
    /// Resolved turns, oldest first.
    pub hits: Vec<Vec<RawHit>>,
    /// Cricket marks keyed by number. Absent in countdown modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<BTreeMap<String, i64>>,
}

/// A stored match, plus the darts of the turn in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Players in throwing order.
    pub players: Vec<RawPlayer>,
    /// Index of the player to throw next.
    pub current_player_index: i64,
    /// Darts of the turn in progress.
    #[serde(default)]
    pub hits: Vec<RawHit>,
    /// Game mode.
    pub starting_score: RawMode,
    /// Legs needed to win.
    pub legs_to_win: i64,
    /// Legs in the match.
    pub total_legs: i64,
    /// Index of the winner, once the match is over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<i64>,
}

impl Snapshot {
    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Malformed`] if the text is not a snapshot.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json).map_err(|err| {
            warn!(reason = %err, "snapshot could not be parsed");
            ValidationError::Malformed
        })
    }

    /// Serializes the snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl TryFrom<&Snapshot> for Match {
    type Error = ValidationError;

    fn try_from(raw: &Snapshot) -> Result<Self, Self::Error> {
        validate(raw)
    }
}

impl From<&Match> for Snapshot {
    fn from(game: &Match) -> Self {
        encode(game)
    }
}

fn encode_hit(hit: &Hit) -> RawHit {
    RawHit {
        value: i64::from(hit.value()),
        multiplier: i64::from(hit.multiplier()),
    }
}

fn encode_mode(mode: GameMode) -> RawMode {
    match mode.starting_score() {
        Some(score) => RawMode::Score(i64::from(score)),
        None => RawMode::Label(CRICKET_LABEL.to_string()),
    }
}

fn encode_player(player: &Player) -> RawPlayer {
    RawPlayer {
        name: player.name().to_string(),
        score: i64::from(player.score()),
        legs: i64::from(player.legs()),
        hits: player
            .history()
            .iter()
            .map(|turn| turn.hits().iter().map(encode_hit).collect())
            .collect(),
        marks: player.marks().map(|marks| {
            marks
                .iter()
                .map(|(number, count)| (number.to_string(), i64::from(count)))
                .collect()
        }),
    }
}

/// Encodes a match with no turn in progress.
#[must_use]
pub fn encode(game: &Match) -> Snapshot {
    encode_session(game, &Turn::new())
}

/// Encodes a match together with the darts of the turn in progress.
#[must_use]
pub fn encode_session(game: &Match, turn: &Turn) -> Snapshot {
    Snapshot {
        players: game.players().iter().map(encode_player).collect(),
        current_player_index: game.current_player_index() as i64,
        hits: turn.hits().iter().map(encode_hit).collect(),
        starting_score: encode_mode(game.mode()),
        legs_to_win: i64::from(game.legs_to_win()),
        total_legs: i64::from(game.total_legs()),
        winner: game.winner().map(|winner| winner as i64),
    }
}

fn decode_mode(raw: &RawMode) -> Result<GameMode, ValidationError> {
    match raw {
        RawMode::Score(score) => u32::try_from(*score)
            .ok()
            .and_then(GameMode::from_starting_score)
            .ok_or(ValidationError::Mode),
        RawMode::Label(label) if label == CRICKET_LABEL => Ok(GameMode::Cricket),
        RawMode::Label(_) => Err(ValidationError::Mode),
    }
}

fn decode_hit(raw: &RawHit) -> Result<Hit, ValidationError> {
    let value = u8::try_from(raw.value).map_err(|_| ValidationError::History)?;
    let multiplier = u8::try_from(raw.multiplier).map_err(|_| ValidationError::History)?;
    Hit::new(value, multiplier).map_err(|_| ValidationError::History)
}

fn decode_turn(raw: &[RawHit]) -> Result<Turn, ValidationError> {
    let hits = raw.iter().map(decode_hit).collect::<Result<Vec<_>, _>>()?;
    Turn::from_hits(&hits).ok_or(ValidationError::History)
}

/// Keys must be exactly the Cricket numbers written in decimal.
fn decode_marks(raw: &BTreeMap<String, i64>) -> Result<Marks, ValidationError> {
    if raw.len() != CRICKET_NUMBERS.len() {
        return Err(ValidationError::Marks);
    }
    let mut marks = Marks::new();
    for number in CRICKET_NUMBERS {
        let count = raw
            .get(number.to_string().as_str())
            .and_then(|&count| u8::try_from(count).ok())
            .filter(|&count| count <= MARKS_TO_CLOSE)
            .ok_or(ValidationError::Marks)?;
        marks.set(number, count);
    }
    Ok(marks)
}

fn decode_player(
    raw: &RawPlayer,
    mode: GameMode,
    legs_to_win: u32,
) -> Result<Player, ValidationError> {
    check_name(&raw.name)?;

    let score = u32::try_from(raw.score).map_err(|_| ValidationError::Score)?;
    if mode.starting_score().is_some_and(|start| score > start) {
        return Err(ValidationError::Score);
    }

    let legs = u32::try_from(raw.legs)
        .ok()
        .filter(|&legs| legs <= legs_to_win)
        .ok_or(ValidationError::Legs)?;

    let marks = match (mode.is_countdown(), &raw.marks) {
        (true, None) => None,
        (false, Some(marks)) => Some(decode_marks(marks)?),
        _ => return Err(ValidationError::Marks),
    };

    let history = raw
        .hits
        .iter()
        .map(|turn| match turn.len() {
            MAX_DARTS => decode_turn(turn),
            _ => Err(ValidationError::History),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if !mode.is_countdown() {
        let most = u32::try_from(history.len())
            .map_or(u32::MAX, |turns| turns.saturating_mul(MAX_CRICKET_TURN_POINTS));
        if score > most {
            return Err(ValidationError::Score);
        }
    }

    Ok(Player::new(raw.name.clone(), score, legs, marks, history))
}

fn validate_index(raw: i64, len: usize, error: ValidationError) -> Result<usize, ValidationError> {
    usize::try_from(raw)
        .ok()
        .filter(|&index| index < len)
        .ok_or(error)
}

/// Validates a snapshot and rebuilds the match it describes.
///
/// The darts of a turn in progress are checked but not returned; use
/// [`validate_session`] to keep them.
///
/// # Errors
///
/// Returns the first violation found. A rejected snapshot should be
/// discarded and the caller should fall back to a fresh setup.
pub fn validate(raw: &Snapshot) -> Result<Match, ValidationError> {
    validate_session(raw).map(|(game, _)| game)
}

/// Validates a snapshot and rebuilds the match and the turn in progress.
///
/// # Errors
///
/// Returns the first violation found, as for [`validate`].
pub fn validate_session(raw: &Snapshot) -> Result<(Match, Turn), ValidationError> {
    let mode = decode_mode(&raw.starting_score)?;

    if !(1..=MAX_SNAPSHOT_PLAYERS).contains(&raw.players.len()) {
        return Err(ValidationError::PlayerCount);
    }

    let total_legs = u32::try_from(raw.total_legs)
        .ok()
        .filter(|&legs| legs >= 1)
        .ok_or(ValidationError::LegCount)?;
    let legs_to_win = u32::try_from(raw.legs_to_win)
        .ok()
        .filter(|&legs| legs == mode.legs_to_win(total_legs))
        .ok_or(ValidationError::LegCount)?;

    let current_player_index = validate_index(
        raw.current_player_index,
        raw.players.len(),
        ValidationError::CurrentPlayer,
    )?;

    let players = raw
        .players
        .iter()
        .map(|player| decode_player(player, mode, legs_to_win))
        .collect::<Result<Vec<_>, _>>()?;

    let winner = raw
        .winner
        .map(|winner| validate_index(winner, players.len(), ValidationError::Winner))
        .transpose()?;

    // A player on the winning leg count means the match was already decided.
    if winner.is_none() && players.iter().any(|player| player.legs() >= legs_to_win) {
        return Err(ValidationError::Legs);
    }

    let turn = decode_turn(&raw.hits)?;

    Ok((
        Match::from_parts(
            mode,
            players,
            current_player_index,
            legs_to_win,
            total_legs,
            winner,
        ),
        turn,
    ))
}

/// Restores a session from stored JSON.
///
/// Returns `None` for corrupt or invalid state, which the caller should
/// discard before starting a fresh setup.
#[must_use]
pub fn restore(json: &str) -> Option<(Match, Turn)> {
    let restored = Snapshot::from_json(json).and_then(|raw| validate_session(&raw));
    match restored {
        Ok(session) => Some(session),
        Err(err) => {
            warn!(reason = %err, "discarding stored match");
            None
        }
    }
}
