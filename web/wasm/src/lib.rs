use dartrs::snapshot;
use dartrs::{GameMode, Match, MatchOptions, MatchPhase, Player, Turn, TurnOutcome, TurnResult};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmMatch {
    game: Match,
    turn: Turn,
}

#[wasm_bindgen]
impl WasmMatch {
    /// `mode` is "301", "501" or "Cricket"; `names` is an array of strings.
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str, names: JsValue, total_legs: u32) -> Result<WasmMatch, JsValue> {
        let mode = mode_from_str(mode).ok_or_else(|| JsValue::from_str("invalid game mode"))?;
        let names: Vec<String> = serde_wasm_bindgen::from_value(names).map_err(js_err)?;
        let options = MatchOptions::default()
            .with_mode(mode)
            .with_total_legs(total_legs);
        let game = Match::new(&options, names.as_slice()).map_err(js_err)?;

        Ok(Self {
            game,
            turn: Turn::new(),
        })
    }

    /// Resumes from stored JSON. Throws if the state is unusable, in which
    /// case the caller should clear storage and return to setup.
    pub fn restore(json: &str) -> Result<WasmMatch, JsValue> {
        snapshot::restore(json)
            .map(|(game, turn)| Self { game, turn })
            .ok_or_else(|| JsValue::from_str("stored match is unusable"))
    }

    pub fn save(&self) -> Result<String, JsValue> {
        snapshot::encode_session(&self.game, &self.turn)
            .to_json()
            .map_err(js_err)
    }

    /// Returns whether the dart was recorded (false once three are in).
    pub fn register_hit(&mut self, value: u8, multiplier: u8) -> Result<bool, JsValue> {
        self.turn.throw(value, multiplier).map_err(js_err)
    }

    pub fn miss(&mut self) -> bool {
        self.turn.register_hit(dartrs::MISS)
    }

    pub fn reset_turn(&mut self) {
        self.turn.reset();
    }

    pub fn can_confirm(&self) -> bool {
        self.turn.is_full() && self.game.winner().is_none()
    }

    pub fn resolve_turn(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.resolve_turn(&mut self.turn).map_err(js_err)?;
        to_js_value(&JsTurnResult::from(result))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let view = View {
            mode: mode_to_str(self.game.mode()),
            phase: phase_to_str(self.game.phase()),
            winner: self.game.winner().map(|w| w as u32),
            current_player: self.game.current_player_index() as u32,
            current_leg: self.game.current_leg(),
            total_legs: self.game.total_legs(),
            legs_to_win: self.game.legs_to_win(),
            players: self.game.players().iter().map(JsPlayer::from).collect(),
            hits: self.turn.hits().iter().copied().map(JsHit::from).collect(),
            remaining_preview: self.game.remaining_preview(&self.turn),
        };

        to_js_value(&view)
    }
}

#[derive(Serialize)]
struct View {
    mode: &'static str,
    phase: &'static str,
    winner: Option<u32>,
    current_player: u32,
    current_leg: u32,
    total_legs: u32,
    legs_to_win: u32,
    players: Vec<JsPlayer>,
    hits: Vec<JsHit>,
    remaining_preview: Option<i64>,
}

#[derive(Serialize)]
struct JsHit {
    value: u8,
    multiplier: u8,
}

impl From<dartrs::Hit> for JsHit {
    fn from(hit: dartrs::Hit) -> Self {
        Self {
            value: hit.value(),
            multiplier: hit.multiplier(),
        }
    }
}

#[derive(Serialize)]
struct JsMark {
    number: u8,
    count: u8,
}

#[derive(Serialize)]
struct JsPlayer {
    name: String,
    score: u32,
    legs: u32,
    marks: Option<Vec<JsMark>>,
    turns: u32,
}

impl From<&Player> for JsPlayer {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            score: player.score(),
            legs: player.legs(),
            marks: player.marks().map(|marks| {
                marks
                    .iter()
                    .map(|(number, count)| JsMark { number, count })
                    .collect()
            }),
            turns: player.history().len() as u32,
        }
    }
}

#[derive(Serialize)]
struct JsTurnResult {
    player: u32,
    outcome: &'static str,
    points: u32,
    bust: bool,
}

impl From<TurnResult> for JsTurnResult {
    fn from(result: TurnResult) -> Self {
        Self {
            player: result.player as u32,
            outcome: outcome_to_str(result.outcome),
            points: result.points,
            bust: result.bust,
        }
    }
}

fn mode_from_str(mode: &str) -> Option<GameMode> {
    match mode {
        "301" => Some(GameMode::Countdown301),
        "501" => Some(GameMode::Countdown501),
        "Cricket" => Some(GameMode::Cricket),
        _ => None,
    }
}

fn mode_to_str(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Countdown301 => "301",
        GameMode::Countdown501 => "501",
        GameMode::Cricket => "Cricket",
    }
}

fn phase_to_str(phase: MatchPhase) -> &'static str {
    match phase {
        MatchPhase::Setup => "Setup",
        MatchPhase::InProgress => "InProgress",
        MatchPhase::Won { .. } => "Won",
    }
}

fn outcome_to_str(outcome: TurnOutcome) -> &'static str {
    match outcome {
        TurnOutcome::Continue => "Continue",
        TurnOutcome::LegWon { .. } => "LegWon",
        TurnOutcome::MatchWon { .. } => "MatchWon",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
