use bjvs::{Card, Game, GameOptions, Outcome, OutcomeReason, SoundCue, Suit, TableSnapshot, Winner};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmGame, JsValue> {
        let game = Game::new(GameOptions::default(), seed as u64).map_err(js_err)?;
        Ok(Self { game })
    }

    pub fn reset(&mut self, seed: u32) -> Result<(), JsValue> {
        self.game = Game::new(GameOptions::default(), seed as u64).map_err(js_err)?;
        Ok(())
    }

    pub fn restart(&mut self) {
        self.game.start_session();
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.game.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.game.stand().map_err(js_err)?;
        to_js_value(&JsOutcome::from(outcome))
    }

    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    pub fn take_cues(&mut self) -> Result<JsValue, JsValue> {
        let cues: Vec<&'static str> = self
            .game
            .take_cues()
            .into_iter()
            .map(SoundCue::file_name)
            .collect();
        to_js_value(&cues)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(self.game.snapshot()))
    }
}

#[derive(Serialize)]
struct Snapshot {
    player_cards: Vec<JsCard>,
    ai_cards: Vec<Option<JsCard>>,
    player_value: u16,
    ai_visible_value: u16,
    cards_remaining: u32,
    outcome: Option<JsOutcome>,
}

impl From<TableSnapshot> for Snapshot {
    fn from(table: TableSnapshot) -> Self {
        Self {
            player_cards: table.player_cards.into_iter().map(card_to_js).collect(),
            ai_cards: table
                .ai_cards
                .into_iter()
                .map(|card| card.map(card_to_js))
                .collect(),
            player_value: table.player_value,
            ai_visible_value: table.ai_visible_value,
            cards_remaining: table.cards_remaining as u32,
            outcome: table.outcome.map(JsOutcome::from),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    key: String,
    image: String,
}

#[derive(Serialize)]
struct JsOutcome {
    winner: &'static str,
    reason: &'static str,
    message: &'static str,
    player_value: u16,
    ai_value: u16,
}

impl From<Outcome> for JsOutcome {
    fn from(outcome: Outcome) -> Self {
        Self {
            winner: winner_to_str(outcome.winner),
            reason: reason_to_str(outcome.reason),
            message: outcome.message(),
            player_value: outcome.player_value,
            ai_value: outcome.ai_value,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
        key: card.asset_key(),
        image: bjvs::ImageAsset::Card(card).file_name(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn winner_to_str(winner: Winner) -> &'static str {
    match winner {
        Winner::Player => "Player",
        Winner::Ai => "Ai",
        Winner::Draw => "Draw",
    }
}

fn reason_to_str(reason: OutcomeReason) -> &'static str {
    match reason {
        OutcomeReason::BothBlackjack => "BothBlackjack",
        OutcomeReason::PlayerBlackjack => "PlayerBlackjack",
        OutcomeReason::AiBlackjack => "AiBlackjack",
        OutcomeReason::PlayerTwentyOne => "PlayerTwentyOne",
        OutcomeReason::PlayerFiveCardCharlie => "PlayerFiveCardCharlie",
        OutcomeReason::PlayerBust => "PlayerBust",
        OutcomeReason::AiHeldTwentyOne => "AiHeldTwentyOne",
        OutcomeReason::AiFiveCardCharlie => "AiFiveCardCharlie",
        OutcomeReason::AiTwentyOne => "AiTwentyOne",
        OutcomeReason::AiBust => "AiBust",
        OutcomeReason::HigherScore => "HigherScore",
        OutcomeReason::Tie => "Tie",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
