//! Read-only view of a session for presentation adapters.

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::Outcome;

use super::Game;

/// Everything an adapter needs to redraw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    /// The player's cards, in deal order.
    pub player_cards: Vec<Card>,
    /// The AI's cards; `None` marks a card still face down.
    pub ai_cards: Vec<Option<Card>>,
    /// The player's score.
    pub player_value: u16,
    /// The AI score the player is allowed to see.
    pub ai_visible_value: u16,
    /// Cards left in the deck.
    pub cards_remaining: usize,
    /// The result, once the session is over.
    pub outcome: Option<Outcome>,
}

impl Game {
    /// Captures the table as the player sees it.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        let revealed = self.ai_visible_cards().len();
        let ai_cards = self
            .ai
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (index < revealed).then_some(*card))
            .collect();

        TableSnapshot {
            player_cards: self.player.cards().to_vec(),
            ai_cards,
            player_value: self.player.value(),
            ai_visible_value: self.ai_visible_value(),
            cards_remaining: self.cards_remaining(),
            outcome: self.outcome,
        }
    }
}
