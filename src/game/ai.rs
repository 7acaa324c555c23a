//! The AI's drawing policy.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{Hand, TWENTY_ONE};
use crate::options::GameOptions;

/// Draws cards for the AI until it stands.
///
/// The AI never draws on 21. Otherwise it draws one card at a time while its
/// score is below `ai_stand_threshold`, it holds fewer than `hand_limit`
/// cards, and the deck still has cards. An empty deck ends the loop as an
/// implicit stand. The player's hand is never consulted.
///
/// Returns the cards drawn.
pub fn play(ai: &mut Hand, deck: &mut Deck, options: &GameOptions) -> Vec<Card> {
    let mut drawn = Vec::new();

    if ai.value() == TWENTY_ONE {
        return drawn;
    }

    while ai.value() < u16::from(options.ai_stand_threshold) && ai.len() < options.hand_limit {
        let Some(card) = deck.draw() else {
            log::debug!("deck exhausted, AI stands on {}", ai.value());
            break;
        };
        ai.add_card(card);
        log::debug!("AI draws {card}, now {}", ai.value());
        drawn.push(card);
    }

    drawn
}
