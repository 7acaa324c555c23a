use crate::assets::SoundCue;
use crate::card::Card;
use crate::error::ActionError;
use crate::result::Outcome;

use super::{Game, ai, resolve};

impl Game {
    fn ensure_live(&self) -> Result<(), ActionError> {
        if self.is_over() {
            return Err(ActionError::GameOver);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// After the card is added the hand is checked for exact 21, a full hand
    /// without busting, and a bust, in that order. Any of these ends the
    /// session; read [`Game::outcome`] to find out.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is over, the player already holds
    /// `hand_limit` cards, or the deck is empty. The session is unchanged in
    /// every error case.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_live()?;

        if self.player.len() >= self.options.hand_limit {
            return Err(ActionError::HandLimit);
        }

        let card = self.deck.draw().ok_or(ActionError::NoCards)?;
        self.player.add_card(card);
        self.cues.push(SoundCue::Hit);
        log::debug!("player draws {card}, now {}", self.player.value());

        if let Some(outcome) = resolve::after_hit(&self.player, &self.ai, &self.options) {
            self.finish(outcome);
        }

        Ok(card)
    }

    /// Player action: Stand (let the AI play and settle the session).
    ///
    /// The AI draws to completion before the result is decided, so the
    /// session is always over when this returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::GameOver`] if the session has already ended.
    pub fn stand(&mut self) -> Result<Outcome, ActionError> {
        self.ensure_live()?;

        let outcome = match resolve::before_ai_draw(&self.player, &self.ai) {
            Some(outcome) => outcome,
            None => {
                let drawn = ai::play(&mut self.ai, &mut self.deck, &self.options);
                log::debug!("AI drew {} card(s)", drawn.len());
                resolve::after_stand(&self.player, &self.ai, &self.options)
            }
        };

        self.finish(outcome);
        Ok(outcome)
    }
}
