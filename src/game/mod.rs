//! Session engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::assets::SoundCue;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::OptionsError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Outcome;

mod actions;
pub mod ai;
pub mod resolve;
pub mod snapshot;

pub use snapshot::TableSnapshot;

/// A single-player blackjack session against the AI.
///
/// The game owns the deck, both hands and the random source used to shuffle.
/// Every mutation goes through [`Game::start_session`], [`Game::hit`] or
/// [`Game::stand`]; adapters read state back through the accessors after
/// each call.
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    deck: Deck,
    player: Hand,
    ai: Hand,
    /// Set exactly once per session; `Some` means the session is over.
    outcome: Option<Outcome>,
    cues: Vec<SoundCue>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed and deals the first session.
    ///
    /// # Example
    ///
    /// ```
    /// use bjvs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42)?;
    /// assert_eq!(game.player_hand().len(), 2);
    /// assert_eq!(game.ai_hand().len(), 2);
    /// assert_eq!(game.cards_remaining(), 48);
    /// # Ok::<(), bjvs::OptionsError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `options` fail [`GameOptions::validate`].
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;
        let mut game = Self::empty(options, ChaCha8Rng::seed_from_u64(seed));
        game.start_session();
        Ok(game)
    }

    /// Creates a game whose first session is dealt from `deck`.
    ///
    /// Later restarts shuffle a fresh deck with the seeded generator.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` fail [`GameOptions::validate`].
    pub fn with_deck(options: GameOptions, seed: u64, deck: Deck) -> Result<Self, OptionsError> {
        options.validate()?;
        let mut game = Self::empty(options, ChaCha8Rng::seed_from_u64(seed));
        game.deal_session(deck);
        Ok(game)
    }

    fn empty(options: GameOptions, rng: ChaCha8Rng) -> Self {
        Self {
            options,
            deck: Deck::from_draws(&[]),
            player: Hand::new(),
            ai: Hand::new(),
            outcome: None,
            cues: Vec::new(),
            rng,
        }
    }

    /// Replaces the current session with a freshly shuffled one.
    ///
    /// Deals two cards to the player, then two to the AI, and checks for
    /// blackjack on either side. Returns the outcome if the new session
    /// ended on the deal.
    pub fn start_session(&mut self) -> Option<Outcome> {
        let deck = Deck::build(&mut self.rng);
        self.deal_session(deck)
    }

    fn deal_session(&mut self, deck: Deck) -> Option<Outcome> {
        self.deck = deck;
        self.player = Hand::new();
        self.ai = Hand::new();
        self.outcome = None;
        self.cues.clear();

        for _ in 0..2 {
            if let Some(card) = self.deck.draw() {
                self.player.add_card(card);
            }
        }
        for _ in 0..2 {
            if let Some(card) = self.deck.draw() {
                self.ai.add_card(card);
            }
        }

        log::info!(
            "session started: player {} ({}), AI shows {}",
            self.player.value(),
            self.player.len(),
            self.ai_visible_value()
        );

        let outcome = resolve::opening(&self.player, &self.ai)?;
        self.finish(outcome);
        Some(outcome)
    }

    /// Marks the session as over. Only called once per session.
    fn finish(&mut self, outcome: Outcome) {
        debug_assert!(self.outcome.is_none(), "session finished twice");
        log::info!(
            "session over: {:?} by {:?} ({} vs {})",
            outcome.winner,
            outcome.reason,
            outcome.player_value,
            outcome.ai_value
        );
        self.cues.push(outcome.sound_cue());
        self.outcome = Some(outcome);
    }

    /// Returns the options this game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the AI's hand, including the hidden card.
    #[must_use]
    pub const fn ai_hand(&self) -> &Hand {
        &self.ai
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the outcome, or `None` while the session is live.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns whether the session is over.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the AI cards the player may see.
    ///
    /// While the session is live only the first AI card is face up.
    #[must_use]
    pub fn ai_visible_cards(&self) -> &[Card] {
        if self.is_over() {
            self.ai.cards()
        } else {
            &self.ai.cards()[..self.ai.len().min(1)]
        }
    }

    /// Calculates the AI value the player may see.
    #[must_use]
    pub fn ai_visible_value(&self) -> u16 {
        if self.is_over() {
            self.ai.value()
        } else {
            self.ai.first().map_or(0, |card| u16::from(card.value()))
        }
    }

    /// Drains the sound cues queued since the last call.
    pub fn take_cues(&mut self) -> Vec<SoundCue> {
        core::mem::take(&mut self.cues)
    }
}
