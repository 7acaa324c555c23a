//! Single-player blackjack against a fixed-threshold AI, with optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that owns one session at a time: the
//! shuffled deck, the player's hand and the AI's hand. The player hits or
//! stands; the AI draws while below a fixed threshold; the session ends on
//! blackjack, exact 21, five-card Charlie, bust, or a score comparison.
//!
//! Rendering and audio are left to adapters, which read state back through
//! [`Game::snapshot`] and [`Game::take_cues`] after each action.
//!
//! # Example
//!
//! ```
//! use bjvs::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42)?;
//! if !game.is_over() {
//!     let outcome = game.stand()?;
//!     println!("{}", outcome.message());
//! }
//! assert!(game.is_over());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod assets;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
#[cfg(feature = "std")]
pub use assets::AssetCatalog;
pub use assets::{ImageAsset, SoundCue};
pub use card::{Card, DECK_SIZE, RANKS, SUITS, Suit};
pub use deck::Deck;
pub use error::{ActionError, OptionsError};
pub use game::{Game, TableSnapshot};
pub use hand::{Hand, TWENTY_ONE, score};
pub use options::GameOptions;
pub use result::{Outcome, OutcomeReason, Winner};
