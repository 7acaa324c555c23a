//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during player actions.
///
/// A rejected action never changes the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The session has already ended.
    #[error("the game is over")]
    GameOver,
    /// The player already holds the maximum number of cards.
    #[error("hand already holds the maximum number of cards")]
    HandLimit,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors reported by [`GameOptions::validate`](crate::GameOptions::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Hand limit leaves no room to draw past the initial deal.
    #[error("hand limit must be at least 3")]
    HandLimitTooSmall,
    /// Two hands at the limit would not fit in one deck.
    #[error("hand limit must be at most 26")]
    HandLimitTooLarge,
    /// AI stand threshold is outside 1..=21.
    #[error("AI stand threshold must be between 1 and 21")]
    ThresholdOutOfRange,
}
