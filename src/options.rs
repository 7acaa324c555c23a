//! Game configuration options.

use crate::card::DECK_SIZE;
use crate::error::OptionsError;

/// Smallest hand limit: the two dealt cards plus at least one draw.
pub const MIN_HAND_LIMIT: usize = 3;

const MAX_STAND_THRESHOLD: u8 = 21;

/// Configuration options for a session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjvs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_limit(6)
///     .with_ai_stand_threshold(17)
///     .with_five_card_charlie(false);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Maximum number of cards either hand may hold.
    pub hand_limit: usize,
    /// The AI keeps drawing while its score is strictly below this value.
    pub ai_stand_threshold: u8,
    /// Whether reaching the hand limit without busting wins outright.
    pub five_card_charlie: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_limit: 5,
            ai_stand_threshold: 14,
            five_card_charlie: true,
        }
    }
}

impl GameOptions {
    /// Sets the maximum number of cards per hand.
    ///
    /// # Example
    ///
    /// ```
    /// use bjvs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_limit(6);
    /// assert_eq!(options.hand_limit, 6);
    /// ```
    #[must_use]
    pub const fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Sets the score below which the AI keeps drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjvs::GameOptions;
    ///
    /// let options = GameOptions::default().with_ai_stand_threshold(17);
    /// assert_eq!(options.ai_stand_threshold, 17);
    /// ```
    #[must_use]
    pub const fn with_ai_stand_threshold(mut self, threshold: u8) -> Self {
        self.ai_stand_threshold = threshold;
        self
    }

    /// Sets whether a full hand without busting wins outright.
    ///
    /// # Example
    ///
    /// ```
    /// use bjvs::GameOptions;
    ///
    /// let options = GameOptions::default().with_five_card_charlie(false);
    /// assert!(!options.five_card_charlie);
    /// ```
    #[must_use]
    pub const fn with_five_card_charlie(mut self, enabled: bool) -> Self {
        self.five_card_charlie = enabled;
        self
    }

    /// Checks that the options describe a playable session.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand limit leaves no room to draw, if two full hands
    /// would not fit in one deck, or if the AI threshold is outside 1..=21.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.hand_limit < MIN_HAND_LIMIT {
            return Err(OptionsError::HandLimitTooSmall);
        }
        if self.hand_limit > DECK_SIZE / 2 {
            return Err(OptionsError::HandLimitTooLarge);
        }
        if self.ai_stand_threshold == 0 || self.ai_stand_threshold > MAX_STAND_THRESHOLD {
            return Err(OptionsError::ThresholdOutOfRange);
        }
        Ok(())
    }
}
