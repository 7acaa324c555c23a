//! Session outcome types.

use crate::assets::SoundCue;

/// Who won the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The human player.
    Player,
    /// The AI.
    Ai,
    /// Nobody; the session is a draw.
    Draw,
}

/// The rule that ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeReason {
    /// Both initial hands total 21.
    BothBlackjack,
    /// The player's initial hand totals 21.
    PlayerBlackjack,
    /// The AI's initial hand totals 21.
    AiBlackjack,
    /// The player hit to exactly 21.
    PlayerTwentyOne,
    /// The player filled the hand without busting.
    PlayerFiveCardCharlie,
    /// The player went over 21.
    PlayerBust,
    /// The AI already held 21 when the player stood.
    AiHeldTwentyOne,
    /// The AI filled its hand without busting.
    AiFiveCardCharlie,
    /// The AI drew to exactly 21.
    AiTwentyOne,
    /// The AI went over 21.
    AiBust,
    /// Neither side hit a special rule; the higher score won.
    HigherScore,
    /// Neither side hit a special rule and the scores tied.
    Tie,
}

/// Final result of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    /// Who won.
    pub winner: Winner,
    /// The rule that decided it.
    pub reason: OutcomeReason,
    /// The player's final score.
    pub player_value: u16,
    /// The AI's final score.
    pub ai_value: u16,
}

impl Outcome {
    /// Returns the notice shown to the player when the session ends.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self.reason {
            OutcomeReason::BothBlackjack => "Both have blackjack. Draw!",
            OutcomeReason::PlayerBlackjack => "You got blackjack! You win!",
            OutcomeReason::AiBlackjack => "AI got blackjack! AI wins!",
            OutcomeReason::PlayerTwentyOne => "You hit exactly 21! You win!",
            OutcomeReason::PlayerFiveCardCharlie => "Five-card Charlie! You win!",
            OutcomeReason::PlayerBust => "You busted! AI wins!",
            OutcomeReason::AiHeldTwentyOne => "AI has 21! AI wins!",
            OutcomeReason::AiFiveCardCharlie => "AI five-card Charlie! You lose!",
            OutcomeReason::AiTwentyOne => "AI got 21! You lose!",
            OutcomeReason::AiBust => "AI busted! You win!",
            OutcomeReason::HigherScore => match self.winner {
                Winner::Player => "You win!",
                Winner::Ai | Winner::Draw => "AI wins!",
            },
            OutcomeReason::Tie => "Draw!",
        }
    }

    /// Returns the sound cue for this result. Draws use the losing cue.
    #[must_use]
    pub const fn sound_cue(&self) -> SoundCue {
        match self.winner {
            Winner::Player => SoundCue::Win,
            Winner::Ai | Winner::Draw => SoundCue::Lose,
        }
    }
}
