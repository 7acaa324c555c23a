//! Terminal-condition checks.
//!
//! Each check runs at a fixed point of the session and returns `Some` only
//! when the session must end. Conditions are tested in priority order, so
//! an AI that draws to 21 is reported as such rather than as a higher score.

use core::cmp::Ordering;

use crate::hand::{Hand, TWENTY_ONE};
use crate::options::GameOptions;
use crate::result::{Outcome, OutcomeReason, Winner};

fn outcome(winner: Winner, reason: OutcomeReason, player: &Hand, ai: &Hand) -> Outcome {
    Outcome {
        winner,
        reason,
        player_value: player.value(),
        ai_value: ai.value(),
    }
}

/// Checks the freshly dealt hands for 21.
#[must_use]
pub fn opening(player: &Hand, ai: &Hand) -> Option<Outcome> {
    let player_21 = player.value() == TWENTY_ONE;
    let ai_21 = ai.value() == TWENTY_ONE;

    match (player_21, ai_21) {
        (true, true) => Some(outcome(Winner::Draw, OutcomeReason::BothBlackjack, player, ai)),
        (true, false) => Some(outcome(
            Winner::Player,
            OutcomeReason::PlayerBlackjack,
            player,
            ai,
        )),
        (false, true) => Some(outcome(Winner::Ai, OutcomeReason::AiBlackjack, player, ai)),
        (false, false) => None,
    }
}

/// Checks the player's hand after a hit.
///
/// Exact 21 wins first, then a full hand without busting (when enabled),
/// then a bust loses.
#[must_use]
pub fn after_hit(player: &Hand, ai: &Hand, options: &GameOptions) -> Option<Outcome> {
    let value = player.value();

    if value == TWENTY_ONE {
        return Some(outcome(
            Winner::Player,
            OutcomeReason::PlayerTwentyOne,
            player,
            ai,
        ));
    }

    if options.five_card_charlie && player.len() == options.hand_limit && value <= TWENTY_ONE {
        return Some(outcome(
            Winner::Player,
            OutcomeReason::PlayerFiveCardCharlie,
            player,
            ai,
        ));
    }

    if value > TWENTY_ONE {
        return Some(outcome(Winner::Ai, OutcomeReason::PlayerBust, player, ai));
    }

    None
}

/// Decides the session once the AI has finished drawing.
#[must_use]
pub fn after_stand(player: &Hand, ai: &Hand, options: &GameOptions) -> Outcome {
    let player_value = player.value();
    let ai_value = ai.value();

    if options.five_card_charlie && ai.len() == options.hand_limit && ai_value <= TWENTY_ONE {
        return outcome(Winner::Ai, OutcomeReason::AiFiveCardCharlie, player, ai);
    }

    if ai_value == TWENTY_ONE {
        return outcome(Winner::Ai, OutcomeReason::AiTwentyOne, player, ai);
    }

    if ai_value > TWENTY_ONE {
        return outcome(Winner::Player, OutcomeReason::AiBust, player, ai);
    }

    match player_value.cmp(&ai_value) {
        Ordering::Greater => outcome(Winner::Player, OutcomeReason::HigherScore, player, ai),
        Ordering::Less => outcome(Winner::Ai, OutcomeReason::HigherScore, player, ai),
        Ordering::Equal => outcome(Winner::Draw, OutcomeReason::Tie, player, ai),
    }
}

/// Returns the immediate AI win when the AI already holds 21 at stand time.
#[must_use]
pub fn before_ai_draw(player: &Hand, ai: &Hand) -> Option<Outcome> {
    (ai.value() == TWENTY_ONE)
        .then(|| outcome(Winner::Ai, OutcomeReason::AiHeldTwentyOne, player, ai))
}
