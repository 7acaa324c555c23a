//! Property tests for scoring and dealing.

use bjvs::{Card, DECK_SIZE, Deck, Game, GameOptions, SUITS, Suit, score};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

fn arb_card() -> impl Strategy<Value = Card> {
    (0usize..4, 1u8..=13).prop_map(|(suit, rank)| Card::new(SUITS[suit], rank))
}

proptest! {
    #[test]
    fn score_ignores_order_and_suit(cards in prop::collection::vec(arb_card(), 0..8), seed in any::<u64>()) {
        let mut shuffled = cards.clone();
        shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        let resuited: Vec<Card> = cards.iter().map(|c| Card::new(Suit::Spades, c.rank)).collect();

        prop_assert_eq!(score(&cards), score(&shuffled));
        prop_assert_eq!(score(&cards), score(&resuited));
    }

    #[test]
    fn score_is_best_total_at_or_below_twenty_one(cards in prop::collection::vec(arb_card(), 0..8)) {
        let hard: u32 = cards.iter().map(|c| if c.is_ace() { 1 } else { u32::from(c.value()) }).sum();
        let aces = cards.iter().filter(|c| c.is_ace()).count() as u32;
        let best = (0..=aces)
            .map(|soft| hard + 10 * soft)
            .filter(|&total| total <= 21)
            .max()
            .unwrap_or(hard);

        prop_assert_eq!(u32::from(score(&cards)), best);
    }

    #[test]
    fn built_deck_holds_every_card_once(seed in any::<u64>()) {
        let deck = Deck::build(&mut ChaCha8Rng::seed_from_u64(seed));
        let mut keys: Vec<String> = deck.cards().iter().map(Card::asset_key).collect();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), DECK_SIZE);
    }

    #[test]
    fn dealing_conserves_cards(seed in any::<u64>(), hits in 0usize..6) {
        let mut game = Game::new(GameOptions::default(), seed).unwrap();
        for _ in 0..hits {
            let before = game.cards_remaining();
            let held = game.player_hand().len();
            if game.hit().is_ok() {
                prop_assert_eq!(game.cards_remaining(), before - 1);
                prop_assert_eq!(game.player_hand().len(), held + 1);
            }
        }
        if !game.is_over() {
            game.stand().unwrap();
        }
        prop_assert!(game.is_over());
        prop_assert!(game.ai_hand().len() <= 5);
        prop_assert_eq!(
            game.cards_remaining() + game.player_hand().len() + game.ai_hand().len(),
            DECK_SIZE
        );
    }
}
