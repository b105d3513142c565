use rand::Rng;
use tracing::debug;

use crate::card_game::models::CardType;

/// Copies of each card type in the standard deck.
pub const CARDS_PER_TYPE: usize = 10;

/// The canonical deck. Built once per session and never mutated; draws
/// work on shuffled copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<CardType>,
}

impl Deck {
    /// Build a deck holding every card type `cards_per_type` times, type-major
    /// (all Aces, then all Kings, ...).
    pub fn initialize(cards_per_type: usize) -> Self {
        let cards: Vec<CardType> = CardType::ALL
            .iter()
            .flat_map(|&card| std::iter::repeat(card).take(cards_per_type))
            .collect();
        debug!(cards = cards.len(), cards_per_type, "deck initialized");
        Deck { cards }
    }

    /// 11 types × 10 copies = 110 cards.
    pub fn standard() -> Self {
        Self::initialize(CARDS_PER_TYPE)
    }

    pub fn cards(&self) -> &[CardType] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// A freshly shuffled copy of the full deck.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<CardType> {
        shuffle(&self.cards, rng)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

/// Return a uniformly random permutation of `items`, leaving the input as is.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();

    // Fisher-Yates shuffle
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }

    debug!(len = shuffled.len(), "shuffled");
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn counts(cards: &[CardType]) -> HashMap<CardType, usize> {
        let mut map = HashMap::new();
        for &c in cards {
            *map.entry(c).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn standard_deck_has_110_cards_ten_of_each() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 110);
        let counts = counts(deck.cards());
        assert_eq!(counts.len(), 11);
        for card in CardType::ALL {
            assert_eq!(counts[&card], 10, "wrong count for {card}");
        }
    }

    #[test]
    fn construction_is_type_major() {
        let deck = Deck::initialize(3);
        assert_eq!(
            &deck.cards()[..6],
            &[
                CardType::Ace, CardType::Ace, CardType::Ace,
                CardType::King, CardType::King, CardType::King,
            ]
        );
        assert_eq!(deck.cards().last(), Some(&CardType::Four));
        assert_eq!(Deck::initialize(3), Deck::initialize(3));
    }

    #[test]
    fn shuffle_is_a_permutation_and_leaves_input_alone() {
        let deck = Deck::standard();
        let before = deck.cards().to_vec();
        let mut rng = StdRng::seed_from_u64(42);
        let shuffled = deck.shuffled(&mut rng);

        assert_eq!(deck.cards(), before.as_slice());
        assert_eq!(shuffled.len(), before.len());
        assert_eq!(counts(&shuffled), counts(&before));
        assert_ne!(shuffled, before, "110-card shuffle left deck in order");
    }

    #[test]
    fn shuffle_handles_trivial_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffle::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffle(&[7u8], &mut rng), vec![7]);
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<CardType> {
            let mut rng = StdRng::seed_from_u64(seed);
            Deck::standard().shuffled(&mut rng)
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn shuffle_spreads_evenly_over_permutations_of_three() {
        const TRIALS: usize = 60_000;
        let mut rng = StdRng::seed_from_u64(123);
        let mut seen: HashMap<Vec<u8>, usize> = HashMap::new();
        for _ in 0..TRIALS {
            *seen.entry(shuffle(&[1u8, 2, 3], &mut rng)).or_insert(0) += 1;
        }

        assert_eq!(seen.len(), 6);
        let expected = TRIALS / 6;
        for (perm, n) in &seen {
            assert!(
                n.abs_diff(expected) <= expected / 10,
                "{perm:?} drawn {n} times, expected about {expected}"
            );
        }
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation_of_any_input(
            items in prop::collection::vec(any::<u8>(), 0..200),
            seed in any::<u64>(),
        ) {
            let before = items.clone();
            let mut rng = StdRng::seed_from_u64(seed);
            let shuffled = shuffle(&items, &mut rng);

            prop_assert_eq!(&items, &before);
            prop_assert_eq!(shuffled.len(), items.len());
            let mut sorted_in = items.clone();
            let mut sorted_out = shuffled;
            sorted_in.sort_unstable();
            sorted_out.sort_unstable();
            prop_assert_eq!(sorted_in, sorted_out);
        }
    }
}
