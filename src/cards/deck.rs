//! Deck generation.
//!
//! One standard deck: 4 copies of each of the 13 ranks, 52 cards total.
//! Suits carry no meaning in this game, so copies are indistinguishable.

use super::card::Card;
use super::rank::Rank;
use crate::core::rng::GameRng;

/// Copies of each rank in a deck. Stands in for the four suits.
pub const COPIES_PER_RANK: usize = 4;

/// Cards in a full deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * COPIES_PER_RANK;

/// A full deck in rank order, unshuffled.
///
/// Deterministic layout for tests and scripted deals; normal play goes
/// through [`standard_deck`]. Dealing consumes from the *tail* of the
/// returned vector.
#[must_use]
pub fn ordered_deck() -> Vec<Card> {
    Rank::ALL
        .iter()
        .flat_map(|&rank| (0..COPIES_PER_RANK).map(move |_| Card::new(rank)))
        .collect()
}

/// A full deck shuffled by the given RNG.
#[must_use]
pub fn standard_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = ordered_deck();
    rng.shuffle(&mut deck);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank_count(deck: &[Card], rank: Rank) -> usize {
        deck.iter().filter(|c| c.rank() == rank).count()
    }

    #[test]
    fn test_deck_size() {
        assert_eq!(DECK_SIZE, 52);
        assert_eq!(ordered_deck().len(), DECK_SIZE);
    }

    #[test]
    fn test_four_of_each_rank() {
        let mut rng = GameRng::new(42);
        let deck = standard_deck(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        for rank in Rank::ALL {
            assert_eq!(rank_count(&deck, rank), COPIES_PER_RANK);
        }
    }

    #[test]
    fn test_all_cards_start_face_down() {
        let mut rng = GameRng::new(42);
        for card in standard_deck(&mut rng) {
            assert!(!card.is_face_up());
            assert!(!card.is_retired());
        }
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let deal = |seed: u64| {
            let mut rng = GameRng::new(seed);
            standard_deck(&mut rng)
                .iter()
                .map(|c| c.rank())
                .collect::<Vec<_>>()
        };

        assert_eq!(deal(7), deal(7));
        assert_ne!(deal(7), deal(8));
    }
}
