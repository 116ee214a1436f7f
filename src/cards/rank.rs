//! Ranks and the matching weight table.
//!
//! The deck uses the original text labels: `2`..`10` plus `V` (valet),
//! `D` (dame), `K` (king) and `T` (ace). Weights follow the table
//! 2..10 at face value, V=11, D=12, K=13, T=1. Aces are low; the only
//! rank that reaches the match target on its own is the king.

use serde::{Deserialize, Serialize};

/// Two cards match when their weights sum to this.
pub const MATCH_TARGET: u8 = 13;

/// A card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    /// Jack, weight 11.
    Valet,
    /// Queen, weight 12.
    Dame,
    /// Weight 13: pairs with another king, or with itself.
    King,
    /// Ace, weight 1.
    Tuz,
}

impl Rank {
    /// All 13 ranks in deck order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Valet,
        Rank::Dame,
        Rank::King,
        Rank::Tuz,
    ];

    /// Numeric weight used by the matching rule.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Valet => 11,
            Rank::Dame => 12,
            Rank::King => 13,
            Rank::Tuz => 1,
        }
    }

    /// Text label shown on a face-up card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Valet => "V",
            Rank::Dame => "D",
            Rank::King => "K",
            Rank::Tuz => "T",
        }
    }

    /// Check the matching rule against another rank.
    ///
    /// True when the weights sum to [`MATCH_TARGET`], or when both ranks
    /// carry the full target weight. The second clause is what lets a king
    /// pair with another king, and lets a lone king retire itself when both
    /// halves of a pair address the same card.
    #[must_use]
    pub const fn pairs_with(self, other: Rank) -> bool {
        let (a, b) = (self.weight(), other.weight());
        a + b == MATCH_TARGET || (a == MATCH_TARGET && b == MATCH_TARGET)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_table() {
        assert_eq!(Rank::Two.weight(), 2);
        assert_eq!(Rank::Ten.weight(), 10);
        assert_eq!(Rank::Valet.weight(), 11);
        assert_eq!(Rank::Dame.weight(), 12);
        assert_eq!(Rank::King.weight(), 13);
        assert_eq!(Rank::Tuz.weight(), 1);
    }

    #[test]
    fn test_pairs_summing_to_target() {
        assert!(Rank::Two.pairs_with(Rank::Valet));
        assert!(Rank::Three.pairs_with(Rank::Ten));
        assert!(Rank::Four.pairs_with(Rank::Nine));
        assert!(Rank::Five.pairs_with(Rank::Eight));
        assert!(Rank::Six.pairs_with(Rank::Seven));
        assert!(Rank::Dame.pairs_with(Rank::Tuz));

        // Symmetric
        assert!(Rank::Valet.pairs_with(Rank::Two));
    }

    #[test]
    fn test_king_pairs_with_king() {
        assert!(Rank::King.pairs_with(Rank::King));
    }

    #[test]
    fn test_non_pairs() {
        assert!(!Rank::Two.pairs_with(Rank::Three));
        assert!(!Rank::King.pairs_with(Rank::Tuz));
        assert!(!Rank::King.pairs_with(Rank::Dame));
        assert!(!Rank::Tuz.pairs_with(Rank::Tuz));
        assert!(!Rank::Seven.pairs_with(Rank::Seven));
    }

    #[test]
    fn test_every_rank_has_exactly_one_partner() {
        for rank in Rank::ALL {
            let partners = Rank::ALL.iter().filter(|r| rank.pairs_with(**r)).count();
            assert_eq!(partners, 1, "rank {rank} should have exactly one partner");
        }
    }

    #[test]
    fn test_labels_round_trip_display() {
        assert_eq!(Rank::Ten.to_string(), "10");
        assert_eq!(Rank::Valet.to_string(), "V");
        assert_eq!(Rank::Tuz.to_string(), "T");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Rank::King).unwrap();
        let back: Rank = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rank::King);
    }
}
