//! Card system: ranks, the weight table, cards, and deck generation.
//!
//! ## Key Types
//!
//! - `Rank`: The 13 ranks and their numeric weights (aces low, kings 13)
//! - `Coord`: A `row.col` board coordinate; `0.0` addresses the draw pile
//! - `Card`: One physical card (rank, coordinate, face-up and retired flags)
//! - `Face`: Pure display state consumed by the presentation layer
//!
//! Deck generation is the only place randomness enters:
//! [`standard_deck`] takes the RNG explicitly.

pub mod card;
pub mod deck;
pub mod rank;

pub use card::{Card, Coord, Face};
pub use deck::{ordered_deck, standard_deck, COPIES_PER_RANK, DECK_SIZE};
pub use rank::{Rank, MATCH_TARGET};
