//! The triangular board.
//!
//! Seven rows, row *i* (0-indexed) holding *i + 1* cards, 28 cards total.
//! A cell is supported by the two cells directly beneath it in the next
//! row; a card becomes playable (face-up) once both supports are retired.
//! The bottom row has no supports and is face-up from the first update.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Coord};

/// Rows in the triangle.
pub const BOARD_ROWS: usize = 7;

/// Cards consumed by the deal: 1 + 2 + ... + 7.
pub const BOARD_CARDS: usize = BOARD_ROWS * (BOARD_ROWS + 1) / 2;

/// The triangular board.
///
/// Shape is fixed at generation; only the cards' flags change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: Vec<Vec<Card>>,
}

impl Board {
    /// Deal a board from the tail of `deck`, row-major, assigning each card
    /// its 1-indexed `row.col` coordinate.
    ///
    /// Consumes exactly [`BOARD_CARDS`] cards; the rest stay in `deck` for
    /// the draw pile. Panics if the deck runs out, which cannot happen with
    /// a full 52-card deck.
    #[must_use]
    pub fn generate(deck: &mut Vec<Card>) -> Self {
        let mut rows = Vec::with_capacity(BOARD_ROWS);

        for i in 0..BOARD_ROWS {
            let mut row = Vec::with_capacity(i + 1);
            for j in 0..=i {
                let mut card = deck
                    .pop()
                    .expect("deck exhausted while dealing the board");
                card.set_coord(Coord::new(i as u32 + 1, j as u32 + 1));
                row.push(card);
            }
            rows.push(row);
        }

        Self { rows }
    }

    /// Recompute face-up states.
    ///
    /// Bottom-row cells are always face-up; any other cell flips face-up
    /// once both of its supports are retired. Idempotent — this only ever
    /// sets the flag, it never reverts a reveal.
    pub fn update(&mut self) {
        for i in 0..self.rows.len() {
            for j in 0..self.rows[i].len() {
                let exposed = i + 1 == self.rows.len()
                    || (self.rows[i + 1][j].is_retired() && self.rows[i + 1][j + 1].is_retired());
                if exposed {
                    self.rows[i][j].set_face_up(true);
                }
            }
        }
    }

    /// Win check: the board is cleared once the apex card is retired.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.rows[0][0].is_retired()
    }

    /// The rows of the triangle, apex first.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Card>] {
        &self.rows
    }

    /// Look up a cell by its 1-indexed coordinate.
    ///
    /// Returns `None` for anything outside the triangle, including the
    /// draw-pile sentinel `0.0`.
    #[must_use]
    pub fn card(&self, coord: Coord) -> Option<&Card> {
        let row = self.rows.get(coord.row.checked_sub(1)? as usize)?;
        row.get(coord.col.checked_sub(1)? as usize)
    }

    /// Mutable cell lookup, same addressing as [`card`](Self::card).
    pub fn card_mut(&mut self, coord: Coord) -> Option<&mut Card> {
        let row = self.rows.get_mut(coord.row.checked_sub(1)? as usize)?;
        row.get_mut(coord.col.checked_sub(1)? as usize)
    }

    /// Iterate over every card on the board.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.rows.iter().flatten()
    }
}
