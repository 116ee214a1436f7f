//! Cards, coordinates, and display state.
//!
//! A `Card` is a pure data holder. Its only derived behavior is
//! [`Card::face`], which collapses the two flags into the three display
//! states the presentation layer knows how to draw. Retirement is one-way:
//! once a card is retired it never comes back and the `Retired` face wins
//! over everything else.

use serde::{Deserialize, Serialize};

use super::rank::Rank;

/// A 1-indexed `row.col` board coordinate.
///
/// `0.0` is the sentinel for the draw pile's exposed card; every board cell
/// is `r.c` with `1 <= r <= 7` and `1 <= c <= r`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

impl Coord {
    /// The draw-pile sentinel coordinate.
    pub const DRAW_PILE: Coord = Coord { row: 0, col: 0 };

    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Does this coordinate address the draw pile's current card?
    #[must_use]
    pub const fn is_draw_pile(self) -> bool {
        self.row == 0 && self.col == 0
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.row, self.col)
    }
}

/// Display state of a card, consumed by the presentation layer.
///
/// Pure query result: computing a `Face` never mutates game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    /// Face-down: drawn as an opaque block.
    Hidden,
    /// Retired from play: drawn as a blank gap.
    Retired,
    /// Face-up: drawn with its rank label and coordinate.
    Revealed { rank: Rank, coord: Coord },
}

/// One physical playing card.
///
/// Created once at deck-generation time, face-down at the draw-pile
/// coordinate. The board assigns real coordinates while dealing.
/// `face_up` is flipped by the draw pile and by board reveal propagation;
/// `retired` is set only by the matching rule and never reverts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    coord: Coord,
    face_up: bool,
    retired: bool,
}

impl Card {
    /// Create a face-down card at the draw-pile coordinate.
    #[must_use]
    pub fn new(rank: Rank) -> Self {
        Self {
            rank,
            coord: Coord::DRAW_PILE,
            face_up: false,
            retired: false,
        }
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Assign the board coordinate while dealing.
    pub fn set_coord(&mut self, coord: Coord) {
        self.coord = coord;
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    #[must_use]
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// Retire this card from play. One-way: there is no un-retire.
    pub fn retire(&mut self) {
        self.retired = true;
    }

    /// The display state for the presentation layer.
    ///
    /// Retired wins over face-up: a retired card is never displayed as face
    /// content, whatever its `face_up` flag says.
    #[must_use]
    pub fn face(&self) -> Face {
        if self.retired {
            Face::Retired
        } else if self.face_up {
            Face::Revealed {
                rank: self.rank,
                coord: self.coord,
            }
        } else {
            Face::Hidden
        }
    }
}
