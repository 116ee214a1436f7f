//! ASCII rendering of the game state.
//!
//! Cards are 5 rows of 8 columns. A hidden card is a `#` block, a retired
//! card a blank gap, a revealed card a framed rank label with its
//! coordinate worked into the bottom edge:
//!
//! ```text
//! ########
//! #D     #
//! #      #
//! #      #
//! ##3.2###
//! ```
//!
//! The draw pile sits left of the apex row: a `#` block annotated with the
//! queue count, then the exposed card. Everything here renders to plain
//! `String`s; the binary decides where they go.

use crate::cards::Face;
use crate::game::{DrawPile, GameSession, BOARD_ROWS};

/// Card art width in columns.
pub const CARD_WIDTH: usize = 8;

/// Card art height in rows.
pub const CARD_HEIGHT: usize = 5;

/// Columns between neighboring cards in a row.
const GAP: usize = 2;

/// Columns reserved on the left for the draw pile.
const PILE_MARGIN: usize = 20;

/// Columns the triangle is centered within.
const FIELD_WIDTH: usize = (CARD_WIDTH + GAP) * BOARD_ROWS;

/// The five art lines for one card face.
#[must_use]
pub fn card_art(face: Face) -> [String; CARD_HEIGHT] {
    match face {
        Face::Retired => std::array::from_fn(|_| " ".repeat(CARD_WIDTH)),
        Face::Hidden => std::array::from_fn(|_| "#".repeat(CARD_WIDTH)),
        Face::Revealed { rank, coord } => [
            "#".repeat(CARD_WIDTH),
            format!("#{:<6}#", rank.label()),
            "#      #".to_string(),
            "#      #".to_string(),
            format!("{:#^CARD_WIDTH$}", coord.to_string()),
        ],
    }
}

/// The five art lines for the draw pile: face-down stack beside the
/// exposed card, with the queue count on the stack's middle row.
#[must_use]
pub fn draw_pile_art(pile: &DrawPile) -> [String; CARD_HEIGHT] {
    let current = card_art(pile.current().face());
    std::array::from_fn(|i| {
        if i == CARD_HEIGHT / 2 {
            format!("{:#^CARD_WIDTH$} {}", pile.remaining(), current[i])
        } else {
            format!("{} {}", "#".repeat(CARD_WIDTH), current[i])
        }
    })
}

/// Render the whole table: draw pile on the left, triangle centered.
#[must_use]
pub fn render(session: &GameSession) -> String {
    let pile = draw_pile_art(session.draw_pile());
    let mut out = String::new();

    for (row_index, row) in session.board().rows().iter().enumerate() {
        let arts: Vec<_> = row.iter().map(|card| card_art(card.face())).collect();

        for line in 0..CARD_HEIGHT {
            let margin = if row_index == 0 { pile[line].as_str() } else { "" };
            let cards: Vec<&str> = arts.iter().map(|art| art[line].as_str()).collect();
            let joined = cards.join(&" ".repeat(GAP));
            out.push_str(&format!(
                "{margin:<PILE_MARGIN$}{joined:^FIELD_WIDTH$}\n"
            ));
        }
    }

    out
}
