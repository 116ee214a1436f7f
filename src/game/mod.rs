//! Game state machine: draw pile, triangular board, and the session.
//!
//! ## Key Types
//!
//! - `DrawPile`: Ordered queue of undealt cards plus one exposed card
//! - `Board`: Seven rows of cards with reveal propagation and win check
//! - `GameSession`: Owns both, resolves coordinates across them, applies
//!   the matching rule
//! - `Command` / `TurnOutcome`: The command-intake boundary between the
//!   core and the presentation layer

pub mod board;
pub mod draw_pile;
pub mod session;

pub use board::{Board, BOARD_CARDS, BOARD_ROWS};
pub use draw_pile::DrawPile;
pub use session::{Command, GameSession, TurnOutcome};
