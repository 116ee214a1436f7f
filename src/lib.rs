//! # pyramid-solitaire
//!
//! A single-player pyramid solitaire variant for the terminal.
//!
//! Seven rows of cards form a triangle; a draw pile exposes one card at a
//! time. Pairs whose weights sum to 13 are retired, kings (weight 13)
//! retire on their own, and the game is won once the apex card is gone.
//!
//! ## Design Principles
//!
//! 1. **Core vs. presentation**: `cards` and `game` hold all game logic and
//!    never touch a terminal. `ui` formats state and parses raw input; the
//!    binary owns the blocking read loop.
//!
//! 2. **Explicit randomness**: shuffling goes through a seedable
//!    [`GameRng`](core::GameRng), so any deal is reproducible from a seed.
//!
//! 3. **Commands in, outcomes out**: the session exposes a single
//!    [`GameSession::apply`](game::GameSession::apply) entry point taking a
//!    parsed [`Command`](game::Command) and returning a
//!    [`TurnOutcome`](game::TurnOutcome). Malformed input never reaches it.
//!
//! ## Modules
//!
//! - `core`: Deterministic RNG
//! - `cards`: Ranks, the weight table, cards, deck generation
//! - `game`: Draw pile, triangular board, session and matching rule
//! - `ui`: ASCII rendering, command parsing, rules/banner screens

pub mod cards;
pub mod core;
pub mod game;
pub mod ui;

// Re-export commonly used types
pub use crate::cards::{standard_deck, Card, Coord, Face, Rank, DECK_SIZE};
pub use crate::core::GameRng;
pub use crate::game::{Board, Command, DrawPile, GameSession, TurnOutcome, BOARD_ROWS};
