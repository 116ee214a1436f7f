//! Presentation layer: thin I/O glue around the core.
//!
//! - `render`: Pure state-to-ASCII formatting, no terminal access
//! - `input`: Raw text to [`Command`](crate::game::Command) parsing
//! - `screens`: Rules text and win banner, loaded from files and streamed

pub mod input;
pub mod render;
pub mod screens;

pub use input::parse_command;
pub use render::render;
