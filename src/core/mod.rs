//! Core building blocks shared by the whole crate.
//!
//! Currently this is only the deterministic RNG. Shuffling is a randomness
//! boundary: everything downstream of deck generation is pure.

pub mod rng;

pub use rng::GameRng;
