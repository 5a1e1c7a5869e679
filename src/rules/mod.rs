//! The rules engine: setup, legal-move enumeration, and the reducer.
//!
//! The engine is a set of pure functions over [`crate::core`] values. It
//! holds no state of its own, performs no I/O, and consumes no randomness;
//! given the same inputs it always produces the same outputs.

pub mod engine;

pub use engine::{legal_moves, new_game, reduce};
