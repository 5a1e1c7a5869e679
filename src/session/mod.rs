//! Caller-side turn machinery: the single writer above the pure engine.
//!
//! The engine in [`crate::rules`] is stateless; something still has to own
//! the authoritative state, roll the sticks, remember history for undo, and
//! guard against a scheduled computer turn firing after the world changed
//! underneath it. That is this module:
//!
//! - [`GameSession`]: owns state, RNG, history, and the generation token.
//! - [`TurnHistory`] / [`Snapshot`]: immutable snapshot stack for undo.
//! - [`Generation`]: monotonic cancellation token for scheduled turns.

pub mod driver;
pub mod history;

pub use driver::{GameSession, Generation};
pub use history::{Snapshot, TurnHistory};
