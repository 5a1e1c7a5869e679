//! Core types: players, pieces, board constants, state, actions, events, RNG.
//!
//! Everything in this module is plain data. The logic that interprets it
//! lives in [`crate::rules`]; the caller-side turn machinery lives in
//! [`crate::session`].

pub mod action;
pub mod board;
pub mod event;
pub mod piece;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, Move, MoveList};
pub use event::{Event, EventLog};
pub use piece::{PieceId, PieceState};
pub use player::PlayerId;
pub use rng::{StickRng, StickRngState};
pub use state::{GameState, GameStatus};
