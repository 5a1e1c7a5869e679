//! # senet-rules
//!
//! A deterministic rules engine for the ancient Egyptian board game Senet.
//!
//! The core is a pure state-transition function suitable for an
//! authoritative game-state reducer: given a game state, a stick throw, and
//! a chosen move, it computes the next state and a log of semantic events
//! (captures, penalties, extra turns, win). Rendering, animation, and input
//! are external collaborators that call into the engine and interpret its
//! outputs.
//!
//! ## Design principles
//!
//! 1. **Pure core**: [`rules::new_game`], [`rules::legal_moves`], and
//!    [`rules::reduce`] are deterministic functions of their inputs: no
//!    I/O, no randomness, no shared state. Replays and tests are exact.
//!
//! 2. **Immutable snapshots**: `reduce` returns a new [`core::GameState`]
//!    instead of mutating in place. Undo is a stack of old return values.
//!
//! 3. **Total functions**: invalid input is a silent no-op or an empty
//!    result, never a panic. Callers validate choices against
//!    [`rules::legal_moves`].
//!
//! ## Modules
//!
//! - [`core`]: players, pieces, board constants, state, actions, events,
//!   and the deterministic stick RNG
//! - [`rules`]: the engine itself (setup, move enumeration, the reducer)
//! - [`session`]: the single-writer caller layer (undo history and
//!   generation-token cancellation for scheduled computer turns)
//!
//! ## A complete turn
//!
//! ```
//! use senet_rules::core::{Action, PlayerId};
//! use senet_rules::rules::{legal_moves, new_game, reduce};
//!
//! let state = new_game();
//! let moves = legal_moves(&state, 3, PlayerId::Human);
//! assert!(!moves.is_empty());
//!
//! let (next, events) = reduce(
//!     &state,
//!     Action::ApplyThrow { value: 3, piece: moves[0].piece },
//! );
//! assert!(!events.is_empty());
//! assert_eq!(next.current_player, PlayerId::Computer);
//! ```

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, Event, EventLog, GameState, GameStatus, Move, MoveList, PieceId, PieceState, PlayerId,
    StickRng, StickRngState,
};

pub use crate::core::board::{
    BOARD_SIZE, GATE_SQUARE, OFFBOARD_SQUARE, REBIRTH_SQUARE, SAFE_SQUARES, WATER_SQUARE,
};

pub use crate::rules::{legal_moves, new_game, reduce};

pub use crate::session::{GameSession, Generation, Snapshot, TurnHistory};
