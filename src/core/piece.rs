//! Piece identity and per-piece state.
//!
//! Each of the ten pieces has a `PieceId` that is unique and stable for the
//! whole game, even after the piece leaves the board. Identity and ownership
//! never change; only the square (or borne-off status) and the gate flag do.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Unique identifier for a piece.
///
/// Ids are opaque to the rules; by convention `new_game` numbers the human
/// pieces 0..=4 and the computer pieces 100..=104 so the two sides are easy
/// to tell apart in logs and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// The state of a single piece.
///
/// `position` is a board square in 1..=30 while the piece is in play and
/// `None` once it has been borne off; a borne-off piece never returns.
/// `has_visited_gate` records whether the piece has ever landed on the gate
/// square (26), which it must do before it may move beyond it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceState {
    /// Stable identity.
    pub id: PieceId,

    /// Owning player. Never changes, even when the piece is swapped.
    pub owner: PlayerId,

    /// Current square, or `None` when borne off.
    pub position: Option<u8>,

    /// Has this piece landed on the gate square yet?
    pub has_visited_gate: bool,
}

impl PieceState {
    /// Create a piece standing on `square` that has not visited the gate.
    #[must_use]
    pub const fn new(id: PieceId, owner: PlayerId, square: u8) -> Self {
        Self {
            id,
            owner,
            position: Some(square),
            has_visited_gate: false,
        }
    }

    /// Has this piece been borne off the board?
    #[must_use]
    pub const fn is_borne_off(&self) -> bool {
        self.position.is_none()
    }
}
