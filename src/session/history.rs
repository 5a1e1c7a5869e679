//! Snapshot history for undo.
//!
//! Every accepted action produces a brand-new `GameState`, so undo is just a
//! stack of prior snapshots, append-only with no back-references. The stack is
//! a persistent `im::Vector`, which makes cloning a whole session O(1) no
//! matter how long the game has run.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{GameState, MoveList};

/// One restorable moment: the engine state plus the transient turn fields
/// the caller was holding alongside it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The authoritative engine state.
    pub state: GameState,

    /// The stick throw that was pending, if any.
    pub current_throw: Option<u8>,

    /// Legal moves for the pending throw.
    pub legal: MoveList,
}

/// Append-only stack of snapshots.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnHistory {
    snapshots: Vector<Snapshot>,
}

impl TurnHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot onto the stack.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push_back(snapshot);
    }

    /// Pop the most recent snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Is the stack empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Discard all snapshots.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
