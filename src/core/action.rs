//! Moves and reducer actions.
//!
//! A `Move` is the unit `legal_moves` enumerates and the UI submits back; an
//! `Action` is the full input to `reduce`. Both are small `Copy` values;
//! a throw can never produce more than one move per piece, so a turn's
//! candidate list tops out at five entries and lives in a `SmallVec`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::OFFBOARD_SQUARE;
use super::piece::PieceId;

/// A candidate or applied move for one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The piece being moved.
    pub piece: PieceId,

    /// Square the piece starts from, 1..=30.
    pub from: u8,

    /// Destination square, or [`OFFBOARD_SQUARE`] for a bear-off.
    pub to: u8,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(piece: PieceId, from: u8, to: u8) -> Self {
        Self { piece, from, to }
    }

    /// Does this move bear the piece off the board?
    #[must_use]
    pub const fn is_bear_off(&self) -> bool {
        self.to == OFFBOARD_SQUARE
    }
}

/// Legal moves for one throw. At most five pieces can move, so this never
/// spills to the heap.
pub type MoveList = SmallVec<[Move; 5]>;

/// Input to [`crate::rules::reduce`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Discard the current state and start over.
    NewGame,

    /// Apply a stick throw of `value` by moving `piece`.
    ApplyThrow { value: u8, piece: PieceId },

    /// Give up the turn for a throw with no playable move.
    ForfeitTurn { value: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bear_off_sentinel() {
        let on_board = Move::new(PieceId::new(0), 10, 13);
        let off_board = Move::new(PieceId::new(0), 30, OFFBOARD_SQUARE);

        assert!(!on_board.is_bear_off());
        assert!(off_board.is_bear_off());
    }

    #[test]
    fn test_move_list_stays_inline() {
        let mut moves = MoveList::new();
        for i in 0..5 {
            moves.push(Move::new(PieceId::new(i), 1 + i as u8, 3 + i as u8));
        }

        assert_eq!(moves.len(), 5);
        assert!(!moves.spilled());
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::ApplyThrow {
            value: 3,
            piece: PieceId::new(102),
        };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
