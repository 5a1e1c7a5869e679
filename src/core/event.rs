//! Semantic events emitted by the reducer.
//!
//! Events describe what happened during one `reduce` call, in the order it
//! happened. They exist for the caller: animations, sounds, and logs are all
//! driven from the event stream rather than by diffing states.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::Move;
use super::piece::PieceId;
use super::player::PlayerId;

/// Something that happened while reducing one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// A throw was accepted and a turn began resolving.
    TurnStarted { player: PlayerId, throw_value: u8 },

    /// A piece moved (or bore off, when `to` is the offboard sentinel).
    PieceMoved(Move),

    /// The attacker landed on a defender and the two exchanged squares.
    SwapCaptured { attacker: PieceId, defender: PieceId },

    /// A piece landed on the water square and was sent back to rebirth.
    WaterPenalty { piece: PieceId, from: u8, to: u8 },

    /// The throw value (1, 4, or 5) lets the same player go again.
    ExtraTurnGranted { player: PlayerId },

    /// The player had no playable move and gave up the turn.
    TurnPassed { player: PlayerId },

    /// The player bore off their last piece.
    GameWon { player: PlayerId },
}

/// Events from one `reduce` call. A single turn emits at most five
/// (turn start, capture, move, water penalty, then win or extra turn), so
/// the log never spills to the heap.
pub type EventLog = SmallVec<[Event; 5]>;
