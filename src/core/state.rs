//! Game state: the authoritative snapshot the reducer transforms.
//!
//! `GameState` is a plain value. The reducer never mutates its input; it
//! clones and returns a successor, so callers can keep any number of old
//! snapshots around (the undo stack does exactly that).

use serde::{Deserialize, Serialize};

use super::piece::{PieceId, PieceState};
use super::player::PlayerId;

/// Whether the game is still being played.
///
/// `Won` is terminal: once set it never changes, and the reducer treats all
/// further actions (other than `NewGame`) as no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
}

impl GameStatus {
    /// Is the game still running?
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    /// The winner, if the game is over.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(player),
        }
    }
}

/// Complete game state.
///
/// Exactly ten pieces exist at all times, five per player; pieces that have
/// been borne off stay in `pieces` with `position == None`. At most one
/// piece occupies any square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Player whose turn it is.
    pub current_player: PlayerId,

    /// Most recent stick throw applied through the reducer.
    pub last_throw: Option<u8>,

    /// All ten pieces, in the order `new_game` created them.
    pub pieces: Vec<PieceState>,

    /// In progress, or won.
    pub status: GameStatus,
}

impl GameState {
    /// The piece standing on `square`, if any.
    #[must_use]
    pub fn piece_at(&self, square: u8) -> Option<&PieceState> {
        self.pieces.iter().find(|p| p.position == Some(square))
    }

    /// Look up a piece by id.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&PieceState> {
        self.pieces.iter().find(|p| p.id == id)
    }

    /// Index of a piece in `pieces` by id.
    #[must_use]
    pub fn piece_index(&self, id: PieceId) -> Option<usize> {
        self.pieces.iter().position(|p| p.id == id)
    }

    /// Is any piece standing on `square`?
    #[must_use]
    pub fn is_occupied(&self, square: u8) -> bool {
        self.piece_at(square).is_some()
    }

    /// Is a piece of `player` standing on `square`?
    #[must_use]
    pub fn is_occupied_by(&self, player: PlayerId, square: u8) -> bool {
        self.piece_at(square).map(|p| p.owner) == Some(player)
    }

    /// Iterate over the pieces owned by `player`, in stored order.
    pub fn pieces_of(&self, player: PlayerId) -> impl Iterator<Item = &PieceState> {
        self.pieces.iter().filter(move |p| p.owner == player)
    }

    /// Number of pieces `player` still has on the board.
    #[must_use]
    pub fn remaining(&self, player: PlayerId) -> usize {
        self.pieces_of(player)
            .filter(|p| !p.is_borne_off())
            .count()
    }
}
