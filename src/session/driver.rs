//! The authoritative game session.
//!
//! `GameSession` is the single writer the whole application funnels through:
//! it owns the engine state, the undo history, the stick RNG, and the
//! generation token. The engine stays pure; every impure concern of driving
//! a game (randomness, history, cancelling a scheduled computer turn) lives
//! here.
//!
//! ## Scheduling contract
//!
//! The session performs no scheduling itself. When a human action leaves the
//! computer to move, the caller schedules a delayed callback (think time),
//! capturing [`GameSession::generation`] at scheduling time. The callback
//! passes the captured token to [`GameSession::computer_turn`]; if any other
//! mutation happened in between (an undo, a reset), the token no longer
//! matches and the turn is silently dropped.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Action, EventLog, GameState, Move, MoveList, PieceId, PlayerId, StickRng};
use crate::rules::{legal_moves, new_game, reduce};

use super::history::{Snapshot, TurnHistory};

/// Monotonic token identifying one configuration of the session.
///
/// Every state-mutating operation produces a fresh generation. A scheduled
/// computer turn is valid only while the generation it captured is still
/// current; the comparison happens at execution time, not scheduling time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

/// Single-writer driver around the pure rules engine.
#[derive(Clone, Debug)]
pub struct GameSession {
    state: GameState,
    history: TurnHistory,
    current_throw: Option<u8>,
    legal: MoveList,
    generation: u64,
    rng: StickRng,
}

impl GameSession {
    /// Start a fresh session with a seeded stick RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: new_game(),
            history: TurnHistory::new(),
            current_throw: None,
            legal: MoveList::new(),
            generation: 0,
            rng: StickRng::new(seed),
        }
    }

    /// The authoritative engine state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The pending human throw, if one has been made and not yet played.
    #[must_use]
    pub fn current_throw(&self) -> Option<u8> {
        self.current_throw
    }

    /// Legal moves for the pending throw.
    #[must_use]
    pub fn legal(&self) -> &[Move] {
        &self.legal
    }

    /// Current generation token. Capture this when scheduling a computer
    /// turn and pass it back to [`Self::computer_turn`].
    #[must_use]
    pub fn generation(&self) -> Generation {
        Generation(self.generation)
    }

    /// Is there anything to undo?
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Discard everything and start a new game.
    pub fn reset(&mut self) {
        self.state = new_game();
        self.history.clear();
        self.clear_turn();
        self.bump();
    }

    /// Throw the sticks for the human player.
    ///
    /// Returns `None` when the throw is not allowed (not the human's turn,
    /// game over, or a throw already pending). Otherwise returns the value
    /// together with any events: if the throw leaves no playable move, the
    /// turn is forfeited on the spot and the forfeit's events are returned;
    /// the undo snapshot then points at the pre-throw moment, so undoing
    /// re-opens the throw.
    pub fn throw_sticks(&mut self) -> Option<(u8, EventLog)> {
        if !self.state.status.is_in_progress()
            || self.state.current_player != PlayerId::Human
            || self.current_throw.is_some()
        {
            return None;
        }

        let value = self.rng.throw();
        let moves = legal_moves(&self.state, value, PlayerId::Human);
        self.bump();

        if moves.is_empty() {
            debug!("throw {value} has no playable move, forfeiting");
            self.push_snapshot();
            let (next, events) = reduce(&self.state, Action::ForfeitTurn { value });
            self.state = next;
            self.clear_turn();
            return Some((value, events));
        }

        self.current_throw = Some(value);
        self.legal = moves;
        Some((value, EventLog::new()))
    }

    /// Play the pending throw by moving `piece`.
    ///
    /// Empty log when there is no pending throw or the piece has no legal
    /// move for it; the session is unchanged in that case. On success the
    /// undo snapshot captures the pending-throw moment, so undoing lets the
    /// human replay the same throw with a different piece.
    pub fn play(&mut self, piece: PieceId) -> EventLog {
        let Some(value) = self.current_throw else {
            return EventLog::new();
        };
        if !self.legal.iter().any(|m| m.piece == piece) {
            return EventLog::new();
        }

        self.push_snapshot();
        let (next, events) = reduce(&self.state, Action::ApplyThrow { value, piece });
        self.state = next;
        self.clear_turn();
        self.bump();

        if let Some(player) = self.state.status.winner() {
            debug!("game won by {player}");
        }
        events
    }

    /// Execute a scheduled computer turn.
    ///
    /// Drops the turn when `token` is stale or it is not the computer's turn
    /// to move. Otherwise throws the sticks and picks uniformly among the
    /// legal moves, forfeiting when there are none. Returns the throw value
    /// and the turn's events.
    pub fn computer_turn(&mut self, token: Generation) -> Option<(u8, EventLog)> {
        if token != self.generation() {
            debug!(
                "dropping stale computer turn ({:?} superseded by {:?})",
                token,
                self.generation()
            );
            return None;
        }
        if !self.state.status.is_in_progress()
            || self.state.current_player != PlayerId::Computer
        {
            return None;
        }

        let value = self.rng.throw();
        let moves = legal_moves(&self.state, value, PlayerId::Computer);
        let action = match self.rng.choose(&moves) {
            Some(mv) => Action::ApplyThrow {
                value,
                piece: mv.piece,
            },
            None => Action::ForfeitTurn { value },
        };

        self.push_snapshot();
        let (next, events) = reduce(&self.state, action);
        self.state = next;
        self.clear_turn();
        self.bump();
        Some((value, events))
    }

    /// Restore the most recent snapshot.
    ///
    /// Returns `false` when there is nothing to undo. Bumps the generation,
    /// so any computer turn scheduled before the undo is invalidated.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.state = snapshot.state;
        self.current_throw = snapshot.current_throw;
        self.legal = snapshot.legal;
        self.bump();
        true
    }

    fn bump(&mut self) {
        self.generation += 1;
    }

    fn clear_turn(&mut self) {
        self.current_throw = None;
        self.legal.clear();
    }

    fn push_snapshot(&mut self) {
        self.history.push(Snapshot {
            state: self.state.clone(),
            current_throw: self.current_throw,
            legal: self.legal.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameStatus;

    #[test]
    fn test_new_session_is_fresh() {
        let session = GameSession::new(42);

        assert_eq!(session.state(), &new_game());
        assert_eq!(session.current_throw(), None);
        assert!(session.legal().is_empty());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_throw_then_play_advances_state() {
        let mut session = GameSession::new(42);

        let (value, _) = session.throw_sticks().expect("human may throw");
        assert!((1..=5).contains(&value));

        // The opening position always has at least one legal move.
        assert!(!session.legal().is_empty());

        let piece = session.legal()[0].piece;
        let events = session.play(piece);
        assert!(!events.is_empty());
        assert_eq!(session.current_throw(), None);
        assert!(session.can_undo());
    }

    #[test]
    fn test_cannot_throw_twice() {
        let mut session = GameSession::new(42);

        session.throw_sticks().expect("first throw");
        if session.current_throw().is_some() {
            assert!(session.throw_sticks().is_none());
        }
    }

    #[test]
    fn test_play_without_throw_is_rejected() {
        let mut session = GameSession::new(42);

        let events = session.play(PieceId::new(0));
        assert!(events.is_empty());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_undo_restores_pending_throw() {
        let mut session = GameSession::new(42);

        session.throw_sticks().expect("throw");
        let value = session.current_throw();
        let legal: Vec<_> = session.legal().to_vec();
        let before = session.state().clone();

        let piece = legal[0].piece;
        session.play(piece);
        assert_ne!(session.state(), &before);

        assert!(session.undo());
        assert_eq!(session.state(), &before);
        assert_eq!(session.current_throw(), value);
        assert_eq!(session.legal(), legal.as_slice());
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut session = GameSession::new(42);
        assert!(!session.undo());
    }

    #[test]
    fn test_stale_token_drops_computer_turn() {
        let mut session = GameSession::new(42);
        let stale = session.generation();

        session.reset();
        assert!(session.computer_turn(stale).is_none());
    }

    #[test]
    fn test_computer_turn_requires_computer_to_move() {
        let mut session = GameSession::new(42);
        let token = session.generation();

        // Fresh game: it is the human's turn.
        assert!(session.computer_turn(token).is_none());
    }

    #[test]
    fn test_computer_turn_plays_when_scheduled() {
        let mut session = GameSession::new(42);

        // Drive human turns until the computer is to move.
        for _ in 0..50 {
            if session.state().current_player == PlayerId::Computer {
                break;
            }
            if session.throw_sticks().is_some() {
                if let Some(mv) = session.legal().first().copied() {
                    session.play(mv.piece);
                }
            }
        }
        assert_eq!(session.state().current_player, PlayerId::Computer);

        let token = session.generation();
        let (value, events) = session.computer_turn(token).expect("turn executes");
        assert!((1..=5).contains(&value));
        assert!(!events.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = GameSession::new(42);

        session.throw_sticks().expect("throw");
        if let Some(mv) = session.legal().first().copied() {
            session.play(mv.piece);
        }

        session.reset();
        assert_eq!(session.state(), &new_game());
        assert_eq!(session.current_throw(), None);
        assert!(!session.can_undo());
        assert_eq!(session.state().status, GameStatus::InProgress);
    }

    #[test]
    fn test_generation_bumps_on_mutation() {
        let mut session = GameSession::new(42);
        let g0 = session.generation();

        session.throw_sticks().expect("throw");
        let g1 = session.generation();
        assert_ne!(g0, g1);

        session.reset();
        assert_ne!(session.generation(), g1);
    }
}
