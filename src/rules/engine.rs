//! The Senet rules engine: setup, move enumeration, and the reducer.
//!
//! All three entry points are pure functions of their inputs. `reduce` never
//! mutates the state it is given; it clones and returns a successor together
//! with the semantic events of the turn. Invalid inputs (out-of-range
//! throws, actions against a finished game) are silent no-ops rather than
//! errors; callers are expected to validate against [`legal_moves`], and
//! the engine never panics.

use rustc_hash::FxHashSet;

use crate::core::board::{
    is_safe_square, BOARD_SIZE, GATE_SQUARE, OFFBOARD_SQUARE, REBIRTH_SQUARE, WATER_SQUARE,
};
use crate::core::{
    Action, Event, EventLog, GameState, GameStatus, Move, MoveList, PieceId, PieceState, PlayerId,
};

/// Create the opening position.
///
/// The ten pieces sit on squares 1..=10, alternating by square parity: odd
/// squares are human, even squares are computer. Human pieces are numbered
/// 0..=4 and computer pieces 100..=104 in ascending square order. The human
/// moves first.
///
/// ```
/// use senet_rules::core::PlayerId;
/// use senet_rules::rules::new_game;
///
/// let state = new_game();
/// assert_eq!(state.current_player, PlayerId::Human);
/// assert_eq!(state.pieces.len(), 10);
/// assert_eq!(state.piece_at(1).unwrap().owner, PlayerId::Human);
/// assert_eq!(state.piece_at(2).unwrap().owner, PlayerId::Computer);
/// ```
#[must_use]
pub fn new_game() -> GameState {
    let mut pieces = Vec::with_capacity(10);
    let mut next_human = 0;
    let mut next_computer = 0;

    for square in 1..=10u8 {
        let owner = if square % 2 == 1 {
            PlayerId::Human
        } else {
            PlayerId::Computer
        };
        let id = match owner {
            PlayerId::Human => {
                let id = PieceId::new(next_human);
                next_human += 1;
                id
            }
            PlayerId::Computer => {
                let id = PieceId::new(100 + next_computer);
                next_computer += 1;
                id
            }
        };
        pieces.push(PieceState::new(id, owner, square));
    }

    GameState {
        current_player: PlayerId::Human,
        last_throw: None,
        pieces,
        status: GameStatus::InProgress,
    }
}

/// Enumerate the legal moves for `player` with a throw of `throw_value`.
///
/// Empty when the throw is outside 1..=5 or the game is over. Moves are
/// returned in piece iteration order (ascending id within the owner's
/// pieces as stored), which matters only for deterministic testing.
#[must_use]
pub fn legal_moves(state: &GameState, throw_value: u8, player: PlayerId) -> MoveList {
    let mut moves = MoveList::new();
    if !(1..=5).contains(&throw_value) || !state.status.is_in_progress() {
        return moves;
    }

    let opponent = player.opponent();
    let opponent_positions: FxHashSet<u8> = state
        .pieces_of(opponent)
        .filter_map(|p| p.position)
        .collect();

    for piece in state.pieces_of(player) {
        let Some(from) = piece.position else { continue };
        let target = from + throw_value;

        // Gate rule: must land on 26 before moving beyond it or offboard.
        if !piece.has_visited_gate && target > GATE_SQUARE {
            continue;
        }

        if target > BOARD_SIZE {
            if is_exact_bear_off(from, throw_value)
                && !crosses_blockade(&opponent_positions, from, BOARD_SIZE)
            {
                moves.push(Move::new(piece.id, from, OFFBOARD_SQUARE));
            }
            continue;
        }

        if crosses_blockade(&opponent_positions, from, target) {
            continue;
        }
        if state.is_occupied_by(player, target) {
            continue;
        }

        // Own occupancy is ruled out above, so any piece here is the
        // opponent's and the move would be a capture-by-swap.
        if let Some(defender) = state.piece_at(target) {
            if is_safe_square(target) || is_protected(state, defender) {
                continue;
            }
        }

        moves.push(Move::new(piece.id, from, target));
    }

    moves
}

/// Apply an action, producing the successor state and the turn's events.
///
/// The input state is untouched; callers keep old snapshots for undo by
/// holding on to prior return values.
#[must_use]
pub fn reduce(state: &GameState, action: Action) -> (GameState, EventLog) {
    match action {
        Action::NewGame => (new_game(), EventLog::new()),
        Action::ApplyThrow { value, piece } => apply_throw(state, value, piece),
        Action::ForfeitTurn { value } => forfeit_turn(state, value),
    }
}

fn apply_throw(state: &GameState, value: u8, piece_id: PieceId) -> (GameState, EventLog) {
    let mut events = EventLog::new();
    if !state.status.is_in_progress() || !(1..=5).contains(&value) {
        return (state.clone(), events);
    }

    let mut next = state.clone();
    next.last_throw = Some(value);
    events.push(Event::TurnStarted {
        player: state.current_player,
        throw_value: value,
    });

    // An id that is not among the legal moves freezes the turn: the throw is
    // recorded, nothing moves, and the turn does not pass. The UI contract
    // is to only submit ids drawn from `legal_moves`.
    let legal = legal_moves(state, value, state.current_player);
    let Some(mv) = legal.iter().find(|m| m.piece == piece_id).copied() else {
        return (next, events);
    };
    let Some(mover) = next.piece_index(piece_id) else {
        return (next, events);
    };

    // Capture-by-swap: the defender takes the mover's origin square.
    if let Some(defender) = next.piece_at(mv.to).map(|p| p.id) {
        if let Some(index) = next.piece_index(defender) {
            next.pieces[index].position = Some(mv.from);
        }
        events.push(Event::SwapCaptured {
            attacker: piece_id,
            defender,
        });
    }

    next.pieces[mover].position = if mv.is_bear_off() { None } else { Some(mv.to) };
    if mv.to == GATE_SQUARE {
        next.pieces[mover].has_visited_gate = true;
    }
    events.push(Event::PieceMoved(mv));

    if mv.to == WATER_SQUARE {
        let resolved = resolve_water_penalty(&mut next, mover);
        events.push(Event::WaterPenalty {
            piece: piece_id,
            from: WATER_SQUARE,
            to: resolved,
        });
    }

    if let Some(player) = winner(&next) {
        next.status = GameStatus::Won(player);
        events.push(Event::GameWon { player });
        return (next, events);
    }

    if grants_extra_turn(value) {
        events.push(Event::ExtraTurnGranted {
            player: next.current_player,
        });
    } else {
        next.current_player = next.current_player.opponent();
    }

    (next, events)
}

fn forfeit_turn(state: &GameState, value: u8) -> (GameState, EventLog) {
    let mut events = EventLog::new();
    if !state.status.is_in_progress() || !(1..=5).contains(&value) {
        return (state.clone(), events);
    }

    let mut next = state.clone();
    next.last_throw = Some(value);
    events.push(Event::TurnPassed {
        player: state.current_player,
    });

    if grants_extra_turn(value) {
        events.push(Event::ExtraTurnGranted {
            player: state.current_player,
        });
    } else {
        next.current_player = state.current_player.opponent();
    }

    (next, events)
}

/// Throws of 1, 4, and 5 let the same player go again.
fn grants_extra_turn(throw_value: u8) -> bool {
    matches!(throw_value, 1 | 4 | 5)
}

/// Bearing off requires an exact throw from the last three squares.
fn is_exact_bear_off(from: u8, throw_value: u8) -> bool {
    match from {
        28 => throw_value == 3,
        29 => throw_value == 2,
        30 => throw_value == 1,
        _ => false,
    }
}

/// Does any opponent blockade begin in `(from, to]`?
///
/// A blockade is three consecutive squares all held by the opponent. Only
/// the opponent's blockades obstruct; the triple may extend past `to`.
fn crosses_blockade(opponent_positions: &FxHashSet<u8>, from: u8, to: u8) -> bool {
    if to <= from {
        return false;
    }
    (from + 1..=to).any(|square| {
        opponent_positions.contains(&square)
            && opponent_positions.contains(&(square + 1))
            && opponent_positions.contains(&(square + 2))
    })
}

/// A piece with an own-color neighbor on either adjacent square is immune
/// to capture.
fn is_protected(state: &GameState, piece: &PieceState) -> bool {
    let Some(position) = piece.position else {
        return false;
    };
    [position - 1, position + 1].iter().any(|&neighbor| {
        state
            .piece_at(neighbor)
            .map(|adjacent| adjacent.owner == piece.owner)
            .unwrap_or(false)
    })
}

/// Relocate a piece that landed on the water square.
///
/// The rebirth square if free, otherwise the first free square scanning 14
/// down to 1. All of 1..=14 occupied cannot happen with ten pieces; the
/// fallback keeps the piece on the rebirth square rather than leave it
/// standing in the water.
fn resolve_water_penalty(state: &mut GameState, mover: usize) -> u8 {
    if !state.is_occupied(REBIRTH_SQUARE) {
        state.pieces[mover].position = Some(REBIRTH_SQUARE);
        return REBIRTH_SQUARE;
    }

    for candidate in (1..REBIRTH_SQUARE).rev() {
        if !state.is_occupied(candidate) {
            state.pieces[mover].position = Some(candidate);
            return candidate;
        }
    }

    state.pieces[mover].position = Some(REBIRTH_SQUARE);
    REBIRTH_SQUARE
}

/// The first player with no positioned pieces has borne everything off and
/// wins. Human is examined before computer; bearing off happens one piece
/// per move, so only one side can newly qualify per call.
fn winner(state: &GameState) -> Option<PlayerId> {
    PlayerId::all().find(|&player| state.remaining(player) == 0)
}
