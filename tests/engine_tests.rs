//! Scenario tests for the rules engine.
//!
//! These drive the public API the way a UI would: enumerate legal moves,
//! submit one through the reducer, and inspect the successor state and the
//! event log.

use senet_rules::core::{Action, Event, GameStatus, Move, PieceId, PlayerId};
use senet_rules::rules::{legal_moves, new_game, reduce};
use senet_rules::{GameState, OFFBOARD_SQUARE};

fn apply(state: &GameState, value: u8, piece: u32) -> (GameState, Vec<Event>) {
    let (next, events) = reduce(
        state,
        Action::ApplyThrow {
            value,
            piece: PieceId::new(piece),
        },
    );
    (next, events.to_vec())
}

/// Fresh game, human throws 3 and moves the piece on square 1: the move is
/// a capture of the computer piece on 4, the computer piece on 2 is
/// untouched, and the turn passes (3 grants no extra turn).
#[test]
fn test_opening_throw_of_three() {
    let state = new_game();
    let moves = legal_moves(&state, 3, PlayerId::Human);
    assert!(moves.contains(&Move::new(PieceId::new(0), 1, 4)));

    let (next, events) = apply(&state, 3, 0);

    assert_eq!(next.piece(PieceId::new(0)).unwrap().position, Some(4));
    assert_eq!(next.piece(PieceId::new(101)).unwrap().position, Some(1));
    assert_eq!(next.piece(PieceId::new(100)).unwrap().position, Some(2));
    assert_eq!(next.current_player, PlayerId::Computer);
    assert_eq!(next.last_throw, Some(3));

    assert_eq!(
        events,
        vec![
            Event::TurnStarted {
                player: PlayerId::Human,
                throw_value: 3,
            },
            Event::SwapCaptured {
                attacker: PieceId::new(0),
                defender: PieceId::new(101),
            },
            Event::PieceMoved(Move::new(PieceId::new(0), 1, 4)),
        ]
    );
}

/// Moves come back in piece iteration order, ascending id within the owner.
#[test]
fn test_legal_move_ordering_is_deterministic() {
    let state = new_game();
    let moves = legal_moves(&state, 3, PlayerId::Human);

    let ids: Vec<u32> = moves.iter().map(|m| m.piece.raw()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);

    // Every human piece can move with a throw of 3 from the opening.
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
}

/// An extra-turn throw keeps the same player on the move and says so.
#[test]
fn test_extra_turn_event_sequence() {
    let state = new_game();
    // Throw 1: piece 4 moves 9 -> 10, capturing the computer piece there.
    let (next, events) = apply(&state, 1, 4);

    assert_eq!(next.current_player, PlayerId::Human);
    assert_eq!(
        events.last(),
        Some(&Event::ExtraTurnGranted {
            player: PlayerId::Human
        })
    );
}

/// The full win sequence: bear off the last piece, status flips, no events
/// after the win, and subsequent actions are no-ops.
#[test]
fn test_win_sequence_is_terminal() {
    let mut state = new_game();
    state.pieces.clear();
    let mut last = senet_rules::PieceState::new(PieceId::new(0), PlayerId::Human, 30);
    last.has_visited_gate = true;
    state
        .pieces
        .push(senet_rules::PieceState::new(
            PieceId::new(100),
            PlayerId::Computer,
            1,
        ));
    state.pieces.push(last);

    let (won, events) = apply(&state, 1, 0);

    assert_eq!(won.status, GameStatus::Won(PlayerId::Human));
    assert_eq!(
        events,
        vec![
            Event::TurnStarted {
                player: PlayerId::Human,
                throw_value: 1,
            },
            Event::PieceMoved(Move::new(PieceId::new(0), 30, OFFBOARD_SQUARE)),
            Event::GameWon {
                player: PlayerId::Human
            },
        ]
    );

    // The winner stays the nominal current player; nothing flips after a win.
    assert_eq!(won.current_player, PlayerId::Human);

    let (after, after_events) = apply(&won, 3, 100);
    assert_eq!(after, won);
    assert!(after_events.is_empty());
}

/// Landing on the water via the reducer produces the penalty event with the
/// resolved destination, and the piece ends up in the rebirth area.
#[test]
fn test_water_penalty_event_payload() {
    let mut state = new_game();
    // Walk the piece on square 9 up to the gate, then into the water.
    let index = state.piece_index(PieceId::new(4)).unwrap();
    state.pieces[index].position = Some(26);
    state.pieces[index].has_visited_gate = true;

    let (next, events) = apply(&state, 1, 4);

    assert_eq!(next.piece(PieceId::new(4)).unwrap().position, Some(15));
    assert!(events.contains(&Event::WaterPenalty {
        piece: PieceId::new(4),
        from: 27,
        to: 15,
    }));
    // Water precedes the extra-turn grant for the throw of 1.
    assert_eq!(
        events.last(),
        Some(&Event::ExtraTurnGranted {
            player: PlayerId::Human
        })
    );
}

/// Forfeit with a turn-passing value hands the move to the opponent and
/// reports it; forfeits never run win detection.
#[test]
fn test_forfeit_turn_sequence() {
    let state = new_game();

    let (next, events) = reduce(&state, Action::ForfeitTurn { value: 3 });
    assert_eq!(next.current_player, PlayerId::Computer);
    assert_eq!(
        events.to_vec(),
        vec![Event::TurnPassed {
            player: PlayerId::Human
        }]
    );
    assert_eq!(next.status, GameStatus::InProgress);
    assert_eq!(next.pieces, state.pieces);
}
