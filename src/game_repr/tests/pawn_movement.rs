use crate::game_repr::{Color, Type};
use super::{empty_board, has_move, place_piece, sq, targets_of};

// ==================== PAWN MOVEMENT TESTS ====================

#[test]
fn test_white_pawn_opening_moves() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e2", Color::White, Type::Pawn);

    assert_eq!(targets_of(&pos, "e2"), vec!["e3", "e4"]);
}

#[test]
fn test_black_pawn_opening_moves() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e7", Color::Black, Type::Pawn);

    assert_eq!(targets_of(&pos, "e7"), vec!["e5", "e6"]);
}

#[test]
fn test_pawn_single_forward_move_off_start_rank() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e3", Color::White, Type::Pawn);
    assert_eq!(targets_of(&pos, "e3"), vec!["e4"]);

    let mut pos = empty_board();
    place_piece(&mut pos, "e6", Color::Black, Type::Pawn);
    assert_eq!(targets_of(&pos, "e6"), vec!["e5"]);
}

#[test]
fn test_pawn_blocked_by_piece() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e2", Color::White, Type::Pawn);
    place_piece(&mut pos, "e3", Color::Black, Type::Pawn);

    let moves = pos.legal_moves(sq("e2"));
    assert_eq!(moves.len(), 0, "Blocked pawn should have no moves");
}

#[test]
fn test_double_push_blocked_on_far_square() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e2", Color::White, Type::Pawn);
    place_piece(&mut pos, "e4", Color::Black, Type::Knight);

    assert_eq!(targets_of(&pos, "e2"), vec!["e3"]);
}

#[test]
fn test_pawn_diagonal_capture() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", Color::White, Type::Pawn);
    place_piece(&mut pos, "c5", Color::Black, Type::Pawn);
    place_piece(&mut pos, "e5", Color::Black, Type::Pawn);

    assert_eq!(targets_of(&pos, "d4"), vec!["c5", "d5", "e5"]);
}

#[test]
fn test_pushes_listed_before_captures() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d2", Color::White, Type::Pawn);
    place_piece(&mut pos, "c3", Color::Black, Type::Rook);
    place_piece(&mut pos, "e3", Color::Black, Type::Rook);

    let moves: Vec<String> = pos
        .legal_moves(sq("d2"))
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(moves, vec!["d3", "d4", "c3", "e3"]);
}

#[test]
fn test_pawn_cannot_capture_own_pieces() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", Color::White, Type::Pawn);
    place_piece(&mut pos, "c5", Color::White, Type::Pawn);
    place_piece(&mut pos, "e5", Color::White, Type::Pawn);

    let moves = pos.legal_moves(sq("d4"));
    assert!(!has_move(&moves, "c5"));
    assert!(!has_move(&moves, "e5"));
    assert!(has_move(&moves, "d5"));
}

#[test]
fn test_pawn_never_moves_diagonally_onto_empty_square() {
    let mut pos = empty_board();
    place_piece(&mut pos, "b6", Color::Black, Type::Pawn);

    assert_eq!(targets_of(&pos, "b6"), vec!["b5"]);
}

#[test]
fn test_pawn_on_far_edge_has_no_moves() {
    // White pawn on row 0 has nowhere to go
    let mut pos = empty_board();
    place_piece(&mut pos, "a8", Color::White, Type::Pawn);

    assert!(pos.legal_moves(sq("a8")).is_empty());
}
