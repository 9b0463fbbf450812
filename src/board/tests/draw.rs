//! Fifty-move rule, threefold repetition, checkmate and stalemate.

use super::{mv, sq};
use crate::board::{
    GameOverReason, MoveError, PieceKind, Position, PositionBuilder, Side, FIFTY_MOVE_LIMIT,
};
use crate::game::Game;

const KNIGHT_SHUFFLE: [&str; 4] = ["g1-f3", "g8-f6", "f3-g1", "f6-g8"];

#[test]
fn test_fifty_move_rule_on_exactly_fiftieth_ply() {
    let mut position = Position::new();
    for ply in 1..=FIFTY_MOVE_LIMIT {
        let text = KNIGHT_SHUFFLE[(ply as usize - 1) % KNIGHT_SHUFFLE.len()];
        position = position.apply(mv(text)).unwrap();
        assert_eq!(position.moves_since_capture_or_pawn_move(), ply);
        if ply < FIFTY_MOVE_LIMIT {
            assert_eq!(position.game_over(), None, "over early at ply {ply}");
        }
    }
    assert_eq!(position.game_over(), Some(GameOverReason::FiftyMove));

    let next = KNIGHT_SHUFFLE[FIFTY_MOVE_LIMIT as usize % KNIGHT_SHUFFLE.len()];
    assert_eq!(
        position.apply(mv(next)),
        Err(MoveError::GameOver(GameOverReason::FiftyMove))
    );
}

#[test]
fn test_pawn_move_on_fiftieth_ply_resets() {
    let position = PositionBuilder::starting_position()
        .moves_since_capture_or_pawn_move(49)
        .build();
    let after = position.apply(mv("a2-a3")).unwrap();
    assert_eq!(after.game_over(), None);
    assert_eq!(after.moves_since_capture_or_pawn_move(), 0);
}

#[test]
fn test_checkmate_outranks_fifty_moves() {
    let position = PositionBuilder::new()
        .piece(sq("g1"), Side::White, PieceKind::King)
        .piece(sq("a1"), Side::White, PieceKind::Rook)
        .piece(sq("g8"), Side::Black, PieceKind::King)
        .piece(sq("f7"), Side::Black, PieceKind::Pawn)
        .piece(sq("g7"), Side::Black, PieceKind::Pawn)
        .piece(sq("h7"), Side::Black, PieceKind::Pawn)
        .moves_since_capture_or_pawn_move(FIFTY_MOVE_LIMIT - 1)
        .build();

    assert_eq!(
        position.apply(mv("a1-a8")).unwrap().game_over(),
        Some(GameOverReason::FiftyMove)
    );

    let mut game = Game::from_position(position);
    game.play(mv("a1-a8"), &mut PieceKind::Queen).unwrap();
    assert_eq!(game.outcome(), Some(GameOverReason::Checkmate));
}

#[test]
fn test_threefold_repetition_through_game() {
    let mut game = Game::new();
    for (ply, text) in KNIGHT_SHUFFLE.iter().cycle().take(8).enumerate() {
        assert_eq!(game.outcome(), None, "over early before ply {}", ply + 1);
        game.play(mv(text), &mut PieceKind::Queen).unwrap();
    }
    assert_eq!(game.outcome(), Some(GameOverReason::ThreefoldRepetition));
}

#[test]
fn test_threefold_by_different_routes() {
    let mut game = Game::new();
    for text in ["g1-f3", "g8-f6", "f3-g1", "f6-g8", "b1-c3", "b8-c6", "c3-b1", "c6-b8"] {
        game.play(mv(text), &mut PieceKind::Queen).unwrap();
    }
    assert_eq!(game.outcome(), Some(GameOverReason::ThreefoldRepetition));
}

#[test]
fn test_fools_mate() {
    let mut game = Game::new();
    for text in ["f2-f3", "e7-e5", "g2-g4", "d8-h4"] {
        game.play(mv(text), &mut PieceKind::Queen).unwrap();
    }
    assert_eq!(game.outcome(), Some(GameOverReason::Checkmate));
    assert!(game.position().is_checkmate());
    assert!(game.position().is_in_check(Side::White));
}

#[test]
fn test_stalemate_is_not_checkmate() {
    let position = PositionBuilder::new()
        .piece(sq("g6"), Side::White, PieceKind::King)
        .piece(sq("d7"), Side::White, PieceKind::Queen)
        .piece(sq("h8"), Side::Black, PieceKind::King)
        .build();

    let mut game = Game::from_position(position);
    game.play(mv("d7-f7"), &mut PieceKind::Queen).unwrap();
    assert_eq!(game.outcome(), Some(GameOverReason::Stalemate));
    assert!(!game.position().is_in_check(Side::Black));
    assert_eq!(
        GameOverReason::Stalemate.winner(game.position().side_to_move()),
        None
    );
}
