#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{GameOverReason, Piece, PieceKind, Side, Square};

/// A chess position: piece placement plus the per-game metadata the rules
/// need.
///
/// Positions are values. Every transition produces a new `Position` and
/// leaves the one it started from untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub(crate) squares: [[Option<Piece>; 8]; 8], // [rank][file]
    pub(crate) side_to_move: Side,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) moves_since_capture_or_pawn_move: u32,
    pub(crate) game_over: Option<GameOverReason>,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Position {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            for side in Side::BOTH {
                position.squares[side.home_rank()][file] = Some(Piece::new(side, kind));
                position.squares[side.pawn_start_rank()][file] =
                    Some(Piece::new(side, PieceKind::Pawn));
            }
        }
        position
    }

    pub(crate) fn empty() -> Self {
        Position {
            squares: [[None; 8]; 8],
            side_to_move: Side::White,
            en_passant_target: None,
            moves_since_capture_or_pawn_move: 0,
            game_over: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank()][sq.file()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns true if `sq` holds a piece of `side`
    #[inline]
    #[must_use]
    pub fn is_occupied_by(&self, sq: Square, side: Side) -> bool {
        self.piece_at(sq).is_some_and(|piece| piece.side() == side)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// The square a pawn skipped over on the previous ply, if any
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Plies since the last capture or pawn move
    #[inline]
    #[must_use]
    pub fn moves_since_capture_or_pawn_move(&self) -> u32 {
        self.moves_since_capture_or_pawn_move
    }

    #[inline]
    #[must_use]
    pub fn game_over(&self) -> Option<GameOverReason> {
        self.game_over
    }

    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Every occupied square with its piece, a1 first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Every occupied square of one side with its piece
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.side() == side)
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub(crate) fn put(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.rank()][sq.file()] = piece;
    }

    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank()][sq.file()].take()
    }

    pub(crate) fn with_game_over(mut self, reason: GameOverReason) -> Self {
        self.game_over = Some(reason);
        self
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_layout() {
        let position = Position::new();
        assert_eq!(position.piece_count(), 32);
        assert_eq!(position.side_to_move(), Side::White);
        assert_eq!(
            position.piece_at(sq("e1")),
            Some(Piece::new(Side::White, PieceKind::King))
        );
        assert_eq!(
            position.piece_at(sq("d8")),
            Some(Piece::new(Side::Black, PieceKind::Queen))
        );
        assert_eq!(
            position.piece_at(sq("h7")),
            Some(Piece::new(Side::Black, PieceKind::Pawn))
        );
        assert!(position.is_empty(sq("e4")));
        assert!(position.en_passant_target().is_none());
        assert!(!position.is_game_over());
    }

    #[test]
    fn test_nothing_has_moved_at_start() {
        assert!(Position::new().pieces().all(|(_, piece)| !piece.has_moved()));
    }

    #[test]
    fn test_pieces_of_side() {
        let position = Position::new();
        assert_eq!(position.pieces_of(Side::White).count(), 16);
        assert!(position
            .pieces_of(Side::Black)
            .all(|(sq, _)| sq.rank() >= 6));
    }
}
