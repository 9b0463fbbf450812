//! Piece kinds, sides and placed pieces.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PieceKindParseError;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds, pawn first
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may become on its promotion rank, queen first
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Parse a piece kind from its letter (p, n, b, r, q, k), either case
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Upper-case name as typed at the promotion prompt (`QUEEN`, `ROOK`, ...)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "PAWN",
            PieceKind::Knight => "KNIGHT",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Rook => "ROOK",
            PieceKind::Queen => "QUEEN",
            PieceKind::King => "KING",
        }
    }

    /// Returns true if a pawn may promote to this kind
    #[inline]
    #[must_use]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.write_str(name)
    }
}

impl FromStr for PieceKind {
    type Err = PieceKindParseError;

    /// Accepts a full name in any case (`queen`, `QUEEN`) or a single letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(kind) = PieceKind::from_char(c) {
                return Ok(kind);
            }
        }
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PieceKindParseError::Unknown {
                input: trimmed.to_string(),
            })
    }
}

/// The two sides of a game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides, White first
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    /// Returns the other side
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Back rank for this side (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn home_rank(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> usize {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on the board.
///
/// `has_moved` is part of the piece: it travels with it when the piece is
/// relocated and decides castling eligibility.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    side: Side,
    kind: PieceKind,
    has_moved: bool,
}

impl Piece {
    /// A piece that has not moved yet
    #[must_use]
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Piece {
            side,
            kind,
            has_moved: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn side(self) -> Side {
        self.side
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    /// The same piece, flagged as moved
    #[inline]
    #[must_use]
    pub const fn moved(self) -> Self {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// The same piece with a new kind (promotion); side and moved flag are kept
    #[inline]
    #[must_use]
    pub const fn promoted(self, kind: PieceKind) -> Self {
        Piece { kind, ..self }
    }

    /// Letter with case based on side (uppercase for White)
    #[must_use]
    pub fn to_fen_char(self) -> char {
        let c = self.kind.to_char();
        if self.side == Side::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Unicode chess glyph
    #[must_use]
    pub const fn glyph(self) -> char {
        match (self.side, self.kind) {
            (Side::White, PieceKind::King) => '\u{2654}',
            (Side::White, PieceKind::Queen) => '\u{2655}',
            (Side::White, PieceKind::Rook) => '\u{2656}',
            (Side::White, PieceKind::Bishop) => '\u{2657}',
            (Side::White, PieceKind::Knight) => '\u{2658}',
            (Side::White, PieceKind::Pawn) => '\u{2659}',
            (Side::Black, PieceKind::King) => '\u{265A}',
            (Side::Black, PieceKind::Queen) => '\u{265B}',
            (Side::Black, PieceKind::Rook) => '\u{265C}',
            (Side::Black, PieceKind::Bishop) => '\u{265D}',
            (Side::Black, PieceKind::Knight) => '\u{265E}',
            (Side::Black, PieceKind::Pawn) => '\u{265F}',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_by_name_and_letter() {
        assert_eq!("QUEEN".parse::<PieceKind>(), Ok(PieceKind::Queen));
        assert_eq!("knight".parse::<PieceKind>(), Ok(PieceKind::Knight));
        assert_eq!("R".parse::<PieceKind>(), Ok(PieceKind::Rook));
        assert!("castle".parse::<PieceKind>().is_err());
    }

    #[test]
    fn test_promotion_choices_exclude_king_and_pawn() {
        assert!(!PieceKind::King.is_promotion_choice());
        assert!(!PieceKind::Pawn.is_promotion_choice());
        assert!(PieceKind::PROMOTION_CHOICES
            .iter()
            .all(|kind| kind.is_promotion_choice()));
    }

    #[test]
    fn test_side_geometry() {
        assert_eq!(Side::White.opposite(), Side::Black);
        assert_eq!(Side::Black.forward(), -1);
        assert_eq!(Side::White.promotion_rank(), 7);
        assert_eq!(Side::Black.pawn_start_rank(), 6);
    }

    #[test]
    fn test_moved_flag_survives_promotion() {
        let pawn = Piece::new(Side::White, PieceKind::Pawn).moved();
        let queen = pawn.promoted(PieceKind::Queen);
        assert!(queen.has_moved());
        assert_eq!(queen.side(), Side::White);
        assert_eq!(queen.to_fen_char(), 'Q');
    }
}
