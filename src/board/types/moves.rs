//! Move types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;
use crate::board::error::MoveParseError;

/// A requested move: source, destination and an optional promotion kind.
///
/// Built by the caller from raw input and consumed once by the executor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
}

impl Move {
    /// A move without a promotion choice
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// A pawn move that names the kind it promotes to
    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Get the promotion kind, if one was named
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.to_char().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parses `e2-e4`, `e2e4`, `e7-e8=q`, `e7e8q` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();
        let invalid = || MoveParseError::InvalidFormat {
            input: s.trim().to_string(),
        };
        if !input.is_ascii() || input.len() < 4 {
            return Err(invalid());
        }

        let (from_str, rest) = input.split_at(2);
        let rest = rest.strip_prefix('-').unwrap_or(rest);
        if rest.len() < 2 {
            return Err(invalid());
        }
        let (to_str, tail) = rest.split_at(2);

        let from = from_str
            .parse::<Square>()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: from_str.to_string(),
            })?;
        let to = to_str
            .parse::<Square>()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: to_str.to_string(),
            })?;

        let tail = match tail.strip_prefix('=') {
            Some("") => return Err(invalid()),
            Some(rest) => rest,
            None => tail,
        };
        let mut tail_chars = tail.chars();
        match (tail_chars.next(), tail_chars.next()) {
            (None, _) => Ok(Move::new(from, to)),
            (Some(c), None) => PieceKind::from_char(c)
                .filter(|kind| kind.is_promotion_choice())
                .map(|kind| Move::with_promotion(from, to, kind))
                .ok_or(MoveParseError::InvalidPromotion { char: c }),
            _ => Err(invalid()),
        }
    }
}

/// What a generated destination does besides moving the piece.
///
/// The generator reports these facts; only the executor acts on them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveKind {
    /// Plain relocation onto an empty square
    Quiet,
    /// Capture of the piece standing on the destination
    Capture,
    /// Pawn double step; `skipped` becomes the en passant target
    DoublePush { skipped: Square },
    /// En passant capture; `captured` is where the enemy pawn actually stands
    EnPassant { captured: Square },
    /// Castling; the rook travels from `rook_from` to `rook_to`
    Castle { rook_from: Square, rook_to: Square },
}

/// One generated destination together with its [`MoveKind`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Candidate {
    pub to: Square,
    pub kind: MoveKind,
}

impl Candidate {
    #[inline]
    #[must_use]
    pub(crate) const fn new(to: Square, kind: MoveKind) -> Self {
        Candidate { to, kind }
    }

    /// Returns true if this candidate removes an enemy piece
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(self.kind, MoveKind::Capture | MoveKind::EnPassant { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }
}
