//! Position fingerprints and the repetition history kept by a game.

use std::collections::HashMap;
use std::fmt;

use crate::board::{Piece, Position, Side, Square};

/// Occurrences of one placement that end the game.
pub const REPETITION_LIMIT: u32 = 3;

/// Placement plus side to move; everything threefold repetition compares.
///
/// Counters, the en passant target, moved flags and the game-over marker are
/// left out.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Fingerprint {
    cells: [u8; 64], // FEN letter per square, 0 when empty
    side_to_move: Side,
}

impl Fingerprint {
    #[must_use]
    pub fn of(position: &Position) -> Self {
        Fingerprint::from_pieces(position.pieces(), position.side_to_move())
    }

    /// Fingerprint of a placement given in any order.
    pub fn from_pieces(
        pieces: impl IntoIterator<Item = (Square, Piece)>,
        side_to_move: Side,
    ) -> Self {
        let mut cells = [0u8; 64];
        for (sq, piece) in pieces {
            // FEN letters are ASCII.
            cells[sq.index()] = piece.to_fen_char() as u8;
        }
        Fingerprint {
            cells,
            side_to_move,
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }
}

/// FEN-style placement followed by `w` or `b`.
impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.cells[rank * 8 + file] {
                    0 => empty += 1,
                    letter => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", char::from(letter))?;
                    }
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }
        let side = match self.side_to_move {
            Side::White => 'w',
            Side::Black => 'b',
        };
        write!(f, " {side}")
    }
}

impl Position {
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self)
    }
}

/// Fingerprints of the positions reached since the last change in material.
#[derive(Clone, Debug, Default)]
pub struct PositionHistory {
    entries: Vec<Fingerprint>,
    counts: HashMap<Fingerprint, u32>,
    piece_count: Option<usize>,
}

impl PositionHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `position` and return how often its fingerprint has now been
    /// seen. A change in piece count forgets everything recorded before.
    pub fn record(&mut self, position: &Position) -> u32 {
        let pieces = position.piece_count();
        if self.piece_count != Some(pieces) {
            if !self.entries.is_empty() {
                log::trace!("piece count changed, dropping {} fingerprints", self.entries.len());
            }
            self.clear();
            self.piece_count = Some(pieces);
        }

        let fingerprint = position.fingerprint();
        self.entries.push(fingerprint);
        let count = self.counts.entry(fingerprint).or_insert(0);
        *count += 1;
        *count
    }

    #[must_use]
    pub fn occurrences(&self, fingerprint: &Fingerprint) -> u32 {
        self.counts.get(fingerprint).copied().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.counts.clear();
        self.piece_count = None;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recorded fingerprints, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Fingerprint> + '_ {
        self.entries.iter()
    }
}
