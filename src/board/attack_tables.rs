//! Offset tables for leapers and ray directions for sliders.
//!
//! Knight and king targets are precomputed per square once, on first use.

use once_cell::sync::Lazy;

use super::Square;

/// (file, rank) deltas of a knight jump
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// (file, rank) deltas of a king step
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

fn leaper_targets(offsets: &[(i8, i8)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        offsets
            .iter()
            .filter_map(|&(df, dr)| from.offset(df, dr))
            .collect()
    })
}

/// Squares a knight on each square jumps to, indexed by `Square::index`
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_targets(&KNIGHT_OFFSETS));

/// Squares a king on each square steps to, indexed by `Square::index`
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_targets(&KING_OFFSETS));

/// Walk a ray from `from` (exclusive) until the board edge.
pub(crate) fn ray(from: Square, (df, dr): (i8, i8)) -> impl Iterator<Item = Square> {
    std::iter::successors(from.offset(df, dr), move |sq| sq.offset(df, dr))
}
