//! Error types for board operations.

use thiserror::Error;

use super::{GameOverReason, PieceKind, Side, Square};

/// Why a move was rejected. The position it was tried on is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Nothing stands on the source square
    #[error("There's no piece at {square}")]
    NoPieceAtSource { square: Square },
    /// The piece on the source square belongs to the side not to move
    #[error("The piece at {square} belongs to {owner}, it's not their move")]
    WrongSideOwnsPiece { square: Square, owner: Side },
    /// The destination holds one of the mover's own pieces
    #[error("You're trying to capture your own piece at {square}")]
    DestinationOccupiedByOwnPiece { square: Square },
    /// The destination is not a legal destination for the piece
    #[error("This is an illegal move for the {kind} at {from}: it can't go to {to}")]
    IllegalForPiece {
        from: Square,
        to: Square,
        kind: PieceKind,
    },
    /// The game already reached a terminal state
    #[error("The game is over ({0}), no more moves are accepted")]
    GameOver(GameOverReason),
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// File out of bounds (must be 0-7)
    #[error("File {file} out of bounds (must be 0-7)")]
    FileOutOfBounds { file: usize },
    /// Rank out of bounds (must be 0-7)
    #[error("Rank {rank} out of bounds (must be 0-7)")]
    RankOutOfBounds { rank: usize },
    /// Invalid algebraic notation
    #[error("Invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}

/// Error type for move text parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    /// Not of the form `e2-e4`
    #[error("Move '{input}' is not of the form e2-e4")]
    InvalidFormat { input: String },
    /// Invalid square notation in move
    #[error("Invalid square '{notation}' in move")]
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    #[error("Invalid promotion piece '{char}'")]
    InvalidPromotion { char: char },
}

/// Error type for piece kind parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PieceKindParseError {
    #[error("Unknown piece kind '{input}'")]
    Unknown { input: String },
}
