pub mod board;
pub mod console;
pub mod game;
pub mod random;

pub use board::{GameOverReason, Move, MoveError, Piece, PieceKind, Position, Side, Square};
pub use game::Game;
