//! A move source that plays uniformly random legal moves, for self-play
//! demos and soak tests. It does not search.

use rand::prelude::*;

use crate::board::{Move, MoveError, PieceKind, Position, Side};
use crate::game::{MoveSource, PromotionChooser};

pub struct RandomMover {
    rng: StdRng,
    ply_limit: Option<u32>,
}

impl RandomMover {
    /// A mover whose choices are fixed by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        RandomMover {
            rng: StdRng::seed_from_u64(seed),
            ply_limit: None,
        }
    }

    /// Stop supplying moves once `plies` moves have been played.
    #[must_use]
    pub fn with_ply_limit(mut self, plies: u32) -> Self {
        self.ply_limit = Some(plies);
        self
    }
}

impl MoveSource for RandomMover {
    fn next_move(&mut self, position: &Position, move_number: u32) -> Option<Move> {
        if self.ply_limit.is_some_and(|limit| move_number > limit) {
            return None;
        }
        position.legal_moves().choose(&mut self.rng).copied()
    }

    fn rejected(&mut self, error: &MoveError) {
        log::warn!("random move refused: {error}");
    }
}

impl PromotionChooser for RandomMover {
    fn choose(&mut self, _side: Side) -> PieceKind {
        PieceKind::PROMOTION_CHOICES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PieceKind::Queen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn test_same_seed_same_moves() {
        let position = Position::new();
        let mut a = RandomMover::new(7);
        let mut b = RandomMover::new(7);
        for number in 1..=5 {
            assert_eq!(a.next_move(&position, number), b.next_move(&position, number));
        }
    }

    #[test]
    fn test_moves_are_legal() {
        let mut game = Game::new();
        let mut mover = RandomMover::new(0x5EED);
        for _ in 0..100 {
            let Some(mv) = mover.next_move(game.position(), game.move_number()) else {
                break;
            };
            assert!(game.play(mv, &mut mover).is_ok(), "illegal random move {mv}");
            if game.outcome().is_some() {
                break;
            }
        }
    }

    #[test]
    fn test_ply_limit() {
        let mut mover = RandomMover::new(1).with_ply_limit(2);
        let position = Position::new();
        assert!(mover.next_move(&position, 2).is_some());
        assert!(mover.next_move(&position, 3).is_none());
    }
}
