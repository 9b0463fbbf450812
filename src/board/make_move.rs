//! Move execution: validate a move against the position and produce the
//! position that follows it.

use super::{GameOverReason, Move, MoveError, MoveKind, PieceKind, Position, Side};

/// Plies without capture or pawn move after which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 50;

/// Supplies the piece a pawn turns into when it reaches its last rank.
///
/// Answers other than knight, bishop, rook or queen are rejected and the
/// question is asked again.
pub trait PromotionChooser {
    fn choose(&mut self, side: Side) -> PieceKind;
}

/// A fixed answer: the kind itself, or queen when the kind is not a valid
/// promotion.
impl PromotionChooser for PieceKind {
    fn choose(&mut self, _side: Side) -> PieceKind {
        if self.is_promotion_choice() {
            *self
        } else {
            PieceKind::Queen
        }
    }
}

impl Position {
    /// Validate `mv` and return the position after it.
    ///
    /// Checks run in order and the first failure is returned: game already
    /// over, empty source, piece of the wrong side, own piece on the
    /// destination, destination not legal for the piece. `self` is never
    /// changed.
    ///
    /// A pawn reaching its last rank becomes `mv.promotion()` when that is a
    /// valid choice, otherwise whatever `chooser` answers.
    pub fn apply_move<C>(&self, mv: Move, chooser: &mut C) -> Result<Position, MoveError>
    where
        C: PromotionChooser + ?Sized,
    {
        if let Some(reason) = self.game_over {
            return Err(MoveError::GameOver(reason));
        }

        let (from, to) = (mv.from(), mv.to());
        let side = self.side_to_move;

        let piece = self
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource { square: from })?;
        if piece.side() != side {
            return Err(MoveError::WrongSideOwnsPiece {
                square: from,
                owner: piece.side(),
            });
        }
        if self.is_occupied_by(to, side) {
            return Err(MoveError::DestinationOccupiedByOwnPiece { square: to });
        }

        let candidate = self
            .legal_candidates(from)
            .into_iter()
            .find(|candidate| candidate.to == to)
            .ok_or(MoveError::IllegalForPiece {
                from,
                to,
                kind: piece.kind(),
            })?;

        let mut next = self.clone();
        let captured = next.relocate(from, &candidate);

        if piece.kind() == PieceKind::Pawn && to.rank() == side.promotion_rank() {
            let kind = promotion_kind(mv, side, chooser);
            next.put(to, next.piece_at(to).map(|pawn| pawn.promoted(kind)));
        }

        next.en_passant_target = match candidate.kind {
            MoveKind::DoublePush { skipped } => Some(skipped),
            _ => None,
        };

        if captured.is_some() || piece.kind() == PieceKind::Pawn {
            next.moves_since_capture_or_pawn_move = 0;
        } else {
            next.moves_since_capture_or_pawn_move += 1;
        }
        if next.moves_since_capture_or_pawn_move >= FIFTY_MOVE_LIMIT {
            next.game_over = Some(GameOverReason::FiftyMove);
        }

        next.side_to_move = side.opposite();

        log::debug!(
            "{side} plays {mv} ({:?}), {} plies since capture or pawn move",
            candidate.kind,
            next.moves_since_capture_or_pawn_move
        );
        Ok(next)
    }

    /// [`Position::apply_move`] without a chooser: a promotion becomes the
    /// move's own kind, or a queen.
    pub fn apply(&self, mv: Move) -> Result<Position, MoveError> {
        self.apply_move(mv, &mut PieceKind::Queen)
    }
}

fn promotion_kind<C>(mv: Move, side: Side, chooser: &mut C) -> PieceKind
where
    C: PromotionChooser + ?Sized,
{
    if let Some(kind) = mv.promotion().filter(|kind| kind.is_promotion_choice()) {
        return kind;
    }
    loop {
        let kind = chooser.choose(side);
        if kind.is_promotion_choice() {
            return kind;
        }
        log::warn!("{side} cannot promote to {kind}, asking again");
    }
}
