use super::super::{Candidate, MoveKind, PieceKind, Position, Side, Square};
use super::GenMode;

impl Position {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        side: Side,
        mode: GenMode,
        out: &mut Vec<Candidate>,
    ) {
        let forward = side.forward();

        if mode == GenMode::Attack {
            for df in [-1, 1] {
                if let Some(to) = from.offset(df, forward) {
                    let kind = if self.is_empty(to) {
                        MoveKind::Quiet
                    } else {
                        MoveKind::Capture
                    };
                    out.push(Candidate::new(to, kind));
                }
            }
            return;
        }

        if let Some(one) = from.offset(0, forward) {
            if self.is_empty(one) {
                out.push(Candidate::new(one, MoveKind::Quiet));

                if from.rank() == side.pawn_start_rank() {
                    if let Some(two) = one.offset(0, forward) {
                        if self.is_empty(two) {
                            out.push(Candidate::new(two, MoveKind::DoublePush { skipped: one }));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(to) = from.offset(df, forward) else {
                continue;
            };
            match self.piece_at(to) {
                Some(target) if target.side() != side => {
                    out.push(Candidate::new(to, MoveKind::Capture));
                }
                Some(_) => {}
                None => {
                    if let Some(captured) = self.en_passant_victim(to, from, side) {
                        out.push(Candidate::new(to, MoveKind::EnPassant { captured }));
                    }
                }
            }
        }
    }

    /// Where the pawn taken en passant stands when a pawn of `side` on `from`
    /// moves diagonally onto the empty square `to`.
    ///
    /// Requires `to` to be the en passant target and an enemy pawn beside
    /// `from`, on `to`'s file.
    fn en_passant_victim(&self, to: Square, from: Square, side: Side) -> Option<Square> {
        if self.en_passant_target != Some(to) {
            return None;
        }
        let captured = Square::new(to.file(), from.rank())?;
        self.piece_at(captured)
            .filter(|piece| piece.side() != side && piece.kind() == PieceKind::Pawn)
            .map(|_| captured)
    }
}
