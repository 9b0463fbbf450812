use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Candidate, Position, Side, Square};
use super::GenMode;

impl Position {
    pub(crate) fn generate_knight_moves(
        &self,
        from: Square,
        side: Side,
        mode: GenMode,
        out: &mut Vec<Candidate>,
    ) {
        out.extend(
            KNIGHT_TARGETS[from.index()]
                .iter()
                .filter_map(|&to| self.step_candidate(to, side, mode)),
        );
    }
}
