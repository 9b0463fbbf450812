use super::super::attack_tables::ray;
use super::super::{Candidate, Position, Side, Square};
use super::GenMode;

impl Position {
    /// Walk each direction outward, stopping at the first occupied square.
    /// That square is included if it holds an enemy piece (or always, when
    /// attacking).
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        side: Side,
        directions: &[(i8, i8)],
        mode: GenMode,
        out: &mut Vec<Candidate>,
    ) {
        for &direction in directions {
            for to in ray(from, direction) {
                let blocked = !self.is_empty(to);
                if let Some(candidate) = self.step_candidate(to, side, mode) {
                    out.push(candidate);
                }
                if blocked {
                    break;
                }
            }
        }
    }
}
