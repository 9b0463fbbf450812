//! Checkmate and stalemate detection, and the messages announcing an end.

use crate::board::{GameOverReason, Position, Side};

impl Position {
    /// The side to move has no legal move and its king is attacked.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.detect_end() == Some(GameOverReason::Checkmate)
    }

    /// The side to move has no legal move and its king is safe.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.detect_end() == Some(GameOverReason::Stalemate)
    }

    /// Checkmate or stalemate for the side to move, if either applies.
    ///
    /// Draws by counting (fifty moves, repetition) are not looked at here.
    #[must_use]
    pub fn detect_end(&self) -> Option<GameOverReason> {
        if self.has_legal_moves() {
            return None;
        }
        if self.is_in_check(self.side_to_move()) {
            Some(GameOverReason::Checkmate)
        } else {
            Some(GameOverReason::Stalemate)
        }
    }
}

/// The line printed when a game ends with `side_to_move` unable to go on.
#[must_use]
pub fn describe(reason: GameOverReason, side_to_move: Side) -> String {
    match reason {
        GameOverReason::Checkmate => format!(
            "The check cannot be escaped. {} won.",
            side_to_move.opposite()
        ),
        GameOverReason::Stalemate => {
            format!("There's no available moves for {side_to_move}. Draw.")
        }
        GameOverReason::FiftyMove => "The 50-move rule is broken. Draw.".to_string(),
        GameOverReason::ThreefoldRepetition => {
            "The threefold repetition rule is broken. Draw.".to_string()
        }
    }
}
