//! A game in progress: the current position, the repetition history and the
//! move counter, plus the loop that drives a game through its collaborators.

mod history;
mod interfaces;
mod outcome;

pub use history::{Fingerprint, PositionHistory, REPETITION_LIMIT};
pub use interfaces::{GameOverReporter, MoveSource, Presenter, PromotionChooser};
pub use outcome::describe;

use crate::board::{GameOverReason, Move, MoveError, Position};

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    history: PositionHistory,
    plies: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    /// A game starting at `position`, which counts as its first occurrence.
    ///
    /// A position that is already checkmate or stalemate starts out over.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        let position = match position.detect_end() {
            Some(reason) if !position.is_game_over() => position.with_game_over(reason),
            _ => position,
        };
        let mut history = PositionHistory::new();
        history.record(&position);
        Game {
            position,
            history,
            plies: 0,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    /// Number of the move about to be played, counting plies from 1.
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.plies + 1
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOverReason> {
        self.position.game_over()
    }

    /// Play `mv` and return the new position, which may be terminal.
    ///
    /// Checkmate and stalemate take precedence over the fifty-move rule,
    /// which takes precedence over threefold repetition. On error the game is
    /// unchanged.
    pub fn play<C>(&mut self, mv: Move, chooser: &mut C) -> Result<&Position, MoveError>
    where
        C: PromotionChooser + ?Sized,
    {
        let mut next = self.position.apply_move(mv, chooser)?;
        let occurrences = self.history.record(&next);

        if let Some(reason) = next.detect_end() {
            next = next.with_game_over(reason);
        } else if !next.is_game_over() && occurrences >= REPETITION_LIMIT {
            next = next.with_game_over(GameOverReason::ThreefoldRepetition);
        }

        if let Some(reason) = next.game_over() {
            log::info!("game over after ply {}: {reason}", self.move_number());
        }

        self.plies += 1;
        self.position = next;
        Ok(&self.position)
    }

    /// Drive the game until it ends or `input` runs out of moves.
    ///
    /// Refused moves are handed back to `input` and asked for again. Returns
    /// the reason the game ended, or `None` when the input stopped first.
    pub fn run<S, P>(&mut self, input: &mut S, output: &mut P) -> Option<GameOverReason>
    where
        S: MoveSource + PromotionChooser,
        P: Presenter + GameOverReporter,
    {
        output.present(&self.position);

        while self.outcome().is_none() {
            let Some(mv) = input.next_move(&self.position, self.move_number()) else {
                log::info!("no more moves after ply {}", self.plies);
                return None;
            };

            match self.play(mv, input) {
                Ok(position) => {
                    output.present(position);
                    let side = position.side_to_move();
                    if !position.is_game_over() && position.is_in_check(side) {
                        output.check(side);
                    }
                }
                Err(err) => {
                    log::debug!("rejected {mv}: {err}");
                    input.rejected(&err);
                }
            }
        }

        let reason = self.outcome()?;
        output.report(reason, self.position.side_to_move());
        Some(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, Side};

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    fn play_all(game: &mut Game, moves: &[&str]) {
        for text in moves {
            game.play(mv(text), &mut PieceKind::Queen).unwrap();
        }
    }

    #[test]
    fn test_new_game_records_start() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.move_number(), 1);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_fools_mate() {
        let mut game = Game::new();
        play_all(&mut game, &["f2-f3", "e7-e5", "g2-g4", "d8-h4"]);
        assert_eq!(game.outcome(), Some(GameOverReason::Checkmate));
        assert_eq!(
            GameOverReason::Checkmate.winner(game.position().side_to_move()),
            Some(Side::Black)
        );
        assert_eq!(
            game.play(mv("e2-e4"), &mut PieceKind::Queen),
            Err(MoveError::GameOver(GameOverReason::Checkmate))
        );
    }

    #[test]
    fn test_threefold_on_third_occurrence() {
        let shuffle = ["g1-f3", "g8-f6", "f3-g1", "f6-g8"];
        let mut game = Game::new();
        play_all(&mut game, &shuffle);
        assert_eq!(game.outcome(), None);
        play_all(&mut game, &shuffle[..3]);
        assert_eq!(game.outcome(), None);
        play_all(&mut game, &shuffle[3..]);
        assert_eq!(game.outcome(), Some(GameOverReason::ThreefoldRepetition));
        assert_eq!(game.move_number(), 9);
    }

    #[test]
    fn test_capture_resets_history() {
        let mut game = Game::new();
        play_all(&mut game, &["e2-e4", "d7-d5"]);
        assert_eq!(game.history().len(), 3);
        play_all(&mut game, &["e4-d5"]);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_rejected_move_leaves_game_alone() {
        let mut game = Game::new();
        let err = game.play(mv("e2-e5"), &mut PieceKind::Queen).unwrap_err();
        assert!(matches!(err, MoveError::IllegalForPiece { .. }));
        assert_eq!(game.move_number(), 1);
        assert_eq!(game.position(), &Position::new());
    }
}
