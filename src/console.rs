//! Keyboard and terminal collaborators for interactive play.

use std::io::{self, BufRead, Write};

use crate::board::{BoardStyle, GameOverReason, Move, MoveError, PieceKind, Position, Side};
use crate::game::{describe, GameOverReporter, MoveSource, Presenter, PromotionChooser};

/// Reads moves like `e2-e4` and promotion choices like `QUEEN` from a line
/// based reader, prompting on a writer.
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        ConsoleInput::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        ConsoleInput { reader, prompt }
    }

    /// Next input line, trimmed; `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                log::error!("failed to read input: {err}");
                None
            }
        }
    }

    fn say(&mut self, text: &str) {
        if let Err(err) = writeln!(self.prompt, "{text}").and_then(|()| self.prompt.flush()) {
            log::error!("failed to write prompt: {err}");
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleInput<R, W> {
    fn next_move(&mut self, position: &Position, move_number: u32) -> Option<Move> {
        self.say(&format!(
            "\nIt's time for the move #{move_number} by {}.",
            position.side_to_move()
        ));
        self.say(
            "Please input the current coordinates of the piece and the coordinates you wish \
             the piece to move to, separating them by a dash (i.e. e2-e4; move the king \
             appropriately for castling): ",
        );

        loop {
            let line = self.read_line()?.to_lowercase();
            match line.parse::<Move>() {
                Ok(mv) => return Some(mv),
                Err(err) => {
                    log::debug!("unparsable move {line:?}: {err}");
                    self.say("Bad input. Please try again:");
                }
            }
        }
    }

    fn rejected(&mut self, error: &MoveError) {
        self.say(&error.to_string());
    }
}

impl<R: BufRead, W: Write> PromotionChooser for ConsoleInput<R, W> {
    fn choose(&mut self, _side: Side) -> PieceKind {
        self.say("You can now promote your pawn. Please input the desired piece kind, i.e. QUEEN");

        loop {
            let Some(line) = self.read_line() else {
                log::warn!("input ended during promotion, taking a queen");
                return PieceKind::Queen;
            };
            match line.parse::<PieceKind>() {
                Ok(PieceKind::King) => {
                    self.say("You cannot promote your pawn to KING. Please try again.");
                }
                Ok(kind) if kind.is_promotion_choice() => return kind,
                _ => self.say("Bad input. Please try again:"),
            }
        }
    }
}

/// Prints boards and the final result to a writer.
pub struct BoardPrinter<W> {
    out: W,
    style: BoardStyle,
}

impl BoardPrinter<io::Stdout> {
    pub fn stdout(style: BoardStyle) -> Self {
        BoardPrinter::new(io::stdout(), style)
    }
}

impl<W: Write> BoardPrinter<W> {
    pub fn new(out: W, style: BoardStyle) -> Self {
        BoardPrinter { out, style }
    }

    fn say(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}") {
            log::error!("failed to write output: {err}");
        }
    }
}

impl<W: Write> Presenter for BoardPrinter<W> {
    fn present(&mut self, position: &Position) {
        let board = position.render(self.style);
        self.say(&board);
    }

    fn check(&mut self, _side: Side) {
        self.say("Check - king is endangered");
    }
}

impl<W: Write> GameOverReporter for BoardPrinter<W> {
    fn report(&mut self, reason: GameOverReason, side_to_move: Side) {
        self.say(&describe(reason, side_to_move));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> ConsoleInput<&[u8], Vec<u8>> {
        ConsoleInput::new(text.as_bytes(), Vec::new())
    }

    #[test]
    fn test_reprompts_on_bad_move() {
        let mut console = input("hello\nE2-E4\n");
        let mv = console.next_move(&Position::new(), 1);
        assert_eq!(mv, Some("e2-e4".parse().unwrap()));

        let prompts = String::from_utf8(console.prompt).unwrap();
        assert!(prompts.contains("It's time for the move #1 by White."));
        assert!(prompts.contains("Bad input. Please try again:"));
    }

    #[test]
    fn test_end_of_input_stops() {
        let mut console = input("");
        assert_eq!(console.next_move(&Position::new(), 1), None);
    }

    #[test]
    fn test_promotion_refuses_king() {
        let mut console = input("king\npawn\nknight\n");
        assert_eq!(console.choose(Side::White), PieceKind::Knight);

        let prompts = String::from_utf8(console.prompt).unwrap();
        assert!(prompts.contains("You cannot promote your pawn to KING."));
        assert!(prompts.contains("Bad input."));
    }

    #[test]
    fn test_printer_reports_winner() {
        let mut printer = BoardPrinter::new(Vec::new(), BoardStyle::Letters);
        printer.report(GameOverReason::Checkmate, Side::White);
        let text = String::from_utf8(printer.out).unwrap();
        assert_eq!(text.trim(), "The check cannot be escaped. Black won.");
    }
}
