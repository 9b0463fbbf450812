//! Text dump of a position, ranks 8 to 1 with files a to h.

use std::fmt;

use super::{Position, Square};

const SEPARATOR: &str = "  +---+---+---+---+---+---+---+---+";

/// How pieces are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoardStyle {
    /// FEN letters, upper case for White
    #[default]
    Letters,
    /// Unicode chess glyphs
    Symbols,
}

impl Position {
    /// Draw the board as a grid, White at the bottom.
    #[must_use]
    pub fn render(&self, style: BoardStyle) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_grid(&mut out, style);
        out
    }

    fn write_grid(&self, out: &mut impl fmt::Write, style: BoardStyle) -> fmt::Result {
        writeln!(out, "{SEPARATOR}")?;
        for rank in (0..8).rev() {
            write!(out, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = Square::new(file, rank)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or(' ', |piece| match style {
                        BoardStyle::Letters => piece.to_fen_char(),
                        BoardStyle::Symbols => piece.glyph(),
                    });
                write!(out, " {ch} |")?;
            }
            writeln!(out)?;
            writeln!(out, "{SEPARATOR}")?;
        }
        writeln!(out, "    a   b   c   d   e   f   g   h")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, BoardStyle::Letters)?;
        write!(f, "{} to move", self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_layout() {
        let text = Position::new().render(BoardStyle::Letters);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[1], "8 | r | n | b | q | k | b | n | r |");
        assert_eq!(lines[15], "1 | R | N | B | Q | K | B | N | R |");
        assert_eq!(lines[17], "    a   b   c   d   e   f   g   h");
    }

    #[test]
    fn test_symbols_use_glyphs() {
        let text = Position::new().render(BoardStyle::Symbols);
        assert!(text.contains('\u{2654}'));
        assert!(text.contains('\u{265F}'));
        assert!(!text.contains('K'));
    }

    #[test]
    fn test_display_names_side_to_move() {
        assert!(Position::new().to_string().ends_with("White to move"));
    }
}
