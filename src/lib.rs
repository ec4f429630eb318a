#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod plot;
pub mod repl;

extern crate regex;

/// Character offset into the evaluated line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Renders a two line marker pointing at `position` in `line`.
///
/// ```text
/// 2 & 3
/// --^
/// ```
pub fn caret_at_position(line: &str, position: &Position) -> String {
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line);
    let column = position.0.saturating_sub(removed_whitespace);

    let arrows = column + 1;
    format!("{}\n{:->arrows$}", line_text_removed.trim_end(), "^")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c.is_whitespace() {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use super::{caret_at_position, Position};

    #[test]
    fn test_caret_at_position() {
        let caret = caret_at_position("2 & 3", &Position(2));
        assert_eq!(caret, "2 & 3\n--^");

        let caret = caret_at_position("   (2 + 3", &Position(3));
        assert_eq!(caret, "(2 + 3\n^");
    }

    #[test]
    fn test_caret_counts_characters_not_bytes() {
        let caret = caret_at_position("√(4) $", &Position(5));
        assert_eq!(caret, "√(4) $\n-----^");
    }

    #[test]
    fn test_caret_after_leading_tabs() {
        let caret = caret_at_position("\t\t2 & 3", &Position(4));
        assert_eq!(caret, "2 & 3\n--^");

        let caret = caret_at_position(" \t 2 $", &Position(5));
        assert_eq!(caret, "2 $\n--^");
    }
}
