#![allow(clippy::module_inception)]

use crate::{
    errors::errors::{Error, ErrorTip},
    evaluator::evaluator::evaluate,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Lexes, parses and evaluates a single expression.
///
/// Returns the first error met along the way; nothing is evaluated if the
/// source does not parse.
pub fn evaluate_expression(source: &str) -> Result<i64, Error> {
    let ast = parse(source)?;
    evaluate(&ast)
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line itself and the offset of
/// `position` inside that line. A position at the very end of the source
/// (where `EOF` lives) resolves to one past the last character.
pub fn get_line_at_position(content: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(content.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // End of input, past the last newline or on an empty source
    let last = content.rsplit('\n').next().unwrap_or("");
    let line_number = content.matches('\n').count() + 1;
    (line_number, last.to_string(), last.len())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 30);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("1 +", 3);
        assert_eq!(line_number, 1);
        assert_eq!(line, "1 +");
        assert_eq!(line_pos, 3);

        let (line_number, line, line_pos) = super::get_line_at_position("", 0);
        assert_eq!(line_number, 1);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_display_error_points_at_column() {
        let source = "1 + @";
        let error = super::evaluate_expression(source).unwrap_err();
        let rendered = super::display_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnrecognisedToken");
        assert_eq!(lines[1], "  |");
        assert_eq!(lines[2], "1 | 1 + @");
        assert_eq!(lines[3], "  | ----^");
    }

    #[test]
    fn test_display_error_with_tip() {
        let source = "(1+2";
        let error = super::evaluate_expression(source).unwrap_err();
        let rendered = super::display_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: UnexpectedToken (Expected `CloseParen`, received `EOF`)"
        );
        assert_eq!(lines[2], "1 | (1+2");
        assert_eq!(lines[3], "  | ----^");
    }

    fn caret_lines(source: &str) -> (String, String) {
        let error = super::evaluate_expression(source).unwrap_err();
        let rendered = super::display_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        (lines[2].to_string(), lines[3].to_string())
    }

    #[test]
    fn test_display_error_after_multibyte_characters() {
        // U+00A0 is two bytes and the lexer skips it as whitespace
        let (text, caret) = caret_lines("\u{a0}1 @");
        assert_eq!(text, "1 | 1 @");
        assert_eq!(caret, "  | --^");

        let (text, caret) = caret_lines("1 +\u{2003}@");
        assert_eq!(text, "1 | 1 +\u{2003}@");
        assert_eq!(caret, "  | ----^");
    }

    #[test]
    fn test_display_error_strips_leading_tabs() {
        let (text, caret) = caret_lines("\t\t4 / 0");
        assert_eq!(text, "1 | 4 / 0");
        assert_eq!(caret, "  | --^");
    }
}

/// Renders an error with the offending line and a caret under its column.
///
/// ```text
/// Error: UnexpectedToken (Expected `CloseParen`, received `EOF`)
///   |
/// 1 | (1+2
///   | ----^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end()
    ));

    // Columns are counted in characters, the position is a byte offset
    let column = line_text
        .char_indices()
        .take_while(|(offset, _)| *offset < line_pos)
        .count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    rendered.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    rendered
}

/// Strips leading whitespace, returning the rest and how many characters
/// were removed.
fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start();
    let removed = string[..string.len() - trimmed.len()].chars().count();

    (String::from(trimmed), removed)
}
