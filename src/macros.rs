//! Utility macros for the calculator.
//!
//! - `MK_TOKEN!` - Creates a Token instance spanning a byte range
//!
//! This keeps the lexer handlers free of span boilerplate.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$start` - Byte offset of the first character
/// * `$end` - Byte offset one past the last character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer(42), 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            span: Span {
                start: Position($start as u32),
                end: Position($end as u32),
            },
        }
    };
}
