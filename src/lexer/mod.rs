//! Lexical analysis module for the calculator.
//!
//! This module contains the lexer (tokenizer) that turns source text into
//! tokens, one at a time, as the parser asks for them. It handles:
//!
//! - Tokenization using anchored regex patterns
//! - Recognition of integer literals, operators and parentheses
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
