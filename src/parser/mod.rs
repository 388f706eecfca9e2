//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that pulls tokens from
//! the lexer and builds an expression tree. Operator precedence comes from
//! the grammar layering:
//!
//! - `expr` handles `+` and `-`
//! - `term` handles `*` and `/`, one layer down, so it binds tighter
//! - `factor` handles literals, parentheses and sign prefixes
//!
//! Both binary layers fold left to right. Parsing stops at the first error.

pub mod expr;
pub mod parser;
