//! Error types and error handling for the calculator.
//!
//! This module defines the single error type shared by every stage of the
//! pipeline. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, parsing and evaluation
//! - Classification into lexical, syntax and arithmetic errors
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
