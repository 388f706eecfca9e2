//! Evaluation module for the calculator.
//!
//! Turns a parsed expression tree into its integer value by matching on
//! each node kind.

pub mod evaluator;
