//! Tree-walking evaluator.
//!
//! Evaluates an expression tree to an `i64`. All arithmetic is checked:
//! division by zero and overflow are reported as errors instead of
//! wrapping or panicking. Division truncates toward zero.

use crate::{
    ast::ast::{BinaryExpr, BinaryOperator, Expr, UnaryExpr, UnaryOperator},
    errors::errors::{Error, ErrorImpl},
};

/// Walks expression trees bottom-up, children before their parent.
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Nodes visited since the evaluator was created
    nodes_visited: usize,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator { nodes_visited: 0 }
    }

    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    pub fn evaluate(&mut self, expression: &Expr) -> Result<i64, Error> {
        self.nodes_visited += 1;

        match expression {
            Expr::Number(number) => Ok(number.value),
            Expr::Unary(unary) => self.evaluate_unary(unary),
            Expr::Binary(binary) => self.evaluate_binary(binary),
        }
    }

    fn evaluate_unary(&mut self, unary: &UnaryExpr) -> Result<i64, Error> {
        let operand = self.evaluate(&unary.operand)?;

        match unary.operator {
            UnaryOperator::Plus => Ok(operand),
            UnaryOperator::Minus => operand.checked_neg().ok_or_else(|| {
                Error::new(
                    ErrorImpl::ArithmeticOverflow {
                        operator: unary.operator.to_string(),
                    },
                    unary.span.start,
                )
            }),
        }
    }

    fn evaluate_binary(&mut self, binary: &BinaryExpr) -> Result<i64, Error> {
        let left = self.evaluate(&binary.left)?;
        let right = self.evaluate(&binary.right)?;

        let position = binary.operator_span.start;

        let result = match binary.operator {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Subtract => left.checked_sub(right),
            BinaryOperator::Multiply => left.checked_mul(right),
            BinaryOperator::Divide => {
                if right == 0 {
                    return Err(Error::new(ErrorImpl::DivisionByZero, position));
                }
                // Only i64::MIN / -1 can fail here
                left.checked_div(right)
            }
        };

        result.ok_or_else(|| {
            Error::new(
                ErrorImpl::ArithmeticOverflow {
                    operator: binary.operator.to_string(),
                },
                position,
            )
        })
    }
}

/// Evaluates `expression` with a fresh evaluator.
pub fn evaluate(expression: &Expr) -> Result<i64, Error> {
    Evaluator::new().evaluate(expression)
}
