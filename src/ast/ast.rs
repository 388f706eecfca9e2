use std::fmt::Display;

use crate::Span;

/// Prefix sign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Plus => write!(f, "+"),
            UnaryOperator::Minus => write!(f, "-"),
        }
    }
}

/// Infix arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
        }
    }
}

/// Number Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: i64,
    pub span: Span,
}

/// Unary Expression
/// Represents a sign applied to an operand, e.g. `-5` or `+(1 + 2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOperator,
    pub operand: Box<Expr>,
    pub span: Span,
    /// Height of the subtree rooted here
    pub height: usize,
}

/// Binary Expression
/// Represents an arithmetic operation between two expressions in the AST.
///
/// `operator_span` covers the operator token alone so evaluation errors
/// can point at it.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub operator_span: Span,
    pub right: Box<Expr>,
    pub span: Span,
    /// Height of the subtree rooted here
    pub height: usize,
}

/// A node of the expression tree.
///
/// Children are owned by their parent; once the parser hands a tree out
/// it is never modified.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(number) => &number.span,
            Expr::Unary(unary) => &unary.span,
            Expr::Binary(binary) => &binary.span,
        }
    }

    /// Number of nodes on the longest path from here down to a literal.
    pub fn height(&self) -> usize {
        match self {
            Expr::Number(_) => 1,
            Expr::Unary(unary) => unary.height,
            Expr::Binary(binary) => binary.height,
        }
    }

    /// Total number of nodes in the tree rooted here.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Number(_) => 1,
            Expr::Unary(unary) => 1 + unary.operand.node_count(),
            Expr::Binary(binary) => 1 + binary.left.node_count() + binary.right.node_count(),
        }
    }
}

/// Prints the tree as a fully parenthesised prefix form, `(- (- 8 3) 2)`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(number) => write!(f, "{}", number.value),
            Expr::Unary(unary) => write!(f, "({} {})", unary.operator, unary.operand),
            Expr::Binary(binary) => write!(
                f,
                "({} {} {})",
                binary.operator, binary.left, binary.right
            ),
        }
    }
}
