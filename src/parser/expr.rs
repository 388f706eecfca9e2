use crate::{
    ast::ast::{BinaryExpr, BinaryOperator, Expr, NumberExpr, UnaryExpr, UnaryOperator},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position, Span,
};

use super::parser::{Parser, MAX_TREE_HEIGHT};

/// `expr := term (('+' | '-') term)*`
///
/// Does not look past the expression; see [`Parser::parse`] for the
/// end-of-input check.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_term(parser)?;

    loop {
        let operator = match parser.current_token_kind() {
            TokenKind::Plus => BinaryOperator::Add,
            TokenKind::Minus => BinaryOperator::Subtract,
            _ => break,
        };

        left = parse_binary_expr(parser, left, operator, parse_term)?;
    }

    Ok(left)
}

/// `term := factor (('*' | '/') factor)*`
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_factor(parser)?;

    loop {
        let operator = match parser.current_token_kind() {
            TokenKind::Star => BinaryOperator::Multiply,
            TokenKind::Slash => BinaryOperator::Divide,
            _ => break,
        };

        left = parse_binary_expr(parser, left, operator, parse_factor)?;
    }

    Ok(left)
}

/// `factor := Integer | '(' expr ')' | ('+' | '-') factor`
pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer(value) => parse_primary_expr(parser, value),
        TokenKind::OpenParen => parser.nested(parse_grouping_expr),
        TokenKind::Plus => {
            parser.nested(|parser| parse_prefix_expr(parser, UnaryOperator::Plus))
        }
        TokenKind::Minus => {
            parser.nested(|parser| parse_prefix_expr(parser, UnaryOperator::Minus))
        }
        received => Err(Error::new(
            ErrorImpl::ExpectedFactor { received },
            parser.get_position(),
        )),
    }
}

/// Consumes the integer token under the cursor, whose value the caller
/// has already read off its kind.
fn parse_primary_expr(parser: &mut Parser, value: i64) -> Result<Expr, Error> {
    let token = parser.advance()?;

    Ok(Expr::Number(NumberExpr {
        value,
        span: token.span,
    }))
}

/// Folds one operator and its right operand onto `left`.
///
/// `parse_operand` is the next-tighter rule, which is what makes the
/// enclosing loop left-associative.
fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    operator: BinaryOperator,
    parse_operand: fn(&mut Parser) -> Result<Expr, Error>,
) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let right = parse_operand(parser)?;

    let height = tree_height(
        1 + left.height().max(right.height()),
        operator_token.span.start,
    )?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start,
            end: right.get_span().end,
        },
        left: Box::new(left),
        operator,
        operator_span: operator_token.span,
        right: Box::new(right),
        height,
    }))
}

fn parse_prefix_expr(parser: &mut Parser, operator: UnaryOperator) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let operand = parse_factor(parser)?;

    let height = tree_height(1 + operand.height(), operator_token.span.start)?;

    Ok(Expr::Unary(UnaryExpr {
        span: Span {
            start: operator_token.span.start,
            end: operand.get_span().end,
        },
        operator,
        operand: Box::new(operand),
        height,
    }))
}

fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// Rejects a node that would make the tree taller than `MAX_TREE_HEIGHT`.
fn tree_height(height: usize, operator: Position) -> Result<usize, Error> {
    if height > MAX_TREE_HEIGHT {
        return Err(Error::new(
            ErrorImpl::NestingTooDeep {
                limit: MAX_TREE_HEIGHT,
            },
            operator,
        ));
    }

    Ok(height)
}
