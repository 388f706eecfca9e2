//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level `parse`
//! entry point. The grammar rules themselves live in `expr`, one function
//! per rule, with precedence encoded by how deeply they call each other.

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::expr::parse_expr;

/// How many parentheses and sign prefixes may enclose one another.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Tallest expression tree the parser will build.
pub const MAX_TREE_HEIGHT: usize = 1024;

/// The main parser structure that maintains parsing state.
///
/// The parser owns its lexer and keeps exactly one token of lookahead.
/// Tokens are pulled from the lexer as they are consumed, never buffered.
pub struct Parser {
    /// Source of tokens, only ever asked for the next one
    lexer: Lexer,
    /// The lookahead token
    current: Token,
    /// Parentheses and sign prefixes currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser, reading the first lookahead token.
    ///
    /// # Errors
    ///
    /// Fails if the first token of the source is not recognised.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let current = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current,
            depth: 0,
        })
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it is of the expected kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) with the consumed token, otherwise an
    /// `UnexpectedToken` error naming both kinds.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let kind = self.current_token_kind();
        if kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    received: kind,
                },
                self.get_position(),
            ));
        }

        self.advance()
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// Fails with `NestingTooDeep` at the lookahead token once
    /// `MAX_NESTING_DEPTH` levels are already open.
    pub fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Parses one complete expression and requires the input to end there.
    pub fn parse(&mut self) -> Result<Expr, Error> {
        let expr = parse_expr(self)?;

        if self.current_token_kind() != TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::TrailingInput {
                    token: self.current_token_kind(),
                },
                self.get_position(),
            ));
        }

        Ok(expr)
    }

    /// Returns the start of the lookahead token in the source.
    pub fn get_position(&self) -> Position {
        self.current.span.start
    }
}

/// Parses a source string into an expression tree.
///
/// This is the main entry point for parsing. It creates a lexer and a
/// parser over `source` and parses a single expression, which must span
/// the whole input.
pub fn parse(source: &str) -> Result<Expr, Error> {
    let mut parser = Parser::new(Lexer::new(source))?;
    parser.parse()
}
