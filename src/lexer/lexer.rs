use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, SYMBOL_LOOKUP};

/// Receives the lexer and the byte length of the pattern's match at the
/// cursor. Returns `None` when the match produces no token (whitespace).
pub type RegexHandler = fn(&mut Lexer, usize) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored, so a match always starts at the cursor
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new(r"^[-+*/()]").unwrap(), handler: symbol_handler },
    ];
}

/// Pull-based tokenizer over a single source string.
///
/// The cursor only moves forward. Once it reaches the end of the source
/// every call to [`Lexer::next_token`] returns an `EOF` token.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// The character under the cursor, `None` at the end of the source.
    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32)
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        while !self.at_eof() {
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|found| (pattern.handler, found.end()))
            });

            match matched {
                Some((handler, length)) => {
                    if let Some(token) = handler(self, length)? {
                        return Ok(token);
                    }
                }
                None => {
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedToken {
                            token: self.at().unwrap_or_default(),
                        },
                        self.get_position(),
                    ))
                }
            }
        }

        Ok(MK_TOKEN!(TokenKind::EOF, self.pos, self.pos))
    }
}

fn skip_handler(lexer: &mut Lexer, length: usize) -> Result<Option<Token>, Error> {
    lexer.advance_n(length);
    Ok(None)
}

fn integer_handler(lexer: &mut Lexer, length: usize) -> Result<Option<Token>, Error> {
    let start = lexer.pos;
    let literal = &lexer.remainder()[..length];

    let value = literal.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: literal.to_string(),
            },
            lexer.get_position(),
        )
    })?;

    lexer.advance_n(length);
    Ok(Some(MK_TOKEN!(TokenKind::Integer(value), start, lexer.pos)))
}

fn symbol_handler(lexer: &mut Lexer, length: usize) -> Result<Option<Token>, Error> {
    let start = lexer.pos;
    let symbol = lexer.at().unwrap_or_default();

    let Some(kind) = SYMBOL_LOOKUP.get(&symbol) else {
        return Err(Error::new(
            ErrorImpl::UnrecognisedToken { token: symbol },
            lexer.get_position(),
        ));
    };

    lexer.advance_n(length);
    Ok(Some(MK_TOKEN!(*kind, start, lexer.pos)))
}

/// Drains a fresh lexer over `source`, `EOF` token included.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
