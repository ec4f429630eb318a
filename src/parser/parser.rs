//! Parser state and the evaluation entry points.
//!
//! The parser holds the lexer and exactly one buffered token. Grammar rules
//! in [`super::expr`] pull tokens through [`Parser::eat`] and compute the
//! value as they go, so no syntax tree is ever built.

use std::sync::Arc;

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
        vocabulary::{Vocabulary, STANDARD_VOCABULARY},
    },
    Position,
};

use super::expr::parse_expr;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of further tokens
    lexer: Lexer,
    /// The next unconsumed token, `EndOfInput` once the line is exhausted
    current_token: Token,
}

impl Parser {
    /// Creates a parser and reads the first token of the line.
    ///
    /// # Returns
    ///
    /// An error if the very first token cannot be lexed.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let current_token = lexer.next_token()?;

        Ok(Parser {
            lexer,
            current_token,
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Pulls the next token from the lexer and returns the previous one.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current_token, next))
    }

    /// Consumes the current token if it is of the expected kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) with the consumed token, otherwise returns an Error.
    pub fn eat_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token.kind == expected_kind {
            return self.advance();
        }

        match error {
            Some(error) => Err(error),
            None => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.current_token.describe(),
                },
                self.get_position(),
            )),
        }
    }

    /// Consumes a token of the specified kind with the default syntax error.
    pub fn eat(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.eat_error(expected_kind, None)
    }

    /// Fails unless the whole line has been consumed.
    pub fn expect_end(&self) -> Result<(), Error> {
        if self.current_token.kind == TokenKind::EndOfInput {
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::TrailingInput {
                    found: self.current_token.describe(),
                },
                self.get_position(),
            ))
        }
    }

    /// Returns the position of the current token in the line.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start
    }
}

/// Evaluates one line with the standard keywords and constants.
///
/// The whole line must form a single expression: anything left over after a
/// complete expression is a syntax error.
pub fn evaluate(source: &str) -> Result<f64, Error> {
    evaluate_with(source, Arc::clone(&STANDARD_VOCABULARY))
}

/// Evaluates one line against a caller supplied vocabulary.
pub fn evaluate_with(source: &str, vocabulary: Arc<Vocabulary>) -> Result<f64, Error> {
    let result = Parser::new(Lexer::with_vocabulary(source, vocabulary)).and_then(|mut parser| {
        let value = parse_expr(&mut parser)?;
        parser.expect_end()?;
        Ok(value)
    });

    match &result {
        Ok(value) => debug!(source, value, "evaluated expression"),
        Err(error) => debug!(source, error = %error, "evaluation failed"),
    }

    result
}

/// Like [`evaluate`], but a blank line is a no-op rather than a syntax error.
pub fn evaluate_line(line: &str) -> Result<Option<f64>, Error> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    evaluate(line).map(Some)
}
