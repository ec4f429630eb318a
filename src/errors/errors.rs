use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Coarse classification of an [`Error`].
///
/// `Lex` covers anything wrong with the characters of the line, including a
/// numeric literal that cannot be read as a number. Numeric domain failures
/// are reported with syntax severity: they abort the current evaluation and
/// nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Syntax,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. }
            | ErrorImpl::UnknownWord { .. }
            | ErrorImpl::NumberParseError { .. } => ErrorKind::Lex,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::ExpectedArguments { .. }
            | ErrorImpl::ExpectedFactor { .. }
            | ErrorImpl::TrailingInput { .. }
            | ErrorImpl::MathDomain { .. } => ErrorKind::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::UnknownWord { .. } => "UnknownWord",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedArguments { .. } => "ExpectedArguments",
            ErrorImpl::ExpectedFactor { .. } => "ExpectedFactor",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MathDomain { .. } => "MathDomain",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnknownWord { word, .. } => ErrorTip::Suggestion(format!(
                "`{}` is neither a function nor a constant, type `help` to list them",
                word
            )),
            ErrorImpl::UnexpectedToken { expected, .. } => match expected {
                TokenKind::RParen => ErrorTip::Suggestion(String::from(
                    "did you forget a closing parenthesis?",
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::ExpectedArguments { .. } => ErrorTip::Suggestion(String::from(
                "function arguments must be wrapped in parentheses",
            )),
            ErrorImpl::ExpectedFactor { .. } => ErrorTip::Suggestion(String::from(
                "expected a number, a constant, a function call or `(`",
            )),
            ErrorImpl::TrailingInput { .. } => ErrorTip::Suggestion(String::from(
                "did you forget an operator between two values?",
            )),
            ErrorImpl::NumberParseError { .. } => ErrorTip::None,
            ErrorImpl::MathDomain { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at position {})", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Invalid character: {character}")]
    InvalidCharacter { character: char },
    #[error("Invalid character: {character} (unknown word {word:?})")]
    UnknownWord { word: String, character: char },
    #[error("Invalid syntax: expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: String },
    #[error("Invalid syntax: {function} must be followed by `(`, found {found}")]
    ExpectedArguments { function: TokenKind, found: String },
    #[error("Invalid syntax: unexpected {found}")]
    ExpectedFactor { found: String },
    #[error("Invalid syntax: unexpected {found} after a complete expression")]
    TrailingInput { found: String },
    #[error("Invalid number: {token:?}")]
    NumberParseError { token: String },
    #[error("Math domain error: {function}: {reason}")]
    MathDomain {
        function: &'static str,
        reason: &'static str,
    },
}
