use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,
    Integer,
    Float,

    Plus,
    Minus,
    Multiply,
    Divide,
    Pow,

    LParen,
    RParen,
    Comma,

    // Functions
    Sqrt,
    Log,
    Sin,
    Cos,
    Tan,
}

impl TokenKind {
    /// The text a token of this kind is written as, when it has a fixed one.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Multiply => Some("*"),
            TokenKind::Divide => Some("/"),
            TokenKind::Pow => Some("^"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::Comma => Some(","),
            TokenKind::EndOfInput
            | TokenKind::Integer
            | TokenKind::Float
            | TokenKind::Sqrt
            | TokenKind::Log
            | TokenKind::Sin
            | TokenKind::Cos
            | TokenKind::Tan => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EndOfInput => write!(f, "end of input"),
            TokenKind::Integer | TokenKind::Float => write!(f, "a number"),
            TokenKind::Sqrt => write!(f, "`sqrt`"),
            TokenKind::Log => write!(f, "`log`"),
            TokenKind::Sin => write!(f, "`sin`"),
            TokenKind::Cos => write!(f, "`cos`"),
            TokenKind::Tan => write!(f, "`tan`"),
            other => write!(f, "`{}`", other.symbol().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// Numeric payload, present for `Integer` and `Float` tokens.
    pub number: Option<f64>,
    pub span: Span,
}

impl Token {
    /// Short human readable form used in syntax error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfInput => self.kind.to_string(),
            _ => format!("`{}`", self.value),
        }
    }

    pub fn debug(&self) -> String {
        if let Some(number) = self.number {
            format!("{:?} ({}) = {}", self.kind, self.value, number)
        } else if self.kind == TokenKind::EndOfInput {
            format!("{:?} ()", self.kind)
        } else {
            format!("{:?} ({})", self.kind, self.value)
        }
    }
}
