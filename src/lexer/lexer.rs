use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    tokens::{Token, TokenKind},
    vocabulary::{Vocabulary, STANDARD_VOCABULARY},
};

/// Handlers return `Ok(None)` when the match produced no token (whitespace).
pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored and tried in order against the unread input.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\p{Alphabetic}+").unwrap(), handler: word_handler },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Multiply, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Divide, "/") },
        RegexPattern { regex: Regex::new("^\\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Pow, "^") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen, ")") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^√").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Sqrt, "√") },
    ];
}

/// Pull-based tokenizer over a single input line.
///
/// `pos` is a byte offset into `source` and only ever moves forward. Once the
/// input is exhausted every call to [`Lexer::next_token`] yields `EndOfInput`.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    vocabulary: Arc<Vocabulary>,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer::with_vocabulary(source, Arc::clone(&STANDARD_VOCABULARY))
    }

    pub fn with_vocabulary(source: &str, vocabulary: Arc<Vocabulary>) -> Lexer {
        Lexer {
            source: source.to_string(),
            pos: 0,
            vocabulary,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Character offset of the cursor, used for error reporting.
    pub fn position(&self) -> Position {
        Position(self.source[..self.pos].chars().count())
    }

    /// Span covering `text` if it were read starting at the cursor.
    pub fn span_for(&self, text: &str) -> Span {
        let start = self.position();
        Span {
            start,
            end: Position(start.0 + text.chars().count()),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if self.at_eof() {
                let position = self.position();
                return Ok(MK_TOKEN!(
                    TokenKind::EndOfInput,
                    String::new(),
                    Span {
                        start: position,
                        end: position
                    }
                ));
            }

            let pattern = PATTERNS
                .iter()
                .find(|pattern| pattern.regex.is_match(self.remainder()));

            let Some(pattern) = pattern else {
                let character = self.at().unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::InvalidCharacter { character },
                    self.position(),
                ));
            };

            if let Some(token) = (pattern.handler)(self, &pattern.regex)? {
                trace!(kind = ?token.kind, value = %token.value, start = token.span.start.0, "lexed token");
                return Ok(token);
            }
        }
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
    Ok(None)
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let matched = lexer.matched(regex);
    let kind = if matched.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Integer
    };

    let value = matched.parse::<f64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: matched.clone(),
            },
            lexer.position(),
        )
    })?;

    let token = MK_TOKEN!(kind, matched.clone(), Some(value), lexer.span_for(&matched));
    lexer.advance_n(matched.len());
    Ok(Some(token))
}

fn word_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let word = lexer.matched(regex);
    let span = lexer.span_for(&word);

    let token = if let Some(kind) = lexer.vocabulary().keyword(&word) {
        MK_TOKEN!(kind, word.to_lowercase(), span)
    } else if let Some(value) = lexer.vocabulary().constant(&word) {
        MK_TOKEN!(TokenKind::Float, word.to_lowercase(), Some(value), span)
    } else {
        return Err(Error::new(
            ErrorImpl::UnknownWord {
                character: word.chars().next().unwrap_or_default(),
                word,
            },
            span.start,
        ));
    };

    lexer.advance_n(word.len());
    Ok(Some(token))
}

/// Reads the whole line eagerly, ending with an `EndOfInput` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
