//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the tokenizer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's matched text
/// * `$number` - Optional numeric payload (omitted for non-numeric tokens)
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), Some(42.0), span);
/// let token = MK_TOKEN!(TokenKind::Plus, "+".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            number: None,
            span: $span,
        }
    };
    ($kind:expr, $value:expr, $number:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            number: $number,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for tokens written as fixed text.
///
/// Generates a handler function that creates a token with the given kind
/// and advances the lexer position by the text's length in bytes.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<Option<Token>, Error> {
            let token = MK_TOKEN!($kind, String::from($value), lexer.span_for($value));
            lexer.advance_n($value.len());
            Ok(Some(token))
        }
    };
}
