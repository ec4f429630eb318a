//! Lexical analysis module for the evaluator.
//!
//! This module contains the lexer (tokenizer) that turns one input line
//! into tokens, handed out one at a time to the parser. It handles:
//!
//! - Tokenization of the line using anchored regex patterns
//! - Recognition of numbers, operators, function keywords and constants
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
pub mod vocabulary;
