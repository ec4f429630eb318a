//! Error types and error handling for the evaluator.
//!
//! This module defines the error type returned by every stage of an
//! evaluation. It includes:
//!
//! - An error structure carrying the offending position in the input line
//! - Variants for lexical, syntactic and numeric domain failures
//! - Helpful suggestions shown next to the message in the REPL

pub mod errors;
