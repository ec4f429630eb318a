//! Parser module that evaluates expressions while parsing them.
//!
//! This module contains a recursive-descent parser with one token of
//! lookahead. Each grammar rule computes its value directly:
//!
//! ```text
//! expr     := term (('+' | '-') term)*
//! term     := pow_expr (('*' | '/') pow_expr)*
//! pow_expr := factor ('^' pow_expr)?
//! factor   := INTEGER | FLOAT | '(' expr ')'
//!           | SQRT '(' expr ')' | LOG '(' expr (',' expr)? ')'
//!           | (SIN | COS | TAN) '(' expr ')'
//! ```
//!
//! `^` is right-associative, every other operator is left-associative.

pub mod expr;
pub mod functions;
pub mod parser;

#[cfg(test)]
mod tests;
