//! Keyword and constant tables shared by the lexer and the help listing.

use lazy_static::lazy_static;
use std::{collections::HashMap, sync::Arc};

use super::tokens::TokenKind;

lazy_static! {
    pub static ref STANDARD_VOCABULARY: Arc<Vocabulary> = Arc::new(Vocabulary::standard());
}

/// Function keywords and named constants recognised in alphabetic runs.
///
/// Lookups are done on the lowercased word. The table is never mutated after
/// construction, so one instance can be shared by any number of lexers,
/// across threads included.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    keywords: HashMap<&'static str, TokenKind>,
    constants: HashMap<&'static str, f64>,
}

impl Vocabulary {
    pub fn new(
        keywords: HashMap<&'static str, TokenKind>,
        constants: HashMap<&'static str, f64>,
    ) -> Self {
        Vocabulary {
            keywords,
            constants,
        }
    }

    /// `sqrt`, `log`, `ln`, `sin`, `cos`, `tan` and the constants `pi`, `e`, `phi`.
    pub fn standard() -> Self {
        let mut keywords = HashMap::new();
        keywords.insert("sqrt", TokenKind::Sqrt);
        keywords.insert("log", TokenKind::Log);
        keywords.insert("ln", TokenKind::Log);
        keywords.insert("sin", TokenKind::Sin);
        keywords.insert("cos", TokenKind::Cos);
        keywords.insert("tan", TokenKind::Tan);

        let mut constants = HashMap::new();
        constants.insert("pi", std::f64::consts::PI);
        constants.insert("e", std::f64::consts::E);
        constants.insert("phi", (1.0 + 5f64.sqrt()) / 2.0);

        Vocabulary::new(keywords, constants)
    }

    pub fn keyword(&self, word: &str) -> Option<TokenKind> {
        self.keywords.get(word.to_lowercase().as_str()).copied()
    }

    pub fn constant(&self, word: &str) -> Option<f64> {
        self.constants.get(word.to_lowercase().as_str()).copied()
    }

    /// Constants sorted by name.
    pub fn constants(&self) -> Vec<(&'static str, f64)> {
        let mut constants = self
            .constants
            .iter()
            .map(|(name, value)| (*name, *value))
            .collect::<Vec<_>>();
        constants.sort_by(|a, b| a.0.cmp(b.0));
        constants
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary::standard()
    }
}
