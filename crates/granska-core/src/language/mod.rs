pub mod heuristic;
pub mod stopwords;

use crate::error::GranskaError;

pub use heuristic::HeuristicAnalyzer;

/// Tokens and noun-phrase candidates for one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinguisticFeatures {
    pub tokens: Vec<String>,
    pub noun_phrases: Vec<String>,
}

/// Trait for tokenization / phrase-chunking backends.
pub trait LanguageAnalyzer: Send + Sync {
    /// Tokenize `text` and propose noun-phrase candidates from it.
    fn analyze(&self, text: &str) -> Result<LinguisticFeatures, GranskaError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
