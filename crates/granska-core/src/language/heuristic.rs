use super::stopwords::is_stop_word;
use super::{LanguageAnalyzer, LinguisticFeatures};
use crate::error::GranskaError;

/// Punctuation stripped from both ends of a whitespace token.
/// `+`, `#` and `/` survive so "c++", "c#" and "ci/cd" stay intact.
const EDGE_PUNCTUATION: &[char] = &[
    ',', '.', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'', '`', '|', '•', '*',
    '·', '–', '—',
];

const CLAUSE_END: &[char] = &[',', '.', ';', ':', '!', '?', ')', ']', '}', '|'];
const CLAUSE_START: &[char] = &['(', '[', '{', '|', '•', '*', '-'];

/// Rule-based tokenizer and phrase chunker.
///
/// Noun-phrase candidates are maximal runs of alphabetic, non-stop-word
/// tokens that do not cross clause punctuation. This over-generates
/// (verbs and adjectives end up in phrases); callers bucket the noise.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageAnalyzer for HeuristicAnalyzer {
    fn analyze(&self, text: &str) -> Result<LinguisticFeatures, GranskaError> {
        Ok(LinguisticFeatures {
            tokens: tokenize(text),
            noun_phrases: chunk_phrases(text),
        })
    }

    fn backend_name(&self) -> &str {
        "heuristic"
    }
}

fn clean_token(raw: &str) -> &str {
    raw.trim_matches(EDGE_PUNCTUATION)
}

/// Whitespace tokens with edge punctuation removed.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(clean_token)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_phrase_word(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, '+' | '#' | '/' | '-' | '.'))
        && !is_stop_word(&word.to_lowercase())
}

/// Noun-phrase candidates in order of appearance.
pub fn chunk_phrases(text: &str) -> Vec<String> {
    let mut phrases = Vec::new();

    for line in text.lines() {
        let mut run: Vec<&str> = Vec::new();

        for raw in line.split_whitespace() {
            if raw.starts_with(CLAUSE_START) {
                flush_run(&mut run, &mut phrases);
            }

            let word = clean_token(raw);
            if is_phrase_word(word) {
                run.push(word);
            } else {
                flush_run(&mut run, &mut phrases);
            }

            if raw.ends_with(CLAUSE_END) {
                flush_run(&mut run, &mut phrases);
            }
        }

        flush_run(&mut run, &mut phrases);
    }

    phrases
}

fn flush_run(run: &mut Vec<&str>, phrases: &mut Vec<String>) {
    if !run.is_empty() {
        phrases.push(run.join(" "));
        run.clear();
    }
}
