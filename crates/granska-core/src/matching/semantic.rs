//! Two-document TF-IDF cosine similarity.
//!
//! Term extraction: lowercase, tokens of two or more word characters,
//! English stop words removed, then unigrams plus bigrams of the remaining
//! sequence. Weights are raw counts times smoothed idf
//! `ln((1 + n) / (1 + df)) + 1`, L2-normalised per document.

use crate::language::stopwords::is_stop_word;
use crate::model::round_score;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorizeError {
    #[error("empty vocabulary; documents contain only stop words or no words at all")]
    EmptyVocabulary,
}

/// Unigram and bigram terms of one document.
pub fn terms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let words: Vec<&str> = TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|w| !is_stop_word(w))
        .collect();

    let mut terms: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    terms.extend(words.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    terms
}

fn term_counts(terms: &[String]) -> BTreeMap<&str, f64> {
    let mut counts = BTreeMap::new();
    for term in terms {
        *counts.entry(term.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Cosine similarity (0.0–1.0) of two documents in their shared TF-IDF space.
pub fn tfidf_cosine(a: &str, b: &str) -> Result<f64, VectorizeError> {
    let terms_a = terms(a);
    let terms_b = terms(b);
    let counts_a = term_counts(&terms_a);
    let counts_b = term_counts(&terms_b);

    let vocabulary: BTreeSet<&str> = counts_a.keys().chain(counts_b.keys()).copied().collect();
    if vocabulary.is_empty() {
        return Err(VectorizeError::EmptyVocabulary);
    }

    let n_docs = 2.0_f64;
    let mut vec_a = Vec::with_capacity(vocabulary.len());
    let mut vec_b = Vec::with_capacity(vocabulary.len());

    for term in &vocabulary {
        let tf_a = counts_a.get(term).copied().unwrap_or(0.0);
        let tf_b = counts_b.get(term).copied().unwrap_or(0.0);
        let df = f64::from(u8::from(tf_a > 0.0) + u8::from(tf_b > 0.0));
        let idf = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;
        vec_a.push(tf_a * idf);
        vec_b.push(tf_b * idf);
    }

    let norm_a = vec_a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = vec_b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    let dot: f64 = vec_a.iter().zip(&vec_b).map(|(x, y)| x * y).sum();
    Ok((dot / (norm_a * norm_b)).clamp(0.0, 1.0))
}

/// Similarity between resume text and a job's keyword bag as a 0–100
/// percentage with two decimals. Degenerate input scores 0.0.
pub fn semantic_similarity(resume_text: &str, keywords: &[String]) -> f64 {
    let job_document = keywords.join(" ");
    match tfidf_cosine(resume_text, &job_document) {
        Ok(similarity) => round_score(similarity * 100.0),
        Err(e) => {
            tracing::warn!(error = %e, "semantic similarity unavailable, scoring 0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_drop_stop_words_before_bigrams() {
        let t = terms("Built the data pipeline");
        assert_eq!(
            t,
            vec!["built", "data", "pipeline", "built data", "data pipeline"]
        );
    }

    #[test]
    fn test_terms_ignore_single_characters() {
        assert_eq!(terms("a b c r ml"), vec!["ml"]);
    }

    #[test]
    fn test_identical_documents_score_one() {
        let sim = tfidf_cosine("rust tokio serde", "rust tokio serde").unwrap();
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        assert_eq!(tfidf_cosine("rust tokio", "excel powerpoint").unwrap(), 0.0);
    }

    #[test]
    fn test_shared_terms_weighted_below_unique_terms() {
        // shared term idf = 1, unique term idf = ln(1.5) + 1
        let sim = tfidf_cosine("python django", "python").unwrap();
        let unique = 1.5_f64.ln() + 1.0;
        let expected = 1.0 / (1.0 + unique * unique * 2.0).sqrt();
        assert!((sim - expected).abs() < 1e-12, "{sim} vs {expected}");
    }

    #[test]
    fn test_empty_vocabulary_is_error() {
        assert_eq!(
            tfidf_cosine("", "the and of"),
            Err(VectorizeError::EmptyVocabulary)
        );
    }

    #[test]
    fn test_semantic_similarity_recovers_to_zero() {
        assert_eq!(semantic_similarity("", &[]), 0.0);
        assert_eq!(semantic_similarity("python", &[]), 0.0);
    }

    #[test]
    fn test_semantic_similarity_is_percentage() {
        let keywords = vec!["python".to_string(), "sql".to_string()];
        let sim = semantic_similarity("python sql", &keywords);
        assert_eq!(sim, 100.0);
    }
}
