//! Semantic similarity between resume text and job text.
//!
//! Default backend: `TfIdfScorer`, a TF-IDF vector space fitted on exactly the
//! two documents being compared, followed by cosine similarity.
//!
//! A scorer failure is not an error for callers: `semantic_similarity` turns it
//! into `Similarity::Fallback`, whose value (0.5) is part of the scoring contract.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Similarity used when the scorer cannot produce a value.
pub const FALLBACK_SIMILARITY: f64 = 0.5;

/// Tokens of two or more word characters.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid token regex"));

#[derive(Debug, Error, PartialEq)]
pub enum SimilarityError {
    #[error("empty vocabulary; documents contain no usable terms")]
    EmptyVocabulary,

    #[error("similarity is not a finite number")]
    NonFinite,
}

/// Outcome of a similarity computation: either a computed value or the
/// documented fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Similarity {
    Computed(f64),
    Fallback,
}

impl Similarity {
    pub fn value(self) -> f64 {
        match self {
            Similarity::Computed(v) => v,
            Similarity::Fallback => FALLBACK_SIMILARITY,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, Similarity::Fallback)
    }
}

/// The similarity scorer trait. Implement this to swap backends without
/// touching the match engine or handlers.
///
/// Carried in `AppState` (via `MatchEngine`) as `Arc<dyn SimilarityScorer>`.
pub trait SimilarityScorer: Send + Sync {
    /// Returns a similarity in [0, 1].
    fn score(&self, resume_text: &str, job_text: &str) -> Result<f64, SimilarityError>;
}

/// Compute-or-default wrapper around any scorer.
pub fn semantic_similarity(
    scorer: &dyn SimilarityScorer,
    resume_text: &str,
    job_text: &str,
) -> Similarity {
    match scorer.score(resume_text, job_text) {
        Ok(v) => Similarity::Computed(v),
        Err(e) => {
            debug!("Similarity fell back to {FALLBACK_SIMILARITY}: {e}");
            Similarity::Fallback
        }
    }
}

/// TF-IDF + cosine similarity over a two-document corpus.
///
/// Terms are lower-cased tokens of at least two word characters. Weights are
/// raw counts times smoothed idf `ln((1 + n) / (1 + df)) + 1`, l2-normalised.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl SimilarityScorer for TfIdfScorer {
    fn score(&self, resume_text: &str, job_text: &str) -> Result<f64, SimilarityError> {
        let docs = [term_counts(resume_text), term_counts(job_text)];

        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in &docs {
            for term in doc.keys() {
                *document_frequency.entry(term.as_str()).or_default() += 1;
            }
        }
        if document_frequency.is_empty() {
            return Err(SimilarityError::EmptyVocabulary);
        }

        let n = docs.len() as f64;
        let vectors: Vec<Vec<f64>> = docs
            .iter()
            .map(|doc| {
                let weights: Vec<f64> = document_frequency
                    .iter()
                    .map(|(term, &df)| {
                        let tf = doc.get(*term).copied().unwrap_or(0) as f64;
                        let idf = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
                        tf * idf
                    })
                    .collect();
                l2_normalize(weights)
            })
            .collect();

        let similarity: f64 = vectors[0].iter().zip(&vectors[1]).map(|(a, b)| a * b).sum();
        if !similarity.is_finite() {
            return Err(SimilarityError::NonFinite);
        }
        Ok(similarity.clamp(0.0, 1.0))
    }
}

fn term_counts(text: &str) -> HashMap<String, usize> {
    let lower = text.to_lowercase();
    let mut counts = HashMap::new();
    for token in TOKEN_RE.find_iter(&lower) {
        *counts.entry(token.as_str().to_string()).or_default() += 1;
    }
    counts
}

/// Zero vectors stay zero, so a document with no terms scores 0 against anything.
fn l2_normalize(mut v: Vec<f64>) -> Vec<f64> {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in &mut v {
            *x /= norm;
        }
    }
    v
}

/// Returns the same value for every pair; lets tests hold similarity constant.
#[cfg(test)]
pub(crate) struct FixedScorer(pub f64);

#[cfg(test)]
impl SimilarityScorer for FixedScorer {
    fn score(&self, _: &str, _: &str) -> Result<f64, SimilarityError> {
        Ok(self.0)
    }
}
