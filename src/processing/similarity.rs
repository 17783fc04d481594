//! TF-IDF cosine similarity between a resume and a job description
//!
//! Each call builds its own corpus from the documents it is given; nothing is
//! cached between calls.
//!
//! Weighting:
//! - tf: raw term count in the document
//! - idf: smoothed, `ln((1 + n) / (1 + df)) + 1`
//! - vectors are L2-normalized, so cosine similarity is the dot product

use crate::processing::text_processor::tokenize;
use std::collections::HashMap;

/// Tokens shorter than this are ignored
const MIN_TERM_LENGTH: usize = 2;

pub type SparseVector = HashMap<String, f64>;

pub struct TfIdfVectorizer {
    idf: HashMap<String, f64>,
}

impl TfIdfVectorizer {
    /// Learn document frequencies from `documents` (already tokenized)
    pub fn fit(documents: &[Vec<String>]) -> Self {
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();

        for document in documents {
            let mut seen: Vec<&str> = document.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .into_iter()
            .map(|(term, df)| (term.to_string(), ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0))
            .collect();

        Self { idf }
    }

    /// L2-normalized TF-IDF vector; empty when no term is known
    pub fn transform(&self, document: &[String]) -> SparseVector {
        let mut vector = SparseVector::new();

        for term in document {
            if let Some(idf) = self.idf.get(term) {
                *vector.entry(term.clone()).or_insert(0.0) += idf;
            }
        }

        let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in vector.values_mut() {
                *weight /= norm;
            }
        }

        vector
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }
}

/// Dot product of two normalized sparse vectors
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    small
        .iter()
        .filter_map(|(term, weight)| large.get(term).map(|other| weight * other))
        .sum()
}

fn terms(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| token.len() >= MIN_TERM_LENGTH)
        .collect()
}

/// Cosine similarity in `[0, 1]`; 0 when either document has no usable terms
pub fn cosine_similarity(resume_text: &str, jd_text: &str) -> f64 {
    let resume_terms = terms(resume_text);
    let jd_terms = terms(jd_text);

    if resume_terms.is_empty() || jd_terms.is_empty() {
        return 0.0;
    }

    let corpus = [resume_terms, jd_terms];
    let vectorizer = TfIdfVectorizer::fit(&corpus);
    let resume_vector = vectorizer.transform(&corpus[0]);
    let jd_vector = vectorizer.transform(&corpus[1]);

    cosine(&resume_vector, &jd_vector).clamp(0.0, 1.0)
}

/// Cosine similarity scaled to 0–100 and rounded
pub fn similarity_score(resume_text: &str, jd_text: &str) -> u8 {
    (cosine_similarity(resume_text, jd_text) * 100.0).round() as u8
}
