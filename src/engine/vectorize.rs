// TF-IDF vectorization over the eligible overview set.
//
// Each overview is one document. Term frequency is the raw in-document
// count; IDF uses the smoothed form ln((N + 1) / (df + 1)) + 1, so every
// weight is strictly positive even for a term that appears in every
// document. Non-negative weights are what keep cosine scores in [0, 1].

use std::collections::{HashMap, HashSet};

use super::tokenize::Tokenizer;

/// Seam for swapping the weighting scheme without touching the ranking
/// code. The default implementation is TF-IDF.
pub trait TextVectorizer {
    /// Turn one document per input string into sparse weight vectors over
    /// a shared vocabulary.
    fn vectorize(&self, documents: &[&str]) -> VectorIndex;
}

/// Sparse term-weight vectors, one per document, in input order.
#[derive(Debug, Clone)]
pub struct VectorIndex {
    vectors: Vec<HashMap<String, f64>>,
    vocabulary_size: usize,
}

impl VectorIndex {
    pub fn vectors(&self) -> &[HashMap<String, f64>] {
        &self.vectors
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Number of distinct terms across all documents after stop word
    /// removal.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }
}

/// TF-IDF vectorizer — the default and only weighting scheme for now.
pub struct TfIdfVectorizer {
    tokenizer: Tokenizer,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self {
            tokenizer: Tokenizer::default(),
        }
    }
}

impl TextVectorizer for TfIdfVectorizer {
    fn vectorize(&self, documents: &[&str]) -> VectorIndex {
        let token_lists: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.tokenizer.tokenize(doc))
            .collect();

        // Document frequency: in how many documents does each term appear?
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for tokens in &token_lists {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let total_docs = documents.len() as f64;
        let vectors: Vec<HashMap<String, f64>> = token_lists
            .iter()
            .map(|tokens| {
                let mut term_counts: HashMap<&str, f64> = HashMap::new();
                for token in tokens {
                    *term_counts.entry(token.as_str()).or_insert(0.0) += 1.0;
                }
                term_counts
                    .into_iter()
                    .map(|(term, count)| {
                        let df = document_frequency.get(term).copied().unwrap_or(1) as f64;
                        let idf = ((total_docs + 1.0) / (df + 1.0)).ln() + 1.0;
                        (term.to_string(), count * idf)
                    })
                    .collect()
            })
            .collect();

        VectorIndex {
            vectors,
            vocabulary_size: document_frequency.len(),
        }
    }
}
