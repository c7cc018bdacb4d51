// Ranked recommendation lookup.
//
// The Recommender owns an immutable snapshot of the eligible rows plus
// their similarity matrix. Queries are pure: resolve the title, read one
// matrix row, stable-sort, take the head.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::catalog::{Catalog, MovieRecord};

use super::similarity::SimilarityMatrix;
use super::vectorize::{TextVectorizer, TfIdfVectorizer};

/// Recommendations returned when the caller doesn't ask for a count.
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Error)]
pub enum RecommendError {
    /// The query title is absent from the eligible set — either not in the
    /// catalog at all, or present without an overview. Recoverable: the
    /// caller shows a warning and an empty result.
    #[error("no movie with an overview is titled \"{0}\"")]
    TitleNotFound(String),

    #[error("top_n must be a positive integer")]
    InvalidTopN,
}

/// One ranked recommendation: the full catalog record plus its similarity
/// to the query overview.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMovie {
    #[serde(flatten)]
    pub record: MovieRecord,
    pub score: f64,
}

/// Content-based recommender over one catalog snapshot.
///
/// Construction vectorizes every eligible overview and computes the full
/// pairwise similarity matrix — O(rows × vocabulary) to vectorize plus
/// O(rows² × vocabulary) to score, acceptable for a single in-memory
/// catalog. The instance doubles as the per-catalog cache: repeated
/// queries reuse the matrix and recompute nothing.
pub struct Recommender {
    records: Vec<MovieRecord>,
    matrix: SimilarityMatrix,
    vocabulary_size: usize,
}

impl Recommender {
    /// Build a recommender with the default TF-IDF weighting.
    pub fn new(catalog: &Catalog) -> Self {
        Self::with_vectorizer(catalog, &TfIdfVectorizer::default())
    }

    /// Build a recommender with a caller-supplied weighting scheme.
    pub fn with_vectorizer(catalog: &Catalog, vectorizer: &dyn TextVectorizer) -> Self {
        let mut records = Vec::new();
        let mut documents: Vec<&str> = Vec::new();
        for (_, record) in catalog.eligible() {
            // eligible() only yields rows with overview text
            documents.push(record.overview_text().unwrap_or_default());
            records.push(record.clone());
        }

        let index = vectorizer.vectorize(&documents);
        let matrix = SimilarityMatrix::build(&index);
        info!(
            eligible = records.len(),
            vocabulary = index.vocabulary_size(),
            "similarity index built"
        );

        Self {
            records,
            matrix,
            vocabulary_size: index.vocabulary_size(),
        }
    }

    /// Rows in the similarity universe (catalog rows with an overview).
    pub fn eligible_count(&self) -> usize {
        self.records.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Eligible titles in catalog order — the picker's source.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.title.as_str())
    }

    /// The top `top_n` movies most similar in plot to `query_title`.
    ///
    /// The query row never appears in its own list. Exact score ties keep
    /// their original catalog order. Fewer than `top_n` remaining
    /// candidates yields a shorter, possibly empty, list — not an error.
    pub fn recommend(
        &self,
        query_title: &str,
        top_n: usize,
    ) -> Result<Vec<ScoredMovie>, RecommendError> {
        if top_n == 0 {
            return Err(RecommendError::InvalidTopN);
        }

        // Duplicate titles resolve to the first eligible occurrence.
        let query_index = self
            .records
            .iter()
            .position(|record| record.title == query_title)
            .ok_or_else(|| RecommendError::TitleNotFound(query_title.to_string()))?;

        let scores = self.matrix.row(query_index);
        let mut candidates: Vec<(usize, f64)> = (0..self.records.len())
            .filter(|&i| i != query_index)
            .map(|i| (i, scores[i]))
            .collect();
        // Stable sort: candidates enter in catalog order, so equal scores
        // keep that order.
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(candidates
            .into_iter()
            .take(top_n)
            .map(|(i, score)| ScoredMovie {
                record: self.records[i].clone(),
                score,
            })
            .collect())
    }
}
