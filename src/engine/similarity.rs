// Cosine similarity over sparse term-weight vectors, and the pairwise
// matrix the ranking step reads from.

use std::collections::HashMap;

use super::vectorize::VectorIndex;

/// Cosine similarity of two sparse weight vectors.
///
/// Defined as 0.0 when either vector has zero norm. With non-negative
/// TF-IDF weights the result always lands in [0, 1].
pub fn cosine_from_weights(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    for (term, weight) in a {
        norm_a += weight * weight;
        if let Some(weight_b) = b.get(term) {
            dot += weight * weight_b;
        }
    }
    let norm_b: f64 = b.values().map(|w| w * w).sum();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Symmetric pairwise cosine scores for every document in a vector index.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    scores: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Score every pair once and mirror it across the diagonal.
    pub fn build(index: &VectorIndex) -> Self {
        let vectors = index.vectors();
        let n = vectors.len();
        let mut scores = vec![vec![0.0; n]; n];
        for i in 0..n {
            scores[i][i] = cosine_from_weights(&vectors[i], &vectors[i]);
            for j in (i + 1)..n {
                let score = cosine_from_weights(&vectors[i], &vectors[j]);
                scores[i][j] = score;
                scores[j][i] = score;
            }
        }
        Self { scores }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn score(&self, i: usize, j: usize) -> f64 {
        self.scores[i][j]
    }

    /// All scores against document `i`, indexed by document.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.scores[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::vectorize::{TextVectorizer, TfIdfVectorizer};

    fn weights(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs
            .iter()
            .map(|(term, weight)| (term.to_string(), *weight))
            .collect()
    }

    #[test]
    fn identical_direction_scores_one() {
        let a = weights(&[("heist", 0.7)]);
        let b = weights(&[("heist", 0.3)]);
        let score = cosine_from_weights(&a, &b);
        assert!((score - 1.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        let a = weights(&[("heist", 1.0)]);
        let b = weights(&[("wedding", 1.0)]);
        assert_eq!(cosine_from_weights(&a, &b), 0.0);
    }

    #[test]
    fn zero_norm_defined_as_zero() {
        let empty = HashMap::new();
        let nonempty = weights(&[("heist", 0.5)]);
        assert_eq!(cosine_from_weights(&empty, &nonempty), 0.0);
        assert_eq!(cosine_from_weights(&nonempty, &empty), 0.0);
        assert_eq!(cosine_from_weights(&empty, &empty), 0.0);
    }

    #[test]
    fn cosine_is_symmetric() {
        let a = weights(&[("heist", 0.5), ("city", 0.3)]);
        let b = weights(&[("heist", 0.2), ("night", 0.8)]);
        let ab = cosine_from_weights(&a, &b);
        let ba = cosine_from_weights(&b, &a);
        assert!((ab - ba).abs() < 1e-12, "{ab} vs {ba}");
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let index = TfIdfVectorizer::default().vectorize(&[
            "a heist crew robs a bank downtown",
            "a crew plans one last bank job",
            "a wedding party descends on a small island",
        ]);
        let matrix = SimilarityMatrix::build(&index);
        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            assert!((matrix.score(i, i) - 1.0).abs() < 1e-9);
            for j in 0..3 {
                assert!((matrix.score(i, j) - matrix.score(j, i)).abs() < 1e-12);
                assert!((0.0..=1.0 + 1e-9).contains(&matrix.score(i, j)));
            }
        }
    }

    #[test]
    fn empty_index_builds_empty_matrix() {
        let index = TfIdfVectorizer::default().vectorize(&[]);
        let matrix = SimilarityMatrix::build(&index);
        assert!(matrix.is_empty());
    }
}
