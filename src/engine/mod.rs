// The similarity engine — TF-IDF vectorization, cosine scoring, ranking.
//
// Stateless request/response: a Recommender is built from one catalog
// snapshot, computes its vector index and pairwise similarity matrix up
// front, and answers ranked queries against them. Nothing persists across
// process runs.

pub mod recommend;
pub mod similarity;
pub mod tokenize;
pub mod vectorize;

pub use recommend::{RecommendError, Recommender, ScoredMovie, DEFAULT_TOP_N};
pub use similarity::{cosine_from_weights, SimilarityMatrix};
pub use tokenize::Tokenizer;
pub use vectorize::{TextVectorizer, TfIdfVectorizer, VectorIndex};
