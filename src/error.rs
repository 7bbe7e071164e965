// Error taxonomy for the similarity library.
//
// Configuration problems are rejected up front, when weights, thresholds,
// segmenter names or stop-word files are turned into a SimilarityConfig.
// Scoring itself never fails: the empty-document case has defined values
// (see pipeline::SimilarityReport::degenerate) instead of an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimilarityError {
    /// Combination weights are negative, non-finite, or don't sum to 1.0.
    #[error("invalid combination weights {jaccard}/{cosine}/{levenshtein}: {reason}")]
    InvalidWeights {
        jaccard: f64,
        cosine: f64,
        levenshtein: f64,
        reason: &'static str,
    },

    /// Label thresholds are outside (0, 1] or not strictly decreasing.
    #[error("invalid label thresholds {high}/{medium}/{low}: {reason}")]
    InvalidThresholds {
        high: f64,
        medium: f64,
        low: f64,
        reason: &'static str,
    },

    /// A config value (env var or CLI flag) couldn't be parsed.
    #[error("invalid config value {value:?}: {reason}")]
    InvalidConfig { value: String, reason: String },

    #[error("unknown segmenter {0:?} (expected jieba, whitespace or unicode)")]
    UnknownSegmenter(String),

    #[error("failed to parse stop-word document: {0}")]
    StopWords(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
