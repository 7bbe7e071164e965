// Comparison pipeline: normalize, segment, score, combine.
//
// raw text -> normalize -> segment -> {jaccard, cosine, levenshtein} -> combine
//
// All configuration (stop words, weights, thresholds, segmenter) is injected
// through the Comparator. Nothing here reads files or touches process-wide
// state; the CLI in main.rs owns I/O and presentation.

use serde::Serialize;
use tracing::{debug, warn};

use crate::similarity::combine::{combine, CombinationWeights, LabelThresholds, SimilarityLabel};
use crate::similarity::cosine::cosine_similarity;
use crate::similarity::jaccard::jaccard;
use crate::similarity::levenshtein::levenshtein_similarity;
use crate::text::normalizer::normalize;
use crate::text::segmenter::SegmenterKind;
use crate::text::stopwords::StopWords;
use crate::text::traits::Segmenter;

/// Tunables for one comparison. Validated on construction of its parts.
#[derive(Debug, Clone)]
pub struct SimilarityConfig {
    pub stop_words: StopWords,
    pub weights: CombinationWeights,
    pub thresholds: LabelThresholds,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWords::builtin(),
            weights: CombinationWeights::default(),
            thresholds: LabelThresholds::default(),
        }
    }
}

/// Result of comparing two documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    /// Weighted combination of the three component scores
    pub combined: f64,
    pub jaccard: f64,
    pub cosine: f64,
    pub levenshtein: f64,
    pub label: SimilarityLabel,
    /// Both documents reduced to zero tokens. Scores are still defined:
    /// Jaccard and Levenshtein are 1.0 (vacuously identical) and cosine is
    /// 0.0 (a zero vector has no direction).
    pub degenerate: bool,
    /// Token counts after normalization and segmentation
    pub token_counts: (usize, usize),
}

/// The three component scores for one pair of token sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub jaccard: f64,
    pub cosine: f64,
    pub levenshtein: f64,
}

impl ComponentScores {
    pub fn compute<S: AsRef<str>>(tokens_a: &[S], tokens_b: &[S]) -> Self {
        Self {
            jaccard: jaccard(tokens_a, tokens_b),
            cosine: cosine_similarity(tokens_a, tokens_b),
            levenshtein: levenshtein_similarity(tokens_a, tokens_b),
        }
    }

    /// Same as `compute`, with each measure on its own scoped thread. The
    /// measures only read the token slices, so no synchronization is needed.
    pub fn compute_parallel<S: AsRef<str> + Sync>(tokens_a: &[S], tokens_b: &[S]) -> Self {
        std::thread::scope(|scope| {
            let cosine = scope.spawn(|| cosine_similarity(tokens_a, tokens_b));
            let levenshtein = scope.spawn(|| levenshtein_similarity(tokens_a, tokens_b));
            let jaccard = jaccard(tokens_a, tokens_b);

            Self {
                jaccard,
                cosine: join_scored(cosine),
                levenshtein: join_scored(levenshtein),
            }
        })
    }
}

/// Join a scoring thread, re-raising its panic on the caller's thread.
fn join_scored(handle: std::thread::ScopedJoinHandle<'_, f64>) -> f64 {
    match handle.join() {
        Ok(score) => score,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

/// Compares pairs of documents with a fixed config and segmenter.
pub struct Comparator {
    config: SimilarityConfig,
    segmenter: Box<dyn Segmenter + Send + Sync>,
}

impl Comparator {
    pub fn new(config: SimilarityConfig, segmenter: Box<dyn Segmenter + Send + Sync>) -> Self {
        Self { config, segmenter }
    }

    /// Built-in stop words, default weights and thresholds, jieba segmentation.
    pub fn with_defaults() -> Self {
        Self::new(SimilarityConfig::default(), SegmenterKind::Jieba.build())
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Normalize and segment one document.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text, &self.config.stop_words);
        self.segmenter.segment(&normalized)
    }

    /// Compare two documents, computing the measures sequentially.
    pub fn compare(&self, text_a: &str, text_b: &str) -> SimilarityReport {
        let tokens_a = self.tokenize(text_a);
        let tokens_b = self.tokenize(text_b);
        let scores = ComponentScores::compute(&tokens_a, &tokens_b);
        self.report(scores, &tokens_a, &tokens_b)
    }

    /// Compare two documents, computing the measures on separate threads.
    /// Produces the same report as `compare`.
    pub fn compare_parallel(&self, text_a: &str, text_b: &str) -> SimilarityReport {
        let tokens_a = self.tokenize(text_a);
        let tokens_b = self.tokenize(text_b);
        let scores = ComponentScores::compute_parallel(&tokens_a, &tokens_b);
        self.report(scores, &tokens_a, &tokens_b)
    }

    fn report(
        &self,
        scores: ComponentScores,
        tokens_a: &[String],
        tokens_b: &[String],
    ) -> SimilarityReport {
        let degenerate = tokens_a.is_empty() && tokens_b.is_empty();
        if degenerate {
            warn!("Both documents are empty after normalization; using vacuous-identity scores");
        }

        let (combined, label) = combine(
            scores.jaccard,
            scores.cosine,
            scores.levenshtein,
            &self.config.weights,
            &self.config.thresholds,
        );

        debug!(
            tokens_a = tokens_a.len(),
            tokens_b = tokens_b.len(),
            jaccard = scores.jaccard,
            cosine = scores.cosine,
            levenshtein = scores.levenshtein,
            combined,
            label = %label,
            "Computed document similarity"
        );

        SimilarityReport {
            combined,
            jaccard: scores.jaccard,
            cosine: scores.cosine,
            levenshtein: scores.levenshtein,
            label,
            degenerate,
            token_counts: (tokens_a.len(), tokens_b.len()),
        }
    }
}
