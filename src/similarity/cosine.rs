// Cosine similarity over normalized term-frequency vectors.
//
// Each document becomes a TermVector: token -> count / sequence length.
// There is no IDF term; with only two documents in the corpus IDF
// degenerates (every shared term gets the same weight), so pure TF is used.
//
// Missing keys on either side count as 0.0. A zero vector (empty token
// sequence) has no direction, so any comparison involving one scores 0.0.
// Keys are kept ordered so sums accumulate in the same order every run.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Normalized term frequencies for one token sequence.
///
/// For a non-empty sequence the values sum to 1.0; an empty sequence
/// produces an empty (zero) vector.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TermVector {
    weights: BTreeMap<String, f64>,
}

impl TermVector {
    /// Build the term-frequency vector for a token sequence.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        if tokens.is_empty() {
            return Self::default();
        }

        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for token in tokens {
            *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
        }

        // Divide counts once instead of accumulating 1/len per occurrence,
        // which keeps the sum as close to 1.0 as f64 allows.
        let len = tokens.len() as f64;
        let weights = counts
            .into_iter()
            .map(|(token, count)| (token, count as f64 / len))
            .collect();

        Self { weights }
    }

    /// Weight of a token, 0.0 if absent.
    pub fn get(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Euclidean norm of the vector.
    pub fn magnitude(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Cosine of the angle between two vectors, over the union of keys.
    pub fn cosine(&self, other: &TermVector) -> f64 {
        let keys: BTreeSet<&String> = self.weights.keys().chain(other.weights.keys()).collect();

        let mut dot = 0.0;
        let mut mag_a = 0.0;
        let mut mag_b = 0.0;
        for key in keys {
            let a = self.get(key);
            let b = other.get(key);
            dot += a * b;
            mag_a += a * a;
            mag_b += b * b;
        }

        if mag_a == 0.0 || mag_b == 0.0 {
            return 0.0;
        }

        // TF weights are non-negative, so only rounding can push this past 1.0
        (dot / (mag_a.sqrt() * mag_b.sqrt())).clamp(0.0, 1.0)
    }
}

/// Cosine similarity between the TF vectors of two token sequences.
pub fn cosine_similarity<S: AsRef<str>>(tokens_a: &[S], tokens_b: &[S]) -> f64 {
    TermVector::from_tokens(tokens_a).cosine(&TermVector::from_tokens(tokens_b))
}
