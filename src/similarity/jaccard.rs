// Jaccard similarity over token sets.
//
// Duplicates collapse and order is ignored: the score is
// |intersection| / |union| of the two vocabularies.

use std::collections::HashSet;

/// Compute Jaccard similarity between two token sequences.
///
/// Two empty sequences are vacuously identical and score 1.0. One empty and
/// one non-empty sequence score 0.0 (non-empty union, empty intersection).
pub fn jaccard<S: AsRef<str>>(tokens_a: &[S], tokens_b: &[S]) -> f64 {
    let set_a: HashSet<&str> = tokens_a.iter().map(|t| t.as_ref()).collect();
    let set_b: HashSet<&str> = tokens_b.iter().map(|t| t.as_ref()).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 1.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}
