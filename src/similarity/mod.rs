// Similarity measures (set overlap, term-frequency cosine, edit distance)
// and the weighted combination that turns them into one labeled score.

pub mod combine;
pub mod cosine;
pub mod jaccard;
pub mod levenshtein;
