// Segmenter trait, the one pluggable seam in the pipeline.
//
// The similarity core only needs "split normalized text into an ordered
// list of word tokens". How that happens is language-specific (whitespace
// for English, dictionary segmentation for Chinese), so it lives behind
// this trait and the rest of the crate never names a concrete segmenter.

/// Splits normalized text into word tokens.
///
/// Implementations must be deterministic, must return only non-empty,
/// non-blank tokens, and must return an empty Vec for empty input.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Vec<String>;
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn segment(&self, text: &str) -> Vec<String> {
        (**self).segment(text)
    }
}
