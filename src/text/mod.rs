// Text preparation: normalization, stop words and word segmentation.

pub mod normalizer;
pub mod segmenter;
pub mod stopwords;
pub mod traits;
