// docsim: combined similarity scoring for pairs of documents
//
// This is the library root. Each module corresponds to a stage of the
// comparison pipeline or one of the surfaces around it (config, input,
// output).

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod text;

pub use error::SimilarityError;
pub use pipeline::{Comparator, SimilarityConfig, SimilarityReport};
pub use similarity::combine::{CombinationWeights, LabelThresholds, Locale, SimilarityLabel};
pub use text::stopwords::StopWords;
pub use text::traits::Segmenter;
