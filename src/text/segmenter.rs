// Segmenter implementations.
//
// Jieba is the default because documents are often Chinese, which has no
// whitespace word boundaries. The whitespace and Unicode word-bound
// segmenters cover space-delimited languages without loading a dictionary.

use std::fmt;
use std::str::FromStr;

use jieba_rs::Jieba;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use super::traits::Segmenter;
use crate::error::SimilarityError;

/// Dictionary + HMM segmentation via jieba-rs.
///
/// Spaces between words come back from jieba as their own tokens; those are
/// dropped so the token sequence only carries words and punctuation.
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    /// Load jieba with its bundled dictionary.
    pub fn new() -> Self {
        debug!("Loading jieba default dictionary");
        Self {
            jieba: Jieba::new(),
        }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, true)
            .into_iter()
            .filter(|token| !token.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Split on Unicode whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}

/// UAX #29 word boundaries. Punctuation stays as separate tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWordSegmenter;

impl Segmenter for UnicodeWordSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|token| !token.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Which segmenter to build, selectable from config or the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmenterKind {
    #[default]
    Jieba,
    Whitespace,
    Unicode,
}

impl SegmenterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmenterKind::Jieba => "jieba",
            SegmenterKind::Whitespace => "whitespace",
            SegmenterKind::Unicode => "unicode",
        }
    }

    /// Construct the segmenter. Jieba loads its dictionary here, so build
    /// once and reuse.
    pub fn build(&self) -> Box<dyn Segmenter + Send + Sync> {
        match self {
            SegmenterKind::Jieba => Box::new(JiebaSegmenter::new()),
            SegmenterKind::Whitespace => Box::new(WhitespaceSegmenter),
            SegmenterKind::Unicode => Box::new(UnicodeWordSegmenter),
        }
    }
}

impl FromStr for SegmenterKind {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jieba" => Ok(SegmenterKind::Jieba),
            "whitespace" => Ok(SegmenterKind::Whitespace),
            "unicode" => Ok(SegmenterKind::Unicode),
            _ => Err(SimilarityError::UnknownSegmenter(s.to_string())),
        }
    }
}

impl fmt::Display for SegmenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
