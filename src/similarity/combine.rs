// Combined similarity score and its categorical label.
//
// The three component scores are blended with a fixed weighted sum
// (default 30% Jaccard, 40% cosine, 30% Levenshtein) and the result is
// binned into four labels by descending thresholds (default 0.8 / 0.5 /
// 0.25). Both tunables are validated when constructed; a bad config is
// rejected instead of being silently renormalized.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimilarityError};

/// Allowed drift from 1.0 when summing weights.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights for the three component scores. Non-negative, summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CombinationWeights {
    jaccard: f64,
    cosine: f64,
    levenshtein: f64,
}

impl Default for CombinationWeights {
    fn default() -> Self {
        Self {
            jaccard: 0.3,
            cosine: 0.4,
            levenshtein: 0.3,
        }
    }
}

impl CombinationWeights {
    pub fn new(jaccard: f64, cosine: f64, levenshtein: f64) -> Result<Self> {
        let invalid = |reason| SimilarityError::InvalidWeights {
            jaccard,
            cosine,
            levenshtein,
            reason,
        };

        let all = [jaccard, cosine, levenshtein];
        if all.iter().any(|w| !w.is_finite()) {
            return Err(invalid("weights must be finite"));
        }
        if all.iter().any(|w| *w < 0.0) {
            return Err(invalid("weights must be non-negative"));
        }
        if (all.iter().sum::<f64>() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(invalid("weights must sum to 1.0"));
        }

        Ok(Self {
            jaccard,
            cosine,
            levenshtein,
        })
    }

    /// Parse `"jaccard,cosine,levenshtein"`, e.g. `"0.3,0.4,0.3"`.
    pub fn parse(s: &str) -> Result<Self> {
        let [j, c, l] = parse_triple(s)?;
        Self::new(j, c, l)
    }

    pub fn jaccard(&self) -> f64 {
        self.jaccard
    }

    pub fn cosine(&self) -> f64 {
        self.cosine
    }

    pub fn levenshtein(&self) -> f64 {
        self.levenshtein
    }
}

/// Lower bounds of the high / medium / low bins. Anything below `low` is
/// "very low". Each in (0, 1], strictly decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelThresholds {
    high: f64,
    medium: f64,
    low: f64,
}

impl Default for LabelThresholds {
    fn default() -> Self {
        Self {
            high: 0.8,
            medium: 0.5,
            low: 0.25,
        }
    }
}

impl LabelThresholds {
    pub fn new(high: f64, medium: f64, low: f64) -> Result<Self> {
        let invalid = |reason| SimilarityError::InvalidThresholds {
            high,
            medium,
            low,
            reason,
        };

        // NaN fails the range check as well
        let in_range = |t: f64| t > 0.0 && t <= 1.0;
        if !(in_range(high) && in_range(medium) && in_range(low)) {
            return Err(invalid("thresholds must lie in (0, 1]"));
        }
        if !(high > medium && medium > low) {
            return Err(invalid("thresholds must be strictly decreasing"));
        }

        Ok(Self { high, medium, low })
    }

    /// Parse `"high,medium,low"`, e.g. `"0.8,0.5,0.25"`.
    pub fn parse(s: &str) -> Result<Self> {
        let [h, m, l] = parse_triple(s)?;
        Self::new(h, m, l)
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn medium(&self) -> f64 {
        self.medium
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    /// Map a score to its label, highest bin checked first.
    pub fn classify(&self, score: f64) -> SimilarityLabel {
        match score {
            s if s >= self.high => SimilarityLabel::High,
            s if s >= self.medium => SimilarityLabel::Medium,
            s if s >= self.low => SimilarityLabel::Low,
            _ => SimilarityLabel::VeryLow,
        }
    }
}

/// Categorical similarity bins, ordered from least to most similar.
///
/// Serialized as the same text `as_str` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SimilarityLabel {
    #[serde(rename = "very low similarity")]
    VeryLow,
    #[serde(rename = "low similarity")]
    Low,
    #[serde(rename = "medium similarity")]
    Medium,
    #[serde(rename = "high similarity")]
    High,
}

impl SimilarityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityLabel::VeryLow => "very low similarity",
            SimilarityLabel::Low => "low similarity",
            SimilarityLabel::Medium => "medium similarity",
            SimilarityLabel::High => "high similarity",
        }
    }

    /// Label text for display in the given locale.
    pub fn localized(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.as_str(),
            Locale::Zh => match self {
                SimilarityLabel::VeryLow => "非常低相似度",
                SimilarityLabel::Low => "低相似度",
                SimilarityLabel::Medium => "中等相似度",
                SimilarityLabel::High => "高相似度",
            },
        }
    }
}

impl fmt::Display for SimilarityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display language for labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl FromStr for Locale {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            other => Err(SimilarityError::InvalidConfig {
                value: other.to_string(),
                reason: "locale must be en or zh".to_string(),
            }),
        }
    }
}

/// Blend the component scores and label the result.
///
/// Returns a score in [0, 1] and its label. The score is clamped to absorb
/// floating-point overshoot when every component is 1.0.
pub fn combine(
    jaccard: f64,
    cosine: f64,
    levenshtein: f64,
    weights: &CombinationWeights,
    thresholds: &LabelThresholds,
) -> (f64, SimilarityLabel) {
    let score = jaccard * weights.jaccard
        + cosine * weights.cosine
        + levenshtein * weights.levenshtein;

    let score = score.clamp(0.0, 1.0);
    (score, thresholds.classify(score))
}

/// Parse three comma-separated floats.
pub fn parse_triple(s: &str) -> Result<[f64; 3]> {
    let invalid = |reason: String| SimilarityError::InvalidConfig {
        value: s.to_string(),
        reason,
    };

    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(invalid(format!(
            "expected 3 comma-separated numbers, found {}",
            parts.len()
        )));
    }

    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| invalid(format!("{part:?} is not a number: {e}")))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        let d = CombinationWeights::default();
        assert!(CombinationWeights::new(d.jaccard(), d.cosine(), d.levenshtein()).is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let err = CombinationWeights::new(0.3, 0.3, 0.3).unwrap_err();
        assert!(matches!(err, SimilarityError::InvalidWeights { .. }));
    }

    #[test]
    fn test_weights_reject_negative() {
        let err = CombinationWeights::new(-0.2, 0.6, 0.6).unwrap_err();
        assert!(matches!(err, SimilarityError::InvalidWeights { .. }));
    }

    #[test]
    fn test_weights_reject_nan() {
        assert!(CombinationWeights::new(f64::NAN, 0.5, 0.5).is_err());
    }

    #[test]
    fn test_weights_tolerate_rounding() {
        assert!(CombinationWeights::new(0.1, 0.2, 0.7000000001).is_ok());
        assert!(CombinationWeights::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0).is_ok());
    }

    #[test]
    fn test_thresholds_must_decrease() {
        let err = LabelThresholds::new(0.5, 0.8, 0.25).unwrap_err();
        assert!(matches!(err, SimilarityError::InvalidThresholds { .. }));
        assert!(LabelThresholds::new(0.5, 0.5, 0.25).is_err());
    }

    #[test]
    fn test_thresholds_range() {
        assert!(LabelThresholds::new(1.0, 0.5, 0.1).is_ok());
        assert!(LabelThresholds::new(1.2, 0.5, 0.1).is_err());
        assert!(LabelThresholds::new(0.8, 0.5, 0.0).is_err());
        assert!(LabelThresholds::new(0.8, f64::NAN, 0.1).is_err());
    }

    #[test]
    fn test_classify_boundaries() {
        let t = LabelThresholds::default();
        assert_eq!(t.classify(1.0), SimilarityLabel::High);
        assert_eq!(t.classify(0.8), SimilarityLabel::High);
        assert_eq!(t.classify(0.7999), SimilarityLabel::Medium);
        assert_eq!(t.classify(0.5), SimilarityLabel::Medium);
        assert_eq!(t.classify(0.4999), SimilarityLabel::Low);
        assert_eq!(t.classify(0.25), SimilarityLabel::Low);
        assert_eq!(t.classify(0.2499), SimilarityLabel::VeryLow);
        assert_eq!(t.classify(0.0), SimilarityLabel::VeryLow);
    }

    #[test]
    fn test_combine_weighted_sum() {
        let (score, label) = combine(
            0.5,
            0.5,
            1.0,
            &CombinationWeights::default(),
            &LabelThresholds::default(),
        );
        // 0.15 + 0.2 + 0.3
        assert!((score - 0.65).abs() < 1e-12, "got {score}");
        assert_eq!(label, SimilarityLabel::Medium);
    }

    #[test]
    fn test_combine_all_ones_is_exactly_one() {
        let w = CombinationWeights::new(0.1, 0.2, 0.7).unwrap();
        let (score, label) = combine(1.0, 1.0, 1.0, &w, &LabelThresholds::default());
        assert!(score <= 1.0);
        assert!((score - 1.0).abs() < 1e-12);
        assert_eq!(label, SimilarityLabel::High);
    }

    #[test]
    fn test_labels_ordered() {
        assert!(SimilarityLabel::VeryLow < SimilarityLabel::Low);
        assert!(SimilarityLabel::Low < SimilarityLabel::Medium);
        assert!(SimilarityLabel::Medium < SimilarityLabel::High);
    }

    #[test]
    fn test_localized_labels() {
        assert_eq!(SimilarityLabel::High.localized(Locale::Zh), "高相似度");
        assert_eq!(SimilarityLabel::VeryLow.localized(Locale::Zh), "非常低相似度");
        assert_eq!(SimilarityLabel::Medium.localized(Locale::En), "medium similarity");
        assert_eq!("ZH".parse::<Locale>().unwrap(), Locale::Zh);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_labels_serialize_as_display_text() {
        for label in [
            SimilarityLabel::VeryLow,
            SimilarityLabel::Low,
            SimilarityLabel::Medium,
            SimilarityLabel::High,
        ] {
            let json = serde_json::to_value(label).unwrap();
            assert_eq!(json, label.as_str());
            let back: SimilarityLabel = serde_json::from_value(json).unwrap();
            assert_eq!(back, label);
        }
    }

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple(" 0.2, 0.5 ,0.3").unwrap(), [0.2, 0.5, 0.3]);
        assert!(parse_triple("0.2,0.5").is_err());
        assert!(parse_triple("0.2,abc,0.3").is_err());
        assert!(CombinationWeights::parse("0.2,0.5,0.3").is_ok());
        assert!(LabelThresholds::parse("0.9,0.6,0.3").is_ok());
        assert!(LabelThresholds::parse("0.3,0.6,0.9").is_err());
    }
}
