use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::pipeline::SimilarityConfig;
use crate::similarity::combine::{CombinationWeights, LabelThresholds, Locale};
use crate::text::segmenter::SegmenterKind;
use crate::text::stopwords::StopWords;

/// Application configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every value
/// has a default, and CLI flags override whatever the environment set.
#[derive(Debug, Clone)]
pub struct Config {
    /// Combination weights (DOCSIM_WEIGHTS, e.g. "0.3,0.4,0.3")
    pub weights: CombinationWeights,
    /// Label thresholds (DOCSIM_THRESHOLDS, e.g. "0.8,0.5,0.25")
    pub thresholds: LabelThresholds,
    /// Word segmenter (DOCSIM_SEGMENTER: jieba, whitespace or unicode)
    pub segmenter: SegmenterKind,
    /// JSON stop-word file replacing the built-in lists (DOCSIM_STOP_WORDS)
    pub stop_words_path: Option<PathBuf>,
    /// Label language for terminal output (DOCSIM_LOCALE: en or zh)
    pub locale: Locale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: CombinationWeights::default(),
            thresholds: LabelThresholds::default(),
            segmenter: SegmenterKind::default(),
            stop_words_path: None,
            locale: Locale::default(),
        }
    }
}

/// Values given on the command line. `None` keeps the env/default value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub weights: Option<String>,
    pub thresholds: Option<String>,
    pub segmenter: Option<String>,
    pub stop_words_path: Option<PathBuf>,
    pub locale: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup. Empty values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self::default().with_overrides(&ConfigOverrides {
            weights: get("DOCSIM_WEIGHTS"),
            thresholds: get("DOCSIM_THRESHOLDS"),
            segmenter: get("DOCSIM_SEGMENTER"),
            stop_words_path: get("DOCSIM_STOP_WORDS").map(PathBuf::from),
            locale: get("DOCSIM_LOCALE"),
        })
    }

    /// Apply overrides on top of this config, validating each value.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self> {
        if let Some(raw) = &overrides.weights {
            self.weights = CombinationWeights::parse(raw)
                .with_context(|| format!("Invalid weights {raw:?}"))?;
        }
        if let Some(raw) = &overrides.thresholds {
            self.thresholds = LabelThresholds::parse(raw)
                .with_context(|| format!("Invalid thresholds {raw:?}"))?;
        }
        if let Some(raw) = &overrides.segmenter {
            self.segmenter = raw.parse()?;
        }
        if let Some(path) = &overrides.stop_words_path {
            self.stop_words_path = Some(path.clone());
        }
        if let Some(raw) = &overrides.locale {
            self.locale = raw.parse()?;
        }
        Ok(self)
    }

    /// Build the library config from this one plus the resolved stop words.
    pub fn similarity_config(&self, stop_words: StopWords) -> SimilarityConfig {
        SimilarityConfig {
            stop_words,
            weights: self.weights,
            thresholds: self.thresholds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.weights, CombinationWeights::default());
        assert_eq!(config.thresholds, LabelThresholds::default());
        assert_eq!(config.segmenter, SegmenterKind::Jieba);
        assert_eq!(config.locale, Locale::En);
        assert!(config.stop_words_path.is_none());
    }

    #[test]
    fn test_env_values_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("DOCSIM_WEIGHTS", "0.2,0.5,0.3"),
            ("DOCSIM_THRESHOLDS", "0.9,0.6,0.3"),
            ("DOCSIM_SEGMENTER", "whitespace"),
            ("DOCSIM_STOP_WORDS", "/tmp/stop.json"),
            ("DOCSIM_LOCALE", "zh"),
        ]))
        .unwrap();
        assert!((config.weights.cosine() - 0.5).abs() < 1e-12);
        assert!((config.thresholds.high() - 0.9).abs() < 1e-12);
        assert_eq!(config.segmenter, SegmenterKind::Whitespace);
        assert_eq!(config.stop_words_path, Some(PathBuf::from("/tmp/stop.json")));
        assert_eq!(config.locale, Locale::Zh);
    }

    #[test]
    fn test_blank_env_value_is_unset() {
        let config = Config::from_lookup(lookup(&[("DOCSIM_WEIGHTS", "  ")])).unwrap();
        assert_eq!(config.weights, CombinationWeights::default());
    }

    #[test]
    fn test_invalid_env_weights_rejected() {
        let err = Config::from_lookup(lookup(&[("DOCSIM_WEIGHTS", "0.5,0.5,0.5")])).unwrap_err();
        assert!(err.to_string().contains("Invalid weights"));
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::from_lookup(lookup(&[("DOCSIM_SEGMENTER", "unicode")]))
            .unwrap()
            .with_overrides(&ConfigOverrides {
                segmenter: Some("whitespace".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(config.segmenter, SegmenterKind::Whitespace);
    }

    #[test]
    fn test_invalid_threshold_override_rejected() {
        let base = Config::from_lookup(lookup(&[])).unwrap();
        let err = base
            .with_overrides(&ConfigOverrides {
                thresholds: Some("0.3,0.6,0.9".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("Invalid thresholds"));
    }

    #[test]
    fn test_similarity_config_copies_parsed_values() {
        let config = Config::from_lookup(lookup(&[
            ("DOCSIM_WEIGHTS", "0.2,0.5,0.3"),
            ("DOCSIM_THRESHOLDS", "0.9,0.6,0.3"),
        ]))
        .unwrap();
        let stop_words = StopWords::empty().with_language("en", ["the"]);
        let similarity = config.similarity_config(stop_words.clone());
        assert_eq!(similarity.weights, config.weights);
        assert_eq!(similarity.thresholds, config.thresholds);
        assert_eq!(similarity.stop_words, stop_words);
    }

    #[test]
    fn test_unknown_segmenter_rejected() {
        assert!(Config::from_lookup(lookup(&[("DOCSIM_SEGMENTER", "bpe")])).is_err());
    }
}
