// Stop-word configuration: an immutable language tag -> word set mapping.
//
// The normalizer drops any whitespace-delimited token found here. The
// built-in set carries the Chinese function words and particles used for
// mixed Chinese/English documents, plus the English list from the
// `stop-words` crate. Callers can inject their own sets (e.g. loaded from
// JSON) instead of relying on the defaults.

use std::collections::{BTreeMap, HashMap, HashSet};

use stop_words::{get, LANGUAGE};

use crate::error::Result;

/// Language tag for the built-in Chinese list.
pub const CHINESE: &str = "zh";
/// Language tag for the built-in English list.
pub const ENGLISH: &str = "en";

/// Chinese function words, pronouns, conjunctions and modal particles.
const CHINESE_STOP_WORDS: &[&str] = &[
    "的", "了", "在", "是", "我", "有", "和", "就", "不", "人", "都", "一个", "上", "也", "很",
    "到", "说", "要", "以", "而", "于", "又", "及", "与", "把", "那", "你", "这", "他", "她",
    "它", "我们", "你们", "他们", "她们", "它们", "这儿", "那儿", "这里", "那里", "个", "么",
    "之", "其", "或", "被", "更", "最", "但", "并", "等", "那么", "因为", "所以", "如果", "虽然",
    "然而", "为了", "对于", "关于", "就是", "还有", "而且", "已经", "可以", "通过", "自己",
    "时候", "没有", "然后", "可能", "现在", "之前", "之后", "将", "则", "各", "每", "次", "再",
    "仍", "仍然", "并且", "不是", "因此", "为何", "什么", "哪", "哪里", "谁", "怎样", "如何",
    "为什么", "怎么", "呢", "啊", "哦", "嗯", "哎", "哈", "嗨", "喂", "啦", "吧", "吗", "哪儿",
    "呀", "呐", "啥", "吖", "哇", "哟", "啰", "咯", "哪个", "呵", "啐", "啧", "嘿", "唉", "咳",
    "唔", "哼",
];

/// Stop words grouped by language tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    by_language: HashMap<String, HashSet<String>>,
}

impl StopWords {
    /// A configuration with no stop words at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in Chinese and English lists.
    pub fn builtin() -> Self {
        let english: Vec<String> = get(LANGUAGE::English);
        Self::empty()
            .with_language(CHINESE, CHINESE_STOP_WORDS.iter().copied())
            .with_language(ENGLISH, english)
    }

    /// Add (or extend) the word set for a language tag.
    ///
    /// Words are lowercased and trimmed so they match normalized tokens.
    pub fn with_language<I, S>(mut self, tag: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.by_language.entry(tag.to_lowercase()).or_default();
        set.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        self
    }

    /// Keep only the given language tags.
    pub fn only(&self, tags: &[&str]) -> Self {
        let wanted: HashSet<String> = tags.iter().map(|t| t.to_lowercase()).collect();
        Self {
            by_language: self
                .by_language
                .iter()
                .filter(|(tag, _)| wanted.contains(*tag))
                .map(|(tag, words)| (tag.clone(), words.clone()))
                .collect(),
        }
    }

    /// Parse a `{"tag": ["word", ...]}` JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(raw
            .into_iter()
            .fold(Self::empty(), |acc, (tag, words)| acc.with_language(&tag, words)))
    }

    /// True if any configured language lists this word.
    pub fn contains(&self, word: &str) -> bool {
        self.by_language.values().any(|set| set.contains(word))
    }

    pub fn is_empty(&self) -> bool {
        self.by_language.values().all(|set| set.is_empty())
    }

    /// Language tags with their word counts, sorted by tag.
    pub fn languages(&self) -> BTreeMap<&str, usize> {
        self.by_language
            .iter()
            .map(|(tag, words)| (tag.as_str(), words.len()))
            .collect()
    }
}
