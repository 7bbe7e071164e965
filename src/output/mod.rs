// Output formatting: terminal display and JSON.

pub mod terminal;

use anyhow::Result;
use serde::Serialize;

use crate::pipeline::SimilarityReport;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Whitespace runs (including line breaks) collapse to single spaces first so
/// a document preview fits on one line. Respects UTF-8 character boundaries.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let truncated: String = flat.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Report plus the document names, as emitted by `--json`.
#[derive(Serialize)]
struct JsonReport<'a> {
    documents: [&'a str; 2],
    #[serde(flatten)]
    report: &'a SimilarityReport,
}

/// Pretty-printed JSON for a comparison.
pub fn to_json(report: &SimilarityReport, names: [&str; 2]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport {
        documents: names,
        report,
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::combine::SimilarityLabel;

    #[test]
    fn test_preview_short_text_untouched() {
        assert_eq!(preview("hello world", 20), "hello world");
    }

    #[test]
    fn test_preview_flattens_and_truncates() {
        assert_eq!(preview("line one\n\nline   two", 12), "line one lin...");
    }

    #[test]
    fn test_preview_multibyte() {
        assert_eq!(preview("今天天气很好", 2), "今天...");
    }

    #[test]
    fn test_json_shape() {
        let report = SimilarityReport {
            combined: 0.5,
            jaccard: 0.25,
            cosine: 0.5,
            levenshtein: 0.75,
            label: SimilarityLabel::Medium,
            degenerate: false,
            token_counts: (3, 4),
        };
        let json = to_json(&report, ["a.txt", "b.txt"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["documents"][1], "b.txt");
        assert_eq!(value["label"], "medium similarity");
        assert_eq!(value["combined"], 0.5);
        assert_eq!(value["token_counts"][0], 3);
    }
}
