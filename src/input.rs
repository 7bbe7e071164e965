// Document acquisition: reading the two documents and optional stop-word
// files from disk. Kept out of the pipeline so the scoring core never
// touches the filesystem.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::text::stopwords::StopWords;

/// Read a UTF-8 document from disk.
pub async fn read_document(path: &Path) -> Result<String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read document {}", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "Read document");
    Ok(text)
}

/// Read both documents concurrently.
pub async fn read_pair(path_a: &Path, path_b: &Path) -> Result<(String, String)> {
    tokio::try_join!(read_document(path_a), read_document(path_b))
}

/// Load a `{"tag": ["word", ...]}` stop-word file.
pub async fn read_stop_words(path: &Path) -> Result<StopWords> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read stop-word file {}", path.display()))?;
    let stop_words = StopWords::from_json(&json)
        .with_context(|| format!("Invalid stop-word file {}", path.display()))?;
    debug!(path = %path.display(), languages = ?stop_words.languages(), "Loaded stop words");
    Ok(stop_words)
}

/// Resolve the configured stop words: the file if one is given, otherwise
/// the built-in lists.
pub async fn resolve_stop_words(path: Option<&Path>) -> Result<StopWords> {
    match path {
        Some(path) => read_stop_words(path).await,
        None => Ok(StopWords::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("docsim-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn test_read_pair() {
        let a = temp_path("a.txt");
        let b = temp_path("b.txt");
        tokio::fs::write(&a, "first document").await.unwrap();
        tokio::fs::write(&b, "第二个文档").await.unwrap();

        let (text_a, text_b) = read_pair(&a, &b).await.unwrap();
        assert_eq!(text_a, "first document");
        assert_eq!(text_b, "第二个文档");

        let _ = tokio::fs::remove_file(&a).await;
        let _ = tokio::fs::remove_file(&b).await;
    }

    #[tokio::test]
    async fn test_missing_document_names_path() {
        let missing = temp_path("does-not-exist.txt");
        let err = read_document(&missing).await.unwrap_err();
        assert!(err.to_string().contains("does-not-exist.txt"));
    }

    #[tokio::test]
    async fn test_stop_word_file() {
        let path = temp_path("stop.json");
        tokio::fs::write(&path, r#"{"en": ["foo", "bar"]}"#).await.unwrap();

        let sw = resolve_stop_words(Some(&path)).await.unwrap();
        assert!(sw.contains("foo"));
        assert!(!sw.contains("的"));

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_builtin_when_no_file() {
        let sw = resolve_stop_words(None).await.unwrap();
        assert!(sw.contains("的"));
    }
}
