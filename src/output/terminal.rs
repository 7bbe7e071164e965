// Colored terminal output for comparison reports.

use colored::Colorize;

use crate::pipeline::SimilarityReport;
use crate::similarity::combine::{Locale, SimilarityLabel};
use crate::text::stopwords::StopWords;

use super::preview;

/// Display a comparison report: label, combined score, then each component
/// to two decimals.
pub fn display_report(report: &SimilarityReport, names: [&str; 2], locale: Locale) {
    println!("\n{}", "=== Document Similarity ===".bold());
    println!("  A: {}", names[0].dimmed());
    println!("  B: {}", names[1].dimmed());
    println!();

    println!(
        "  {:<12} {}",
        "Label".dimmed(),
        colorize_label(report.label, locale)
    );
    println!(
        "  {:<12} {}  {}",
        "Combined".dimmed(),
        format!("{:.2}", report.combined).bold(),
        score_bar(report.combined)
    );
    println!("  {:<12} {:.2}", "Jaccard".dimmed(), report.jaccard);
    println!("  {:<12} {:.2}", "Cosine".dimmed(), report.cosine);
    println!("  {:<12} {:.2}", "Levenshtein".dimmed(), report.levenshtein);
    println!(
        "  {:<12} {} / {}",
        "Tokens".dimmed(),
        report.token_counts.0,
        report.token_counts.1
    );

    if report.degenerate {
        println!(
            "\n  {} both documents are empty after normalization",
            "Note:".yellow()
        );
    }
    println!();
}

/// Show the first few characters of each document.
pub fn display_previews(texts: [&str; 2]) {
    for (tag, text) in ["A", "B"].iter().zip(texts) {
        println!("  {tag}> {}", preview(text, 60).dimmed());
    }
}

/// List the configured stop-word languages.
pub fn display_stop_words(stop_words: &StopWords) {
    if stop_words.is_empty() {
        println!("No stop words configured.");
        return;
    }
    println!("\n{}", "=== Stop Words ===".bold());
    for (tag, count) in stop_words.languages() {
        println!("  {:<6} {count} words", tag.bold());
    }
    println!();
}

fn score_bar(score: f64) -> String {
    let width: usize = 20;
    let filled = (score * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

fn colorize_label(label: SimilarityLabel, locale: Locale) -> colored::ColoredString {
    let text = label.localized(locale);
    match label {
        SimilarityLabel::High => text.green().bold(),
        SimilarityLabel::Medium => text.bright_green(),
        SimilarityLabel::Low => text.yellow(),
        SimilarityLabel::VeryLow => text.red(),
    }
}
