use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use docsim::config::{Config, ConfigOverrides};
use docsim::pipeline::{Comparator, SimilarityReport};

/// docsim: how similar are two documents?
///
/// Blends Jaccard, term-frequency cosine and Levenshtein similarity into one
/// score and labels it high / medium / low / very low.
#[derive(Parser)]
#[command(name = "docsim", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two text files
    Compare {
        file_a: PathBuf,
        file_b: PathBuf,

        #[command(flatten)]
        scoring: ScoringArgs,
    },

    /// Compare two strings given on the command line
    Text {
        text_a: String,
        text_b: String,

        #[command(flatten)]
        scoring: ScoringArgs,
    },

    /// List the configured stop-word languages
    StopWords {
        /// JSON stop-word file to inspect instead of the built-in lists
        #[arg(long)]
        stop_words: Option<PathBuf>,
    },
}

#[derive(Args)]
struct ScoringArgs {
    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Combination weights as jaccard,cosine,levenshtein (default: 0.3,0.4,0.3)
    #[arg(long)]
    weights: Option<String>,

    /// Label thresholds as high,medium,low (default: 0.8,0.5,0.25)
    #[arg(long)]
    thresholds: Option<String>,

    /// Word segmenter: jieba, whitespace or unicode (default: jieba)
    #[arg(long)]
    segmenter: Option<String>,

    /// JSON stop-word file ({"lang": ["word", ...]}) replacing the built-in lists
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// Label language: en or zh (default: en)
    #[arg(long)]
    locale: Option<String>,

    /// Compute the three measures on separate threads
    #[arg(long)]
    parallel: bool,
}

impl ScoringArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            weights: self.weights.clone(),
            thresholds: self.thresholds.clone(),
            segmenter: self.segmenter.clone(),
            stop_words_path: self.stop_words.clone(),
            locale: self.locale.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docsim=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            file_a,
            file_b,
            scoring,
        } => {
            let (text_a, text_b) = docsim::input::read_pair(&file_a, &file_b).await?;
            let names = [file_a.display().to_string(), file_b.display().to_string()];
            run_comparison(text_a, text_b, names, &scoring).await?;
        }

        Commands::Text {
            text_a,
            text_b,
            scoring,
        } => {
            let names = [
                docsim::output::preview(&text_a, 40),
                docsim::output::preview(&text_b, 40),
            ];
            run_comparison(text_a, text_b, names, &scoring).await?;
        }

        Commands::StopWords { stop_words } => {
            let config = Config::load()?.with_overrides(&ConfigOverrides {
                stop_words_path: stop_words,
                ..Default::default()
            })?;
            let stop_words =
                docsim::input::resolve_stop_words(config.stop_words_path.as_deref()).await?;
            docsim::output::terminal::display_stop_words(&stop_words);
        }
    }

    Ok(())
}

/// Resolve config, score the pair off the async runtime, and print the result.
async fn run_comparison(
    text_a: String,
    text_b: String,
    names: [String; 2],
    scoring: &ScoringArgs,
) -> Result<()> {
    let config = Config::load()?.with_overrides(&scoring.overrides())?;
    let stop_words = docsim::input::resolve_stop_words(config.stop_words_path.as_deref()).await?;

    info!(
        segmenter = %config.segmenter,
        weights = ?config.weights,
        thresholds = ?config.thresholds,
        "Comparing documents"
    );

    let similarity_config = config.similarity_config(stop_words);
    let segmenter = config.segmenter;
    let parallel = scoring.parallel;

    // Segmenter construction (jieba's dictionary) and the quadratic edit
    // distance are CPU-bound, so keep them off the runtime threads.
    let (report, text_a, text_b) = tokio::task::spawn_blocking(move || {
        let comparator = Comparator::new(similarity_config, segmenter.build());
        let report: SimilarityReport = if parallel {
            comparator.compare_parallel(&text_a, &text_b)
        } else {
            comparator.compare(&text_a, &text_b)
        };
        (report, text_a, text_b)
    })
    .await
    .context("spawn_blocking panicked")?;

    let names = [names[0].as_str(), names[1].as_str()];
    if scoring.json {
        println!("{}", docsim::output::to_json(&report, names)?);
    } else {
        docsim::output::terminal::display_report(&report, names, config.locale);
        docsim::output::terminal::display_previews([text_a.as_str(), text_b.as_str()]);
    }

    Ok(())
}
