use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wiktionary_declension::config::resolve_config;
use wiktionary_declension::extract::{extract_from_html, LookupRequest};
use wiktionary_declension::output::Results;
use wiktionary_declension::source::{DirectorySource, PageSource};
use wiktionary_declension::table::TableSignatures;
use wiktionary_declension::wordlist::{read_word_list, WordListDefaults};
use wiktionary_declension::ExtractionError;

#[derive(Parser)]
#[command(name = "wiktionary-declension")]
#[command(about = "Extract declension tables from saved Wiktionary pages into canonical case order")]
struct Args {
    /// Word list (`word[, class][, language][, other_][, gloss]` per line; .bz2 accepted)
    input: PathBuf,

    /// Output JSON file
    output: PathBuf,

    /// YAML config (default: declension.yaml or config/declension.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of saved pages (<title>.html or <title>.html.bz2)
    #[arg(short, long)]
    page_dir: Option<PathBuf>,

    /// Language used when a line does not name one
    #[arg(long)]
    language: Option<String>,

    /// Word class used when a line does not name one
    #[arg(long)]
    word_class: Option<String>,

    /// Use the other table family for every word, as if each line said `other_`
    #[arg(long)]
    other: bool,

    /// Limit number of words to process (for testing)
    #[arg(long)]
    limit: Option<usize>,

    /// Quiet mode - no progress or summary
    #[arg(short, long)]
    quiet: bool,

    /// Log every pipeline stage (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Default)]
struct Stats {
    words_processed: usize,
    words_written: usize,
    fetch_failed: usize,
    invalid_word_class: usize,
    language_not_found: usize,
    word_class_not_found: usize,
    table_not_found: usize,
    malformed_table: usize,
    elapsed: Duration,
}

impl Stats {
    fn record_failure(&mut self, err: &ExtractionError) {
        match err {
            ExtractionError::InvalidWordClass { .. } => self.invalid_word_class += 1,
            ExtractionError::LanguageNotFound { .. } => self.language_not_found += 1,
            ExtractionError::WordClassNotFound { .. } => self.word_class_not_found += 1,
            ExtractionError::TableNotFound { .. } => self.table_not_found += 1,
            ExtractionError::MalformedTableStructure { .. } => self.malformed_table += 1,
        }
    }
}

/// `--other` on the command line wins over a line that does not ask for it.
fn with_table_override(mut requests: Vec<LookupRequest>, other: bool) -> Vec<LookupRequest> {
    if other {
        for request in &mut requests {
            request.use_other_table = true;
        }
    }
    requests
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Process every word in order; one word's failure never stops the run.
fn run_words(
    requests: &[LookupRequest],
    source: &impl PageSource,
    signatures: &TableSignatures,
    pb: &ProgressBar,
) -> (Results, Stats) {
    let start_time = Instant::now();
    let mut stats = Stats::default();
    let mut results = Results::new();

    for request in requests {
        stats.words_processed += 1;
        pb.set_message(format!(
            "Words: {} | Written: {} | {}",
            stats.words_processed, stats.words_written, request.word
        ));

        let html = match source.fetch(&request.word) {
            Ok(html) => html,
            Err(err) => {
                stats.fetch_failed += 1;
                pb.suspend(|| warn!(word = %request.word, "{:#}", err));
                continue;
            }
        };

        match extract_from_html(&html, request, signatures) {
            Ok(record) => {
                results.insert(&request.word, record, request.gloss.as_deref());
                stats.words_written += 1;
            }
            Err(err) => {
                stats.record_failure(&err);
                pb.suspend(|| {
                    warn!(
                        word = %request.word,
                        language = %request.language,
                        word_class = %request.word_class,
                        kind = err.kind(),
                        "{}",
                        err
                    )
                });
            }
        }
        pb.tick();
    }

    stats.elapsed = start_time.elapsed();
    (results, stats)
}

fn print_stats(stats: &Stats) {
    println!();
    println!("============================================================");
    println!("Words processed: {}", stats.words_processed);
    println!("Words written: {}", stats.words_written);
    println!("------------------------------------------------------------");
    println!("Page not available: {}", stats.fetch_failed);
    println!("Invalid word class: {}", stats.invalid_word_class);
    println!("Language not found: {}", stats.language_not_found);
    println!("Word class not found: {}", stats.word_class_not_found);
    println!("Table not found: {}", stats.table_not_found);
    println!("Malformed table: {}", stats.malformed_table);
    println!("Time: {}m {}s", stats.elapsed.as_secs() / 60, stats.elapsed.as_secs() % 60);
    println!("============================================================");
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let (config, config_path) = resolve_config(args.config.as_ref())?;
    let defaults = WordListDefaults {
        word_class: args
            .word_class
            .clone()
            .unwrap_or_else(|| config.default_word_class.clone()),
        language: args
            .language
            .clone()
            .unwrap_or_else(|| config.default_language.clone()),
    };
    let page_dir = args.page_dir.clone().unwrap_or_else(|| config.page_dir.clone());

    let mut requests = with_table_override(read_word_list(&args.input, &defaults)?, args.other);
    if let Some(limit) = args.limit {
        requests.truncate(limit);
    }
    info!(words = requests.len(), page_dir = %page_dir.display(), "starting");

    if !args.quiet {
        println!("Word list: {}", args.input.display());
        println!("Output: {}", args.output.display());
        println!("Pages: {}", page_dir.display());
        if let Some(path) = &config_path {
            println!("Config: {}", path.display());
        }
        println!("Words: {}", requests.len());
        println!();
    }

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
        pb
    };

    let source = DirectorySource::new(page_dir);
    let (results, stats) = run_words(&requests, &source, &config.tables, &pb);
    pb.finish_and_clear();

    results.write_to(&args.output)?;

    if !args.quiet {
        print_stats(&stats);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requests() -> Vec<LookupRequest> {
        let mut pronoun = LookupRequest::new("minä", "Pronoun", "Finnish");
        pronoun.use_other_table = true;
        vec![LookupRequest::new("talo", "Noun", "Finnish"), pronoun]
    }

    #[test]
    fn other_flag_applies_to_every_word() {
        let requests = with_table_override(requests(), true);
        assert!(requests.iter().all(|r| r.use_other_table));
    }

    #[test]
    fn without_other_flag_lines_decide() {
        let requests = with_table_override(requests(), false);
        let flags: Vec<bool> = requests.iter().map(|r| r.use_other_table).collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn other_flag_parses() {
        let args = Args::parse_from(["wiktionary-declension", "words.txt", "out.json", "--other"]);
        assert!(args.other);
        let args = Args::parse_from(["wiktionary-declension", "words.txt", "out.json"]);
        assert!(!args.other);
    }
}
