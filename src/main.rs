// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use srtran::app_config::RunConfig;
use srtran::language_utils;
use srtran::providers::google::GoogleTranslate;
use srtran::subtitle_processor::{parse_blocks, serialize_blocks};
use srtran::translation::BlockDispatcher;

/// srtran - translate SRT subtitle files
///
/// Splits an SRT file into caption blocks, translates each block's text
/// through Google Translate with a bounded pool of parallel workers, and
/// writes the result with timing and block structure intact.
#[derive(Parser, Debug)]
#[command(name = "srtran")]
#[command(version)]
#[command(about = "Parallel SRT subtitle translator")]
#[command(long_about = "srtran splits an SRT file into caption blocks and translates each block's
text in parallel, preserving index lines, timing lines, and block order.
A block that fails to translate keeps its original text; the run goes on.

EXAMPLES:
    srtran input.srt output.srt                    # Indonesian -> Japanese (defaults)
    srtran --src id --dest en input.srt out.srt    # Explicit language pair
    srtran -w 12 -d 0.2 input.srt out.srt          # More workers, shorter delay
    srtran --list-langs                            # Show language codes")]
struct CommandLineOptions {
    /// Input subtitle file (SRT)
    #[arg(value_name = "INPUT_FILE", required_unless_present = "list_langs")]
    input_file: Option<PathBuf>,

    /// Output subtitle file
    #[arg(value_name = "OUTPUT_FILE", required_unless_present = "list_langs")]
    output_file: Option<PathBuf>,

    /// Source language code (ISO 639-1)
    #[arg(long = "src", visible_alias = "source", value_name = "CODE", default_value = "id")]
    source_language: String,

    /// Target language code (ISO 639-1)
    #[arg(long = "dest", visible_alias = "target", value_name = "CODE", default_value = "ja")]
    target_language: String,

    /// Number of parallel translation workers
    #[arg(short, long, default_value_t = 6)]
    workers: usize,

    /// Delay between requests per worker, in seconds
    #[arg(short, long, value_name = "SECONDS", default_value_t = 0.5)]
    delay: f64,

    /// List supported language codes and exit
    #[arg(long)]
    list_langs: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if cli.list_langs {
        print_language_table();
        return Ok(());
    }

    run_translate(cli).await
}

/// Print the static table backing --list-langs
fn print_language_table() {
    println!("{:<6} {}", "code", "language");
    for (code, name) in language_utils::SUPPORTED_LANGUAGES {
        println!("{:<6} {}", code, name);
    }
}

async fn run_translate(options: CommandLineOptions) -> Result<()> {
    let input_file = options
        .input_file
        .ok_or_else(|| anyhow!("INPUT_FILE is required"))?;
    let output_file = options
        .output_file
        .ok_or_else(|| anyhow!("OUTPUT_FILE is required"))?;

    if !options.delay.is_finite() || options.delay < 0.0 {
        return Err(anyhow!("Delay must be a non-negative number of seconds"));
    }

    let config = RunConfig {
        source_language: options.source_language.to_lowercase(),
        target_language: options.target_language.to_lowercase(),
        workers: options.workers,
        delay: Duration::from_secs_f64(options.delay),
    };
    config
        .validate()
        .context("Configuration validation failed")?;

    // Input errors are fatal: no output is written
    let content = fs::read_to_string(&input_file)
        .with_context(|| format!("Failed to read input file: {}", input_file.display()))?;

    let blocks = parse_blocks(content.trim());
    info!(
        "Translating {} blocks {} -> {} with {} workers",
        blocks.len(),
        config.source_language,
        config.target_language,
        config.workers
    );

    let progress_bar = ProgressBar::new(blocks.len() as u64);
    let template_result = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} blocks ({percent}%) {msg}")
        .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress_bar.set_style(template_result.progress_chars("█▓▒░"));
    progress_bar.set_message("Translating");

    let provider = GoogleTranslate::new()
        .map_err(|e| anyhow!("Failed to build translation client: {}", e))?;
    let dispatcher = BlockDispatcher::new(provider, config);

    let pb = progress_bar.clone();
    let dispatch = dispatcher.translate_all(&blocks, move |completed, _total| {
        pb.set_position(completed as u64);
    });

    // The run either completes and writes, or reports failure and writes
    // nothing; an interrupt mid-run never leaves a partial output file.
    let translated = tokio::select! {
        result = dispatch => {
            match result {
                Ok(translated) => translated,
                Err(e) => {
                    progress_bar.abandon_with_message("failed");
                    return Err(e);
                }
            }
        }
        _ = tokio::signal::ctrl_c() => {
            progress_bar.abandon_with_message("interrupted");
            return Err(anyhow!("Interrupted, no output written"));
        }
    };
    progress_bar.finish_and_clear();

    let document = serialize_blocks(&translated);
    fs::write(&output_file, document)
        .with_context(|| format!("Failed to write output file: {}", output_file.display()))?;

    info!("Translation complete -> {}", output_file.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_should_be_well_formed() {
        CommandLineOptions::command().debug_assert();
    }

    #[test]
    fn test_cli_should_accept_long_and_alias_option_names() {
        let cli = CommandLineOptions::parse_from([
            "srtran", "--source", "id", "--target", "en", "-w", "3", "-d", "0.1", "in.srt",
            "out.srt",
        ]);
        assert_eq!(cli.source_language, "id");
        assert_eq!(cli.target_language, "en");
        assert_eq!(cli.workers, 3);
        assert_eq!(cli.delay, 0.1);
    }

    #[test]
    fn test_cli_should_default_to_id_ja_six_workers() {
        let cli = CommandLineOptions::parse_from(["srtran", "in.srt", "out.srt"]);
        assert_eq!(cli.source_language, "id");
        assert_eq!(cli.target_language, "ja");
        assert_eq!(cli.workers, 6);
        assert_eq!(cli.delay, 0.5);
    }

    #[test]
    fn test_cli_should_allow_list_langs_without_positionals() {
        let cli = CommandLineOptions::parse_from(["srtran", "--list-langs"]);
        assert!(cli.list_langs);
        assert!(cli.input_file.is_none());
    }
}
