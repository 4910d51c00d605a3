//! ScrubClaw - Multimodal PII Redaction Engine
//!
//! Command-line front end for the redaction engine: redact text from a
//! file, an argument, or stdin; map a redacted transcript onto audio
//! time ranges; inspect configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use scrubclaw::{
    align::CrossModalAligner,
    config::ScrubClawConfig,
    engine::Engine,
    media::{PrivacyReport, Word},
    PrivacyLevel, RedactionMode,
};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scrubclaw")]
#[command(author = "A3S Lab Team")]
#[command(version)]
#[command(about = "Multimodal PII Redaction Engine")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SCRUBCLAW_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Redact PII from text
    Redact {
        /// Redaction mode
        #[arg(long, value_enum)]
        mode: Option<RedactionMode>,

        /// Privacy level
        #[arg(long, value_enum)]
        level: Option<PrivacyLevel>,

        /// Input file; stdin is read when neither this nor TEXT is given
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the JSON privacy report to stderr
        #[arg(long)]
        report: bool,

        /// Literal text to redact
        text: Option<String>,
    },

    /// Map a redacted transcript onto audio time ranges
    Align {
        /// Original transcript file
        #[arg(long)]
        transcript: PathBuf,

        /// Redacted transcript file
        #[arg(long)]
        redacted: PathBuf,

        /// Word timings as a JSON array
        #[arg(long)]
        words: PathBuf,

        /// Gap-merge threshold in seconds
        #[arg(long)]
        gap: Option<f64>,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("scrubclaw={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = if let Some(config_path) = cli.config {
        let content = std::fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        ScrubClawConfig::default()
    };

    match cli.command {
        Commands::Redact {
            mode,
            level,
            input,
            output,
            report,
            text,
        } => {
            run_redact(config, mode, level, input, output, report, text)?;
        }
        Commands::Align {
            transcript,
            redacted,
            words,
            gap,
        } => {
            run_align(config, transcript, redacted, words, gap)?;
        }
        Commands::Config { default } => {
            show_config(if default { None } else { Some(&config) })?;
        }
    }

    Ok(())
}

fn run_redact(
    config: ScrubClawConfig,
    mode: Option<RedactionMode>,
    level: Option<PrivacyLevel>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    report: bool,
    text: Option<String>,
) -> Result<()> {
    let mode = mode.unwrap_or(config.redaction.mode);
    let level = level.unwrap_or(config.redaction.level);

    let text = match (text, input) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let engine = Engine::new(config)?;
    let redaction = engine.redact_with(&text, mode, level)?;

    if report {
        let report = PrivacyReport::for_text(&redaction, mode, level);
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    }

    match output {
        Some(path) => std::fs::write(path, redaction.text)?,
        None => println!("{}", redaction.text),
    }

    Ok(())
}

fn run_align(
    config: ScrubClawConfig,
    transcript: PathBuf,
    redacted: PathBuf,
    words: PathBuf,
    gap: Option<f64>,
) -> Result<()> {
    let transcript = std::fs::read_to_string(transcript)?;
    let redacted = std::fs::read_to_string(redacted)?;
    let words: Vec<Word> = serde_json::from_str(&std::fs::read_to_string(words)?)?;

    let gap = gap.unwrap_or(config.alignment.gap_merge_secs);
    let ranges = CrossModalAligner::new(gap).align(&transcript, &redacted, &words);

    println!("{}", serde_json::to_string_pretty(&ranges)?);
    Ok(())
}

fn show_config(config: Option<&ScrubClawConfig>) -> Result<()> {
    let config = config.cloned().unwrap_or_default();
    let toml = toml::to_string_pretty(&config)?;
    println!("{}", toml);
    Ok(())
}
