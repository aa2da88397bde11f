use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ipa_piglatin::{Analyzer, Config, TokenReport, WordReport};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ipa-piglatin", version, about = "Syllabify IPA words and render IPA Pig Latin")]
struct Args {
    /// Emit JSON (one object per line) instead of text
    #[arg(long, global = true)]
    json: bool,

    /// TOML config file (suffix, break marker, custom inventory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split words into syllables and onset/nucleus/coda
    Segment {
        /// Words to analyze; read one per line from stdin when empty
        words: Vec<String>,
    },
    /// Show phonetic units and their categories
    Tokenize { words: Vec<String> },
    /// Print the Pig Latin form of each word
    PigLatin { words: Vec<String> },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn read_words(words: Vec<String>) -> Result<Vec<String>> {
    if !words.is_empty() {
        return Ok(words);
    }
    let mut out = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let word = line.trim();
        if !word.is_empty() {
            out.push(word.to_string());
        }
    }
    Ok(out)
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_toml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    let analyzer = Analyzer::new(config).context("building analyzer")?;
    tracing::debug!(config = ?analyzer.config(), "analyzer ready");

    let (words, command) = match args.command {
        Command::Segment { words } => (words, Mode::Segment),
        Command::Tokenize { words } => (words, Mode::Tokenize),
        Command::PigLatin { words } => (words, Mode::PigLatin),
    };
    let words = read_words(words)?;
    tracing::debug!(count = words.len(), json = args.json, "analyzing words");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;
    for word in &words {
        let rendered = match command {
            Mode::Tokenize => TokenReport::analyze(&analyzer, word)
                .map_err(|e| e.to_string())
                .and_then(|r| render(&r, args.json, TokenReport::render_text)),
            Mode::Segment => WordReport::analyze(&analyzer, word)
                .map_err(|e| e.to_string())
                .and_then(|r| render(&r, args.json, WordReport::render_text)),
            Mode::PigLatin => WordReport::analyze(&analyzer, word)
                .map_err(|e| e.to_string())
                .and_then(|r| render(&r, args.json, |r| r.pig_latin.clone())),
        };
        match rendered {
            Ok(text) => writeln!(out, "{}", text.trim_end())?,
            Err(e) => {
                failed = true;
                tracing::debug!(word = %word, error = %e, "analysis failed");
                eprintln!("{word}: {e}");
            }
        }
    }
    out.flush()?;

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[derive(Clone, Copy)]
enum Mode {
    Segment,
    Tokenize,
    PigLatin,
}

fn render<R: serde::Serialize>(
    report: &R,
    json: bool,
    text: impl Fn(&R) -> String,
) -> Result<String, String> {
    if json {
        serde_json::to_string(report).map_err(|e| e.to_string())
    } else {
        Ok(text(report))
    }
}
