use anyhow::Context;
use clap::Parser;
use raw_text_extractor::config::MAX_INPUT_SIZE;
use raw_text_extractor::{run, ExtractorConfig};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Extract contacts, cards, times, hashtags and amounts from pasted text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Read lines from this file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output JSON file path
    #[arg(short, long, default_value = "output.json")]
    output: PathBuf,

    /// Ignore lines longer than this many characters
    #[arg(short, long, default_value_t = MAX_INPUT_SIZE)]
    max_line_length: usize,

    /// Skip the banner and do not echo the report
    #[arg(short, long)]
    quiet: bool,
}

fn print_banner() {
    let rule = "=".repeat(70);
    println!("{rule}");
    println!("REGEX-BASED RAW TEXT DATA EXTRACTION For School SYSTEM");
    println!("Paste raw text below. Type END to finish.");
    println!("{rule}");
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = ExtractorConfig::default().with_max_line_length(args.max_line_length);

    if !args.quiet {
        print_banner();
    }

    let report = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            run(BufReader::new(file), &config)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => run(io::stdin().lock(), &config).context("Failed to read standard input")?,
    };

    if !args.quiet {
        println!("\nEXTRACTION RESULT:\n");
        println!("{}", report.to_pretty_json()?);
    }

    report
        .write_to(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!(path = %args.output.display(), "report written");

    println!("\nResults saved to {}", args.output.display());
    Ok(())
}
