// ABOUTME: CLI for cleaning HTML into plain text, Markdown, or chunked JSON.
// ABOUTME: Reads a file, stdin, or an http(s) URL and prints the cleaned output.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use sift_cleaner::{
    clamp_target_tokens, decode_html_bytes, render_text, CleanResult, Cleaner, CleaningStats,
    OutputFormat, DEFAULT_TARGET_TOKENS,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Exit code when the document had nothing worth keeping.
const EXIT_EMPTY: u8 = 2;

/// Clean HTML into readable text for people and language models.
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(about = "Strip noise from HTML and print clean text, Markdown, or chunked JSON", long_about = None)]
struct Args {
    /// HTML file path, http(s) URL, or "-" to read from stdin.
    target: String,

    /// Output format: text (default), markdown/md, json
    #[arg(short = 'f', long = "format", default_value = "text")]
    format: String,

    /// Target tokens per JSON chunk (clamped to 400..=2000)
    #[arg(long = "chunk-tokens", default_value_t = DEFAULT_TARGET_TOKENS)]
    chunk_tokens: usize,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print cleaning stats to stderr
    #[arg(long = "stats")]
    stats: bool,

    /// Output the extracted elements as JSON instead of rendered content
    #[arg(long = "elements")]
    elements: bool,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,

    /// Output compact JSON instead of pretty
    #[arg(long = "compact")]
    compact: bool,

    /// Log pipeline decisions to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<ExitCode> {
    let target_tokens = clamp_target_tokens(args.chunk_tokens);
    if target_tokens != args.chunk_tokens {
        debug!(
            requested = args.chunk_tokens,
            used = target_tokens,
            "clamped chunk target"
        );
    }

    let cleaner = Cleaner::builder()
        .format(OutputFormat::from(args.format.as_str()))
        .target_tokens(target_tokens)
        .build();

    let start = Instant::now();
    let html = load_html(&args.target)?;
    let result = cleaner.clean(&html)?;
    let elapsed = start.elapsed();

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    if result.is_empty() {
        eprintln!("no meaningful content found");
        return Ok(ExitCode::from(EXIT_EMPTY));
    }

    if args.stats {
        print_stats(&result.stats);
    }

    let output = format_output(&cleaner, &result, args)?;
    match &args.output {
        Some(path) => fs::write(path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", output),
    }

    Ok(ExitCode::SUCCESS)
}

/// Pick what to print: the element list, or the rendered content.
fn format_output(cleaner: &Cleaner, result: &CleanResult, args: &Args) -> Result<String> {
    if args.elements {
        return Ok(if args.compact {
            serde_json::to_string(&result.elements)?
        } else {
            serde_json::to_string_pretty(&result.elements)?
        });
    }

    if args.compact && result.format == OutputFormat::Json {
        let envelope = cleaner.to_json(&render_text(&result.elements));
        return Ok(serde_json::to_string(&envelope)?);
    }

    Ok(result.content.clone())
}

fn print_stats(stats: &CleaningStats) {
    let mut err = io::stderr();
    let _ = writeln!(err, "original:  {} chars", stats.original_length);
    let _ = writeln!(
        err,
        "cleaned:   {} chars ({}% smaller)",
        stats.cleaned_length, stats.reduction_percent
    );
    let _ = writeln!(err, "words:     {}", stats.word_count);
    let _ = writeln!(err, "tokens:    ~{}", stats.estimated_tokens);
    let _ = writeln!(err, "chunks:    {}", stats.chunk_count);
}

fn load_html(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(decode_html_bytes(&buf, None));
    }

    if let Some(url) = http_url(target) {
        debug!(%url, "fetching");
        let resp = reqwest::blocking::get(url)?.error_for_status()?;
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = resp.bytes()?;
        return Ok(decode_html_bytes(&bytes, content_type.as_deref()));
    }

    if target.contains("://") {
        bail!("unsupported URL scheme: {}", target);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    let bytes = fs::read(&path).with_context(|| format!("failed to read {}", target))?;
    Ok(decode_html_bytes(&bytes, None))
}

fn http_url(target: &str) -> Option<Url> {
    Url::parse(target)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}
