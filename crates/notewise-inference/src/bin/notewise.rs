//! Notewise derivation CLI
//!
//! Derive a summary, improved text, tags, or a title from note content.
//!
//! Usage:
//!   notewise summarize --file note.md
//!   echo "meeting notes..." | notewise tags --title "Standup"
//!   notewise health

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::env;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notewise_inference::logging;
use notewise_inference::{DerivationRequest, Deriver, Error, OpenAIBackend, Operation};

/// Exit status when the content is rejected.
const EXIT_INVALID_INPUT: i32 = 2;

/// Exit status when the health probe reports degradation.
const EXIT_DEGRADED: i32 = 3;

#[derive(Debug, Parser)]
#[command(name = "notewise")]
#[command(version, about = "Derive summaries, improved text, tags and titles from note content")]
#[command(after_help = ENV_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print compact JSON
    #[arg(short, long, global = true)]
    compact: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Summarize the content
    #[command(alias = "summary")]
    Summarize(Input),

    /// Improve grammar and clarity
    Improve(Input),

    /// Generate up to five tags
    #[command(alias = "generate-tags")]
    Tags {
        #[command(flatten)]
        input: Input,

        /// Note title, used as extra context
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Generate a title
    #[command(alias = "generate-title")]
    Title(Input),

    /// Check whether the provider is reachable
    Health,
}

#[derive(Debug, Args)]
struct Input {
    /// Read content from a file (default: stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl Commands {
    fn derivation(self) -> Option<(Operation, Input, Option<String>)> {
        match self {
            Commands::Summarize(input) => Some((Operation::Summarize, input, None)),
            Commands::Improve(input) => Some((Operation::Improve, input, None)),
            Commands::Tags { input, title } => Some((Operation::Tags, input, title)),
            Commands::Title(input) => Some((Operation::Title, input, None)),
            Commands::Health => None,
        }
    }
}

const ENV_HELP: &str = r#"Environment Variables:
  OPENAI_API_KEY      Provider credential (fallbacks are used without it)
  OPENAI_BASE_URL     API root (default: https://api.openai.com/v1)
  OPENAI_GEN_MODEL    Generation model (default: gpt-3.5-turbo)
  OPENAI_TEMPERATURE  Sampling temperature (default: 0.7)
  OPENAI_TIMEOUT      Request timeout in seconds (default: none)
  LOG_FORMAT          "json" or "text" (default: text)
  LOG_FILE            Also write logs to this file, rotated daily
  RUST_LOG            Log filter (default: notewise=info,notewise_inference=info)"#;

fn read_content(file: Option<&Path>) -> anyhow::Result<String> {
    let mut content = String::new();
    match file {
        Some(path) => {
            content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        None => {
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
        }
    }
    Ok(content)
}

fn print_json<T: serde::Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", rendered);
    Ok(())
}

/// Initialize tracing to stderr, optionally mirrored to a rotating file.
///
/// Environment variables:
///   LOG_FORMAT  - "json" or "text" (default: "text")
///   LOG_FILE    - path to log file (optional, enables file logging)
///   LOG_ANSI    - "true"/"false" override ANSI colors
///   RUST_LOG    - standard env filter
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_file = env::var("LOG_FILE").ok();
    let log_ansi = env::var("LOG_ANSI").ok().map(|v| v == "true" || v == "1");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "notewise=info,notewise_inference=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    if let Some(ref path) = log_file {
        let file_dir = Path::new(path)
            .parent()
            .unwrap_or(Path::new("."));
        let file_name = Path::new(path)
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("notewise.log");
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        if log_format == "json" {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init();
        } else {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(log_ansi.unwrap_or(false));
            registry.with(layer).init();
        }
        Some(guard)
    } else if log_format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
        None
    } else {
        let mut layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
        if let Some(ansi) = log_ansi {
            layer = layer.with_ansi(ansi);
        }
        registry.with(layer).init();
        None
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = init_tracing();

    let cli = Cli::parse();
    let backend = OpenAIBackend::from_env()?;
    let deriver = Deriver::new(backend);

    let Some((op, input, title)) = cli.command.derivation() else {
        let health = deriver.probe().await;
        print_json(&health, cli.compact)?;
        if !health.is_healthy() {
            std::process::exit(EXIT_DEGRADED);
        }
        return Ok(());
    };

    let content = read_content(input.file.as_deref())?;
    let request = match DerivationRequest::new(content) {
        Ok(request) => request,
        Err(e @ Error::InvalidInput(_)) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_INVALID_INPUT);
        }
        Err(e) => return Err(e.into()),
    };
    let request = match title {
        Some(title) => request.with_title(title),
        None => request,
    };

    let result = deriver.derive(op, &request).await;
    info!(
        { logging::OPERATION } = %op,
        { logging::ORIGIN } = %result.origin(),
        "Derivation finished"
    );
    print_json(&result, cli.compact)?;

    Ok(())
}
