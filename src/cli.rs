//! CLI module for hysteria-gen.
//!
//! Loads the optional profile, applies command-line overrides, initializes
//! tracing and runs a [`Generator`].

use std::io;
use std::path::PathBuf;

use clap::Parser;
use hysteria_config::{CliOverrides, Config, LoggingConfig, apply_overrides, load_config, validate_config};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::generator::{GenerateError, GenerationReport, Generator};
use crate::report::print_summary;

/// hysteria-gen CLI arguments.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hysteria-gen",
    version,
    about = "Generate Hysteria 2 server and client configs with every security feature enabled, no domain required",
    after_help = "Examples:\n  hysteria-gen\n  hysteria-gen -i 1.2.3.4 -p 443\n  hysteria-gen --output /etc/hysteria"
)]
pub struct GenerateArgs {
    /// Generator profile (json/jsonc/yaml/toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: CliOverrides,

    /// Exit with status 2 when any step fell back to placeholder values
    #[arg(long)]
    pub strict: bool,
}

/// Run the generator with the given arguments.
pub async fn run(args: GenerateArgs) -> Result<GenerationReport, GenerateError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    apply_overrides(&mut config, &args.overrides);
    validate_config(&config)?;

    init_tracing(&config.logging);
    debug!(?config, "effective configuration");

    print_banner();
    let report = Generator::new(config).run().await?;
    print_summary(&report);
    Ok(report)
}

fn print_banner() {
    let rule = "=".repeat(60);
    println!("{rule}");
    println!("  Hysteria 2 configuration generator");
    println!("  All security features enabled, no domain required");
    println!("{rule}");
    println!();
}

/// Initialize tracing subscriber with the given logging configuration.
///
/// Supports:
/// - `level`: Base log level (trace, debug, info, warn, error)
/// - `format`: Output format (json, pretty, compact). Default: pretty
/// - `output`: Output target (stdout, stderr). Default: stderr
/// - `filters`: Per-module log level overrides
fn init_tracing(config: &LoggingConfig) {
    let base_level = config
        .level
        .as_deref()
        .unwrap_or(hysteria_core::DEFAULT_LOG_LEVEL);
    let mut filter_str = base_level.to_string();

    for (module, level) in &config.filters {
        filter_str.push(',');
        filter_str.push_str(module);
        filter_str.push('=');
        filter_str.push_str(level);
    }

    let filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new("info"));

    let format = config
        .format
        .as_deref()
        .unwrap_or(hysteria_core::DEFAULT_LOG_FORMAT);
    let output = config
        .output
        .as_deref()
        .unwrap_or(hysteria_core::DEFAULT_LOG_OUTPUT);

    // try_init: a subscriber may already be installed when embedded.
    let _ = match (format, output) {
        ("json", "stdout") => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stdout))
            .try_init(),
        ("json", _) => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        ("compact", "stdout") => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(io::stdout))
            .try_init(),
        ("compact", _) => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(io::stderr))
            .try_init(),
        (_, "stdout") => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(io::stdout))
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(io::stderr))
            .try_init(),
    };
}
