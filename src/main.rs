use anyhow::{Context, Result};
use clap::Parser;
use cstrans::cli::Cli;
use cstrans::config::Config;
use cstrans::{StageOutput, Transcriber};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter());
    tracing::debug!(version = %cstrans::version_string(), "cstrans starting");

    let config = load_config(cli.config.as_deref())?;
    let transcriber = Transcriber::from_config(&config).context("Failed to build transcriber")?;

    if cli.stages {
        print_stages(&transcriber.trace(&cli.sentence));
    }

    let utterance = transcriber.transcribe(&cli.sentence);
    if cli.json {
        println!("{}", serde_json::to_string(&utterance)?);
    } else {
        println!("{}", utterance.fon());
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(fallback: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(cstrans::defaults::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/cstrans/config.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        Config::load(path)?
    } else if let Some(default_path) = Config::default_path() {
        Config::load_or_default(&default_path)?
    } else {
        Config::default()
    };

    Ok(config.with_env_overrides())
}

/// Print each stage's output as an aligned table on stderr.
fn print_stages(outputs: &[StageOutput]) {
    let width = outputs.iter().map(|o| o.stage.len()).max().unwrap_or(0);
    let color = std::io::stderr().is_terminal();
    for output in outputs {
        if color {
            eprintln!(
                "{:>width$}  {}",
                output.stage.cyan(),
                output.text,
                width = width
            );
        } else {
            eprintln!("{:>width$}  {}", output.stage, output.text, width = width);
        }
    }
}
