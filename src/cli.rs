//! Command-line interface for cstrans
//!
//! Provides argument parsing using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Transcribe a Czech sentence phonetically
#[derive(Parser, Debug)]
#[command(name = "cstrans", version, about = "Transcribe a Czech sentence phonetically")]
pub struct Cli {
    /// Sentence to transcribe
    pub sentence: String,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose logging to stderr (-v: each stage, -vv: each voicing decision)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print original and transcription as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Print the output of every pipeline stage to stderr
    #[arg(long)]
    pub stages: bool,
}

impl Cli {
    /// Log filter implied by the verbosity flag.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => crate::defaults::DEFAULT_LOG_FILTER,
            1 => "cstrans=debug",
            _ => "cstrans=trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sentence_is_required() {
        let result = Cli::try_parse_from(["cstrans"]);
        assert!(result.is_err(), "missing sentence should be a usage error");
    }

    #[test]
    fn test_parses_sentence() {
        let cli = Cli::try_parse_from(["cstrans", "leč dobře"]).unwrap();
        assert_eq!(cli.sentence, "leč dobře");
        assert!(!cli.json);
        assert!(!cli.stages);
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        let result = Cli::try_parse_from(["cstrans", "leč", "dobře"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "cstrans",
            "--json",
            "--stages",
            "-vv",
            "--config",
            "/tmp/c.toml",
            "kde",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(cli.stages);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn test_log_filter_follows_verbosity() {
        let quiet = Cli::try_parse_from(["cstrans", "a"]).unwrap();
        assert_eq!(quiet.log_filter(), "warn");
        let debug = Cli::try_parse_from(["cstrans", "-v", "a"]).unwrap();
        assert_eq!(debug.log_filter(), "cstrans=debug");
        let trace = Cli::try_parse_from(["cstrans", "-vvv", "a"]).unwrap();
        assert_eq!(trace.log_filter(), "cstrans=trace");
    }
}
