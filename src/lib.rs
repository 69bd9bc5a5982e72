//! cstrans - phonetic transcription of Czech text
//!
//! Turns an orthographic sentence into an approximate phonetic transcription
//! for speech-processing work such as acoustic-model training data.
//!
//! ```
//! let utt = cstrans::transcribe("Leč dobře").unwrap();
//! assert_eq!(utt.fon(), "leʒʒ dobře");
//! ```

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod normalize;
pub mod phone;
pub mod pipeline;
pub mod postprocess;
pub mod rewrite;
pub mod rules;
pub mod utterance;
pub mod voicing;

// Pipeline
pub use pipeline::{Stage, StageOutput, Transcriber};
pub use utterance::Utterance;

// Error handling
pub use error::{Result, TranscriptionError};

// Config
pub use config::Config;

/// Transcribe one sentence with the default pipeline.
///
/// Compiles the rule tables on every call; build a [`Transcriber`] once when
/// transcribing many sentences.
pub fn transcribe(ort: &str) -> Result<Utterance> {
    Ok(Transcriber::new()?.transcribe(ort))
}

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_cargo_version() {
        let ver = version_string();
        assert!(
            ver.starts_with(env!("CARGO_PKG_VERSION")),
            "version_string should start with CARGO_PKG_VERSION, got: {}",
            ver
        );
    }

    #[test]
    fn version_string_contains_plus_when_git_hash_present() {
        let ver = version_string();
        if option_env!("GIT_HASH").is_some_and(|h| !h.is_empty()) {
            assert!(
                ver.contains('+'),
                "With GIT_HASH set, version should contain '+', got: {}",
                ver
            );
        } else {
            assert_eq!(ver, env!("CARGO_PKG_VERSION"));
        }
    }

    #[test]
    fn transcribe_uses_default_pipeline() {
        let utt = transcribe("Kde").unwrap();
        assert_eq!(utt.ort(), "Kde");
        assert_eq!(utt.fon(), "gde");
    }
}
