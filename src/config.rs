use crate::defaults;
use crate::error::{Result, TranscriptionError};
use crate::rewrite::{Context, Rule};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub lexicon: LexiconConfig,
}

/// Optional pipeline stages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Apply the built-in lexical exception table.
    pub lexical_exceptions: bool,
    /// Insert `j` between `i`/`í` and a following vowel.
    pub hiatus: bool,
    /// Nasal assimilation and degemination.
    pub heuristic: bool,
}

/// User additions to the lexical exception table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LexiconConfig {
    pub rules: Vec<UserRule>,
}

/// One user-supplied exception, matched against normalized (lowercase) text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRule {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub word_initial: bool,
}

impl UserRule {
    pub fn to_rule(&self) -> Rule {
        let context = if self.word_initial {
            Context::word_initial()
        } else {
            Context::ANYWHERE
        };
        Rule::owned(self.from.to_lowercase(), self.to.clone(), context)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            lexical_exceptions: true,
            hiatus: true,
            heuristic: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML or invalid values.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TranscriptionError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                TranscriptionError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Returns errors for invalid TOML.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(TranscriptionError::ConfigFileNotFound { .. }) => Ok(Self::default()),
            other => other,
        }
    }

    /// Reject rules that could never match.
    pub fn validate(&self) -> Result<()> {
        for (idx, rule) in self.lexicon.rules.iter().enumerate() {
            if rule.from.is_empty() {
                return Err(TranscriptionError::ConfigInvalidValue {
                    key: format!("lexicon.rules[{}].from", idx),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables (any non-empty value disables the stage):
    /// - CSTRANS_NO_EXCEPTIONS → pipeline.lexical_exceptions
    /// - CSTRANS_NO_HIATUS → pipeline.hiatus
    /// - CSTRANS_NO_HEURISTIC → pipeline.heuristic
    pub fn with_env_overrides(mut self) -> Self {
        if env_flag(defaults::ENV_NO_EXCEPTIONS) {
            self.pipeline.lexical_exceptions = false;
        }
        if env_flag(defaults::ENV_NO_HIATUS) {
            self.pipeline.hiatus = false;
        }
        if env_flag(defaults::ENV_NO_HEURISTIC) {
            self.pipeline.heuristic = false;
        }
        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/cstrans/config.toml on Linux, or `None` when no
    /// configuration directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(defaults::APP_NAME).join(defaults::CONFIG_FILE))
    }
}

fn env_flag(key: &str) -> bool {
    std::env::var(key).is_ok_and(|v| !v.is_empty())
}
