//! Default configuration constants for cstrans.

/// Application directory name under the user's config directory.
pub const APP_NAME: &str = "cstrans";

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Disables the built-in lexical exception table when set to a non-empty value.
pub const ENV_NO_EXCEPTIONS: &str = "CSTRANS_NO_EXCEPTIONS";

/// Disables hiatus glide insertion when set to a non-empty value.
pub const ENV_NO_HIATUS: &str = "CSTRANS_NO_HIATUS";

/// Disables the heuristic cleanup table when set to a non-empty value.
pub const ENV_NO_HEURISTIC: &str = "CSTRANS_NO_HEURISTIC";

/// Log filter used when neither `RUST_LOG` nor `-v` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";
