//! CLI configuration loaded from environment variables.
//!
//! Command-line flags take precedence over everything here.

use std::path::PathBuf;

/// Environment variable naming the attempts export.
pub const ENV_ATTEMPTS_PATH: &str = "ORIENT_ATTEMPTS_PATH";
/// Environment variable naming the profiles export.
pub const ENV_PROFILES_PATH: &str = "ORIENT_PROFILES_PATH";
/// Environment variable holding the default log filter.
pub const ENV_LOG_LEVEL: &str = "ORIENT_LOG_LEVEL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// JSON array of attempt rows.
    pub attempts_path: PathBuf,
    /// JSON array of player profiles. Optional: names fall back to user ids.
    pub profiles_path: Option<PathBuf>,
    /// Log level filter string (e.g. "info", "orient_board=debug").
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attempts_path: default_data_dir().join("attempts.json"),
            profiles_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            attempts_path: lookup(ENV_ATTEMPTS_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.attempts_path),
            profiles_path: lookup(ENV_PROFILES_PATH).map(PathBuf::from),
            log_level: lookup(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("orient")
}
