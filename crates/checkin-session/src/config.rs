//! # Configuration
//!
//! [`SessionApiConfig`] holds everything needed to reach the session API.
//!
//! ## Loading Priority
//!
//! Configuration is loaded from the first source that provides a value:
//!
//! 1. Explicit struct fields (programmatic construction)
//! 2. Environment variables (`CHECKIN_API_BASE_URL`, `CHECKIN_API_TIMEOUT_MS`)
//! 3. TOML config file at an explicit path
//! 4. `./checkin.toml` in the current directory
//! 5. `~/.config/checkin-session/checkin.toml`
//!
//! Individual fields can always be overridden by environment variables,
//! even when loading from a file.

use serde::{Deserialize, Serialize};
use std::path::Path;
#[cfg(feature = "config-toml")]
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default base URL of the session API (local backend).
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Default per-request timeout in milliseconds.
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Configuration load failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML.
    #[cfg(feature = "config-toml")]
    #[error("Configuration error: {0}")]
    Parse(#[from] toml::de::Error),

    /// An environment variable carried an unusable value.
    #[error("Invalid {variable}: {reason}")]
    InvalidVariable {
        variable: &'static str,
        reason: String,
    },
}

/// Configuration for the session API client.
///
/// # Examples
///
/// ## Programmatic
///
/// ```
/// use checkin_session::SessionApiConfig;
///
/// let config = SessionApiConfig::new("https://hotel.example/api");
/// ```
///
/// ## From environment variables
///
/// ```no_run
/// use checkin_session::SessionApiConfig;
///
/// // Optionally set CHECKIN_API_BASE_URL / CHECKIN_API_TIMEOUT_MS, then:
/// let config = SessionApiConfig::from_env().expect("Bad env vars");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionApiConfig {
    /// Base URL the resource paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout configuration.
    #[serde(default)]
    pub timeouts: TimeoutConfig,
}

/// Timeout settings for session API requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Per-request timeout in milliseconds. Once a request is issued it
    /// runs to completion or to this deadline; there is no cancellation
    /// token.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

// ─── Defaults ───────────────────────────────────────────────────────────

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl Default for SessionApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// ─── SessionApiConfig impl ──────────────────────────────────────────────

impl SessionApiConfig {
    /// Create a config with the given base URL (timeouts use defaults).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeouts: TimeoutConfig::default(),
        }
    }

    /// Load config from environment variables.
    ///
    /// Optional: `CHECKIN_API_BASE_URL`, `CHECKIN_API_TIMEOUT_MS`.
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load config from a TOML file, with environment variable overrides.
    ///
    /// Environment variables take precedence over file values.
    #[cfg(feature = "config-toml")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Self = toml::from_str(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Discover and load config from the standard search path:
    ///
    /// 1. Explicit path (if `Some`)
    /// 2. `CHECKIN_CONFIG` environment variable
    /// 3. `./checkin.toml`
    /// 4. `~/.config/checkin-session/checkin.toml`
    ///
    /// Falls back to environment-variable-only config if no file is found.
    pub fn discover(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        #[cfg(feature = "config-toml")]
        {
            if let Some(path) = explicit_path {
                return Self::from_file(path);
            }

            if let Ok(path) = std::env::var("CHECKIN_CONFIG") {
                let path = PathBuf::from(path);
                if path.exists() {
                    return Self::from_file(&path);
                }
            }

            let local_path = PathBuf::from("checkin.toml");
            if local_path.exists() {
                return Self::from_file(&local_path);
            }

            if let Some(home_path) = dirs_config_path() {
                if home_path.exists() {
                    return Self::from_file(&home_path);
                }
            }
        }
        #[cfg(not(feature = "config-toml"))]
        let _ = explicit_path;

        Self::from_env()
    }

    /// The per-request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.request_timeout_ms)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = std::env::var("CHECKIN_API_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(timeout) = std::env::var("CHECKIN_API_TIMEOUT_MS") {
            self.timeouts.request_timeout_ms =
                timeout
                    .parse()
                    .map_err(|_| ConfigError::InvalidVariable {
                        variable: "CHECKIN_API_TIMEOUT_MS",
                        reason: format!("'{timeout}' is not a millisecond count"),
                    })?;
        }
        Ok(())
    }
}

// ─── Helpers ────────────────────────────────────────────────────────────

/// Platform-appropriate config directory path.
#[cfg(feature = "config-toml")]
fn dirs_config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|dir| PathBuf::from(dir).join("checkin-session").join("checkin.toml"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME").ok().map(|dir| {
            PathBuf::from(dir)
                .join(".config")
                .join("checkin-session")
                .join("checkin.toml")
        })
    }
}
