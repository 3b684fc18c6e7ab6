//! Configuration for the analysis engine, the HTTP server and the CLI.
//!
//! Everything has a serde default, so an empty JSON object is a valid
//! configuration file. Environment variables override the file for the
//! deployment-specific values (bind address, port, preference store path).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{InfographicError, Result};

/// Environment variable overriding [`ServerConfig::bind_addr`].
pub const ENV_BIND: &str = "INFOGRAPHIC_BIND";
/// Environment variable overriding [`ServerConfig::port`].
pub const ENV_PORT: &str = "INFOGRAPHIC_PORT";
/// Environment variable overriding [`AppConfig::store_path`].
pub const ENV_STORE: &str = "INFOGRAPHIC_STORE";

/// Limits and tunables of the extraction engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum accepted input length in characters.
    pub max_input_chars: usize,

    /// Characters kept on each side of a numeric match.
    pub context_radius: usize,

    /// Numbers kept in the chart data.
    pub max_numbers: usize,

    /// Timeline entries kept in the chart data.
    pub max_timeline: usize,

    /// Key points kept after deduplication.
    pub max_key_points: usize,

    /// Sentences containing digits that may become key points.
    pub max_numeric_key_points: usize,

    /// Sentences joined into the summary.
    pub summary_sentences: usize,

    /// Minimum length, in characters, of a theme word.
    pub min_theme_chars: usize,

    /// Themes kept in the result.
    pub theme_display_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 5000,
            context_radius: 50,
            max_numbers: 10,
            max_timeline: 5,
            max_key_points: 4,
            max_numeric_key_points: 3,
            summary_sentences: 3,
            min_theme_chars: 4,
            theme_display_limit: 6,
        }
    }
}

impl AnalysisConfig {
    /// Reject configurations that would make the engine produce nothing useful.
    pub fn validate(&self) -> Result<()> {
        let caps = [
            ("max_input_chars", self.max_input_chars),
            ("max_numbers", self.max_numbers),
            ("max_timeline", self.max_timeline),
            ("max_key_points", self.max_key_points),
            ("summary_sentences", self.summary_sentences),
            ("theme_display_limit", self.theme_display_limit),
        ];
        for (name, value) in caps {
            if value == 0 {
                return Err(InfographicError::config(format!(
                    "{name} must be greater than zero"
                )));
            }
        }
        Ok(())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// The `addr:port` string the server listens on.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub server: ServerConfig,

    /// JSON file holding style preferences.
    pub store_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            server: ServerConfig::default(),
            store_path: PathBuf::from(".infographic/preferences.json"),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            InfographicError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: AppConfig = serde_json::from_str(&content)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load from an optional file, apply environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| env::var(key).ok())?;
        config.analysis.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in practice).
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(ENV_BIND) {
            debug!(bind = %bind, "bind address overridden from environment");
            self.server.bind_addr = bind;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .parse()
                .map_err(|e| InfographicError::config(format!("{ENV_PORT}={port}: {e}")))?;
        }
        if let Some(store) = lookup(ENV_STORE) {
            self.store_path = PathBuf::from(store);
        }
        Ok(())
    }
}
