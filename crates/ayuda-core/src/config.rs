// Rust guideline compliant 2026-02-06

//! Configuration management for Ayuda.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Verbosity of the diagnostic log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Failures only.
    Error,
    /// Failures and rejected operations.
    Warn,
    /// Every state change.
    Info,
    /// Internal detail such as interrupts and scan phases.
    Debug,
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(Error::Config(format!(
                "log_level must be error, warn, info, or debug, got {}",
                other
            ))),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
        }
    }
}

/// Configuration for an operator session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Simulated camera delay for a scan, in milliseconds.
    #[serde(default = "default_scan_delay_ms")]
    pub scan_delay_ms: u64,

    /// Counter staff recorded as `processed_by` on scan transactions.
    #[serde(default = "default_operator")]
    pub operator: String,

    /// Supervisor recorded on case decisions.
    #[serde(default = "default_reviewer")]
    pub reviewer: String,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log level (error, warn, info, debug).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_scan_delay_ms() -> u64 {
    1_500
}

fn default_operator() -> String {
    "Maria Santos".to_string()
}

fn default_reviewer() -> String {
    "Supervisor".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_delay_ms: default_scan_delay_ms(),
            operator: default_operator(),
            reviewer: default_reviewer(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from a directory and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/config.toml`, if present
    /// 3. Environment variables with `AYUDA_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::load_file(&config_dir.join("config.toml"))
    }

    /// Loads configuration from an explicit file path. A missing file means
    /// defaults plus environment overrides.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_file(config_path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Scan delay as a `Duration`.
    #[must_use]
    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `AYUDA_SCAN_DELAY_MS` - Scan delay in milliseconds
    /// - `AYUDA_OPERATOR` - Counter staff name
    /// - `AYUDA_REVIEWER` - Supervisor name
    /// - `AYUDA_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `AYUDA_LOG_LEVEL` - Log level
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("AYUDA_SCAN_DELAY_MS") {
            self.scan_delay_ms = val.parse().map_err(|_| {
                Error::Config("AYUDA_SCAN_DELAY_MS must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("AYUDA_OPERATOR") {
            self.operator = val;
        }

        if let Ok(val) = std::env::var("AYUDA_REVIEWER") {
            self.reviewer = val;
        }

        if let Ok(val) = std::env::var("AYUDA_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "AYUDA_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("AYUDA_LOG_LEVEL") {
            self.log_level = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<()> {
        if self.scan_delay_ms == 0 {
            return Err(Error::Config(
                "scan_delay_ms must be greater than 0".to_string(),
            ));
        }

        if self.operator.trim().is_empty() {
            return Err(Error::Config("operator cannot be empty".to_string()));
        }

        if self.reviewer.trim().is_empty() {
            return Err(Error::Config("reviewer cannot be empty".to_string()));
        }

        self.log_level.parse::<LogLevel>()?;
        Ok(())
    }

    /// Saves the configuration to `<dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
