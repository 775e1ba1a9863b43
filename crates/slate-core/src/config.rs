// Rust guideline compliant 2026-08-28

//! Configuration management for Slate.

use crate::models::Priority;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

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

/// Configuration for Slate behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default priority for new tasks and subtasks.
    #[serde(default)]
    pub default_priority: Priority,

    /// Number of subtasks to request when expanding a task.
    #[serde(default = "default_subtasks")]
    pub default_subtasks: u8,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Default subtask count for expansion.
fn default_subtasks() -> u8 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_priority: Priority::default(),
            default_subtasks: default_subtasks(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.slate/config.toml`
    /// 3. Environment variables with `SLATE_` prefix
    ///
    /// # Arguments
    ///
    /// * `slate_dir` - Path to the `.slate` directory
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(slate_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        // Try to load from config file
        let config_path = slate_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let file_config: Config = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidData(format!("Invalid config file: {}", e)))?;
            config = file_config;
        }

        // Apply environment variable overrides
        config.apply_env_overrides()?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `SLATE_DEFAULT_PRIORITY` - Default priority (low/medium/high)
    /// - `SLATE_DEFAULT_SUBTASKS` - Number of subtasks when expanding
    /// - `SLATE_OUTPUT_FORMAT` - Output format (json/table/plain)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SLATE_DEFAULT_PRIORITY") {
            self.default_priority = Priority::from_str(&val).map_err(|_| {
                crate::Error::InvalidData(
                    "SLATE_DEFAULT_PRIORITY must be low, medium, or high".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("SLATE_DEFAULT_SUBTASKS") {
            self.default_subtasks = val.parse().map_err(|_| {
                crate::Error::InvalidData(
                    "SLATE_DEFAULT_SUBTASKS must be a positive number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("SLATE_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::InvalidData(
                        "SLATE_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `default_subtasks` is zero.
    fn validate(&self) -> Result<()> {
        if self.default_subtasks == 0 {
            return Err(crate::Error::InvalidData(
                "default_subtasks must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `slate_dir` - Path to the `.slate` directory
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization
    /// fails.
    pub fn save(&self, slate_dir: &Path) -> Result<()> {
        let config_path = slate_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::InvalidData(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
