//! Configuration schema types
//!
//! This module defines the configuration structure for Registrar, mapped
//! from `registrar.toml`.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main Registrar configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrarConfig {
    /// Application-level settings
    pub application: ApplicationConfig,

    /// Report store settings
    pub report_store: ReportStoreConfig,

    /// Uploaded-file store settings (cohort input files)
    pub uploads: UploadsConfig,

    /// Remote gradebook settings (required only for grade posting)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradebook: Option<GradebookConfig>,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RegistrarConfig {
    /// Validates cross-field constraints that serde cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.application.name.trim().is_empty() {
            return Err("application.name must not be empty".to_string());
        }

        match self.application.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(format!(
                    "application.log_level must be one of trace/debug/info/warn/error, got '{other}'"
                ))
            }
        }

        if self.report_store.root_path.trim().is_empty() {
            return Err("report_store.root_path must not be empty".to_string());
        }

        if self.uploads.root_path.trim().is_empty() {
            return Err("uploads.root_path must not be empty".to_string());
        }

        if let Some(gradebook) = &self.gradebook {
            url::Url::parse(&gradebook.base_url)
                .map_err(|e| format!("gradebook.base_url is not a valid URL: {e}"))?;
            if gradebook.timeout_seconds == 0 {
                return Err("gradebook.timeout_seconds must be greater than zero".to_string());
            }
        }

        Ok(())
    }
}

/// Application-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name used in logs
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Report store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStoreConfig {
    /// Root directory report artifacts are written under
    pub root_path: String,
}

/// Uploaded-file store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadsConfig {
    /// Directory staff-uploaded files are read from
    pub root_path: String,
}

/// Remote gradebook settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Base URL of the remote gradebook service
    pub base_url: String,

    /// API key sent as a bearer token
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_gradebook_timeout")]
    pub timeout_seconds: u64,
}

fn default_gradebook_timeout() -> u64 {
    30
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable rolling-file logging in addition to the console
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory log files are written to
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: "daily" or "hourly"
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}
