//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Registrar configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Report Store Root: {}", config.report_store.root_path);
        println!("  Uploads Root: {}", config.uploads.root_path);
        match &config.gradebook {
            Some(gradebook) => {
                println!("  Gradebook: {}", gradebook.base_url);
                println!("  Gradebook Timeout: {}s", gradebook.timeout_seconds);
            }
            None => println!("  Gradebook: not configured (grade posting disabled)"),
        }
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                &config.logging.local_path
            } else {
                "disabled"
            }
        );

        Ok(0)
    }
}
