//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Registrar using
//! clap. The binary is operational tooling for a worker deployment; the
//! jobs themselves are invoked through the library by the platform's task
//! framework.

pub mod commands;

use clap::{Parser, Subcommand};

/// Registrar - course report-generation worker tooling
#[derive(Parser, Debug)]
#[command(name = "registrar")]
#[command(version, about, long_about = None)]
#[command(author = "Registrar Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "registrar.toml", env = "REGISTRAR_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "REGISTRAR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
