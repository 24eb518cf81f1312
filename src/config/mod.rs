//! Configuration management
//!
//! Registrar reads a TOML configuration file (`registrar.toml` by default)
//! with `${VAR}` environment substitution and `REGISTRAR_*` environment
//! overrides. The gradebook API key is held as a [`SecretString`] so it
//! never appears in Debug output or logs.
//!
//! # Example
//!
//! ```no_run
//! use registrar::config::load_config;
//!
//! let config = load_config("registrar.toml").expect("Failed to load config");
//! println!("reports root: {}", config.report_store.root_path);
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, GradebookConfig, LoggingConfig, RegistrarConfig, ReportStoreConfig,
    UploadsConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
