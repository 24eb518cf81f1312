//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::RegistrarConfig;
use crate::config::secret_string;
use crate::domain::errors::RegistrarError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into RegistrarConfig
/// 4. Applies environment variable overrides (REGISTRAR_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use registrar::config::loader::load_config;
///
/// let config = load_config("registrar.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RegistrarConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RegistrarError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        RegistrarError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: RegistrarConfig = toml::from_str(&contents)
        .map_err(|e| RegistrarError::Configuration(format!("Failed to parse TOML: {e}")))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        RegistrarError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(RegistrarError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the REGISTRAR_* prefix
///
/// Environment variables follow the pattern: REGISTRAR_<SECTION>_<KEY>.
/// For example: REGISTRAR_APPLICATION_LOG_LEVEL, REGISTRAR_GRADEBOOK_API_KEY.
fn apply_env_overrides(config: &mut RegistrarConfig) {
    if let Ok(val) = std::env::var("REGISTRAR_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("REGISTRAR_REPORT_STORE_ROOT_PATH") {
        config.report_store.root_path = val;
    }

    if let Ok(val) = std::env::var("REGISTRAR_UPLOADS_ROOT_PATH") {
        config.uploads.root_path = val;
    }

    if let Some(ref mut gradebook) = config.gradebook {
        if let Ok(val) = std::env::var("REGISTRAR_GRADEBOOK_BASE_URL") {
            gradebook.base_url = val;
        }
        if let Ok(val) = std::env::var("REGISTRAR_GRADEBOOK_API_KEY") {
            gradebook.api_key = secret_string(val);
        }
        if let Ok(val) = std::env::var("REGISTRAR_GRADEBOOK_TIMEOUT_SECONDS") {
            if let Ok(timeout) = val.parse() {
                gradebook.timeout_seconds = timeout;
            }
        }
    }
}
