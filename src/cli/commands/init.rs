//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "registrar.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::starter_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set REGISTRAR_GRADEBOOK_API_KEY if grade posting is enabled");
                println!("  3. Validate configuration: registrar validate-config");
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    fn starter_config() -> &'static str {
        r#"# Registrar Configuration File
# Background report-generation jobs for an online-course platform

[application]
name = "registrar"
log_level = "info"

[report_store]
# Finished report CSVs are written under this directory, one
# subdirectory per course.
root_path = "/var/lib/registrar/reports"

[uploads]
# Staff-uploaded files (cohort assignment CSVs) are read from here.
root_path = "/var/lib/registrar/uploads"

# Remote gradebook integration; remove this section to disable
# grade posting.
[gradebook]
base_url = "https://gradebook.example.com/api"
api_key = "${REGISTRAR_GRADEBOOK_API_KEY}"
timeout_seconds = 30

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
    }
}
