//! Extract command: recover a button configuration from a generated script.

use crate::cli::common::{CliError, CliResult};
use crate::parser::{extract_phase_config, read_sidecar};
use clap::Args;
use std::path::PathBuf;

/// Recover the button configuration from a generated tracker script
#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Path to a previously generated phase-tracker script
    #[arg(short, long, value_name = "FILE")]
    pub script: PathBuf,

    /// Emit compact JSON instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> CliResult<()> {
        // Prefer the lossless sidecar; fall back to the text parse for
        // scripts generated before sidecars existed.
        let config = match read_sidecar(&self.script) {
            Some(config) => config,
            None => {
                let content = std::fs::read_to_string(&self.script).map_err(|e| {
                    CliError::io(format!("Failed to read {}: {e}", self.script.display()))
                })?;
                extract_phase_config(&content).ok_or_else(|| {
                    CliError::validation(format!(
                        "No button configuration could be recovered from {}.\n\
                         The script may be hand-written or from an incompatible version; \
                         regenerate it from a config file instead.",
                        self.script.display()
                    ))
                })?
            }
        };

        let json = if self.compact {
            serde_json::to_string(&config)
        } else {
            serde_json::to_string_pretty(&config)
        }
        .map_err(|e| CliError::io(format!("Failed to serialize config: {e}")))?;

        println!("{json}");
        Ok(())
    }
}
