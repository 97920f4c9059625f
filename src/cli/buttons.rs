//! Buttons command: generate a phase-tracker script from a button config.

use crate::cli::common::{CliError, CliResult};
use crate::generator::generate_phase_tracker;
use crate::models::PhaseButtonConfig;
use crate::parser::{sidecar_path, write_sidecar};
use clap::Args;
use std::path::PathBuf;

/// Generate a phase-tracker script from a button configuration
#[derive(Debug, Clone, Args)]
pub struct ButtonsArgs {
    /// Button config JSON file (uses the stock four-phase tracker when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output script path (prints to stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Skip writing the config sidecar next to the output script
    #[arg(long)]
    pub no_sidecar: bool,
}

impl ButtonsArgs {
    /// Execute the buttons command
    pub fn execute(&self) -> CliResult<()> {
        let config = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?;
                serde_json::from_str(&content).map_err(|e| {
                    CliError::validation(format!("Invalid button config {}: {e}", path.display()))
                })?
            }
            None => PhaseButtonConfig::default(),
        };

        let script = generate_phase_tracker(&config)
            .map_err(|e| CliError::validation(format!("Failed to generate tracker: {e}")))?;

        match &self.out {
            Some(path) => {
                std::fs::write(path, script)
                    .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;
                println!("✓ Generated phase-tracker script ({} buttons)", config.len());
                println!("  Output: {}", path.display());

                if !self.no_sidecar {
                    write_sidecar(path, &config)
                        .map_err(|e| CliError::io(format!("Failed to write sidecar: {e}")))?;
                    println!("  Sidecar: {}", sidecar_path(path).display());
                }
            }
            None => print!("{script}"),
        }

        Ok(())
    }
}
