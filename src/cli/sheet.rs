//! Sheet command: generate an upgrade-sheet script from picked coordinates.

use crate::cli::common::{CliError, CliResult};
use crate::constants::default_calibration;
use crate::generator::generate_upgrade_sheet;
use crate::models::{CalibrationReference, PixelCoordinate};
use clap::Args;
use std::path::{Path, PathBuf};

/// Generate an upgrade-sheet script from a coordinate file
#[derive(Debug, Clone, Args)]
pub struct SheetArgs {
    /// Path to coordinate JSON file: an array of [x, y] pixel pairs
    #[arg(short, long, value_name = "FILE")]
    pub coords: PathBuf,

    /// Calibration JSON file (defaults to the standard card render)
    #[arg(long, value_name = "FILE")]
    pub calibration: Option<PathBuf>,

    /// Output script path (prints to stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

impl SheetArgs {
    /// Execute the sheet command
    pub fn execute(&self) -> CliResult<()> {
        let coords = load_coordinates(&self.coords)?;

        let calibration = match &self.calibration {
            Some(path) => load_calibration(path)?,
            None => default_calibration(),
        };

        let script = generate_upgrade_sheet(&coords, &calibration)
            .map_err(|e| CliError::validation(format!("Failed to derive layout: {e}")))?;

        match &self.out {
            Some(path) => {
                std::fs::write(path, script)
                    .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;
                println!("✓ Generated upgrade-sheet script");
                println!("  Output: {}", path.display());
            }
            None => print!("{script}"),
        }

        Ok(())
    }
}

/// Loads and validates the coordinate list from a JSON file.
fn load_coordinates(path: &Path) -> CliResult<Vec<PixelCoordinate>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?;

    let coords: Vec<PixelCoordinate> = serde_json::from_str(&content).map_err(|e| {
        CliError::validation(format!(
            "Invalid coordinate file {}: {e}\nExpected an array of [x, y] pairs, e.g. [[68, 206], [89, 206]]",
            path.display()
        ))
    })?;

    if let Some(bad) = coords.iter().find(|c| c.x < 0.0 || c.y < 0.0) {
        return Err(CliError::validation(format!(
            "Coordinate ({}, {}) is negative; picked coordinates must lie on the render",
            bad.x, bad.y
        )));
    }

    Ok(coords)
}

/// Loads a calibration reference from a JSON file.
fn load_calibration(path: &Path) -> CliResult<CalibrationReference> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?;

    serde_json::from_str(&content).map_err(|e| {
        CliError::validation(format!(
            "Invalid calibration file {}: {e}",
            path.display()
        ))
    })
}
