//! Sidecar records persisting button configuration next to a script.
//!
//! The generated script is what Tabletop Simulator consumes, but recovering
//! configuration from it is a fragile text parse. Writing the structured
//! config as a JSON sidecar at generation time makes later edits lossless;
//! the regex extractor remains only as a fallback for scripts without one.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::models::PhaseButtonConfig;

/// Extension suffix appended to the script path for its sidecar.
const SIDECAR_SUFFIX: &str = ".cardscribe.json";

/// Returns the sidecar path for a script path.
///
/// `tracker.lua` maps to `tracker.lua.cardscribe.json`, keeping the pair
/// adjacent in directory listings.
#[must_use]
pub fn sidecar_path(script_path: &Path) -> PathBuf {
    let mut path = script_path.as_os_str().to_os_string();
    path.push(SIDECAR_SUFFIX);
    PathBuf::from(path)
}

/// Writes the sidecar record for a script.
///
/// This performs an atomic write using a temp file + rename pattern to
/// ensure the sidecar is never left in a corrupted state.
///
/// # Errors
///
/// Returns errors for serialization failures, file I/O failures, and
/// atomic rename failures.
pub fn write_sidecar(script_path: &Path, config: &PhaseButtonConfig) -> Result<()> {
    let path = sidecar_path(script_path);
    let json = serde_json::to_string_pretty(config)
        .context("Failed to serialize button config to JSON")?;

    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, json)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;
    std::fs::rename(&temp_path, &path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}

/// Reads the sidecar record for a script, if one exists and parses.
///
/// Like the regex extractor, this is best-effort: a missing sidecar is
/// normal (pre-sidecar scripts), and a corrupt one is logged and skipped so
/// the caller can fall back to the text parse.
#[must_use]
pub fn read_sidecar(script_path: &Path) -> Option<PhaseButtonConfig> {
    let path = sidecar_path(script_path);
    if !path.exists() {
        return None;
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            warn!("failed to read sidecar {}: {e}", path.display());
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("failed to parse sidecar {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidecar_path_appends_suffix() {
        let path = sidecar_path(Path::new("out/tracker.lua"));
        assert_eq!(path, Path::new("out/tracker.lua.cardscribe.json"));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("tracker.lua");

        let config = PhaseButtonConfig::default();
        write_sidecar(&script_path, &config).unwrap();
        assert_eq!(read_sidecar(&script_path), Some(config));
    }

    #[test]
    fn test_missing_sidecar_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_sidecar(&dir.path().join("tracker.lua")), None);
    }

    #[test]
    fn test_corrupt_sidecar_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("tracker.lua");
        std::fs::write(sidecar_path(&script_path), "not json").unwrap();
        assert_eq!(read_sidecar(&script_path), None);
    }
}
