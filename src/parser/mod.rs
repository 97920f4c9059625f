//! Recovering structured configuration from generated scripts.

pub mod extractor;
pub mod sidecar;

// Re-export commonly used functions
pub use extractor::extract_phase_config;
pub use sidecar::{read_sidecar, sidecar_path, write_sidecar};
