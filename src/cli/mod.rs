//! CLI command handlers for cardscribe.
//!
//! Each subcommand is a clap `Args` struct with an `execute` method,
//! providing headless, scriptable access for automation and testing.

pub mod buttons;
pub mod common;
pub mod extract;
pub mod sheet;

// Re-export types used by main.rs and tests
pub use buttons::ButtonsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use extract::ExtractArgs;
pub use sheet::SheetArgs;
