//! Cardscribe - Tabletop Simulator script generator for custom card designs

use cardscribe::cli::{ButtonsArgs, ExtractArgs, SheetArgs};
use cardscribe::constants::APP_BINARY_NAME;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Tabletop Simulator script generator for custom card designs
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an upgrade-sheet script from picked coordinates
    Sheet(SheetArgs),
    /// Generate a phase-tracker script from a button configuration
    Buttons(ButtonsArgs),
    /// Recover the button configuration from a generated script
    Extract(ExtractArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Sheet(args) => args.execute(),
        Command::Buttons(args) => args.execute(),
        Command::Extract(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
