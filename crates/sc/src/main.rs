//! SC CLI - Shortcode expansion engine.
//!
//! Provides commands for:
//! - `render`: Expand shortcodes in a file or stdin
//! - `kinds`: List shortcode kinds and whether they are enabled

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{KindsArgs, RenderArgs};
use output::Output;

/// SC - Shortcode expansion engine.
#[derive(Parser)]
#[command(name = "sc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand shortcodes into HTML.
    Render(RenderArgs),
    /// List shortcode kinds in pipeline order.
    Kinds(KindsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Kinds(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
