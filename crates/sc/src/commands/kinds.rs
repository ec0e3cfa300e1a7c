//! `sc kinds` command implementation.

use std::path::PathBuf;

use clap::Args;
use sc_config::Config;
use sc_engine::{EngineConfig, ShortcodeKind};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the kinds command.
#[derive(Args)]
pub(crate) struct KindsArgs {
    /// Path to configuration file (default: auto-discover sc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl KindsArgs {
    /// List shortcode kinds in pipeline order with their enabled state.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        for (kind, enabled) in kind_states(&config.shortcodes) {
            if enabled {
                output.line(kind.name());
            } else {
                output.line(&format!("{} {}", kind.name(), output.dimmed("(disabled)")));
            }
        }

        Ok(())
    }
}

/// Every kind in pipeline order paired with whether it runs.
fn kind_states(config: &EngineConfig) -> Vec<(ShortcodeKind, bool)> {
    ShortcodeKind::ALL
        .into_iter()
        .map(|kind| (kind, config.is_enabled(kind)))
        .collect()
}
