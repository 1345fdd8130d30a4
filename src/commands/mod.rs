//! Command implementations for draft.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod new;
mod templates;

use crate::cli::Command;
use crate::config::{self, Config};
use crate::error::Result;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::New(args) => new::cmd_new(args),
        Command::Templates(args) => templates::cmd_templates(args),
    }
}

/// Load the configuration for a command.
///
/// An explicitly given config file must exist and parse. Without one,
/// `./draftrc.yaml` is used when present, and built-in defaults otherwise.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => {
            let default = Path::new(config::CONFIG_FILE);
            if default.is_file() {
                Config::load(default)
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Template root for a command: the CLI override wins over the config.
fn template_root(config: &Config, override_root: Option<&Path>) -> std::path::PathBuf {
    override_root
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.templates.clone())
}
