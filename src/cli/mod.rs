//! CLI argument parsing for draft.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Draft: compile LaTeX exercise sheets from a template library.
///
/// A document is assembled from template fragments:
/// - a preamble and a header, picked by name from the configuration
/// - a set of exercises, configured or chosen interactively
/// - supplemental files compiled alongside their exercise
#[derive(Parser, Debug)]
#[command(name = "draft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for draft.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a new document from the configured templates.
    ///
    /// Reads `draftrc.yaml` (or the file given with --config), resolves
    /// every placeholder, and writes the compiled supplemental files to the
    /// current directory. Missing values are asked for interactively.
    New(NewArgs),

    /// List the available templates.
    ///
    /// Prints the header, preamble, and exercise template names found in
    /// the template directory tree.
    Templates(TemplatesArgs),
}

/// Arguments for the `new` command.
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Config file to use instead of ./draftrc.yaml.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Template root directory (overrides the configured one).
    #[arg(short, long)]
    pub templates: Option<PathBuf>,
}

/// Arguments for the `templates` command.
#[derive(Parser, Debug)]
pub struct TemplatesArgs {
    /// Config file to use instead of ./draftrc.yaml.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Template root directory (overrides the configured one).
    #[arg(short, long)]
    pub templates: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_new_without_arguments() {
        let cli = Cli::try_parse_from(["draft", "new"]).unwrap();
        match cli.command {
            Command::New(args) => {
                assert!(args.config.is_none());
                assert!(args.templates.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_new_with_overrides() {
        let cli = Cli::try_parse_from([
            "draft",
            "new",
            "--config",
            "alt.yaml",
            "--templates",
            "/srv/templates",
        ])
        .unwrap();
        match cli.command {
            Command::New(args) => {
                assert_eq!(args.config, Some(PathBuf::from("alt.yaml")));
                assert_eq!(args.templates, Some(PathBuf::from("/srv/templates")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_templates_command() {
        let cli = Cli::try_parse_from(["draft", "templates"]).unwrap();
        assert!(matches!(cli.command, Command::Templates(_)));
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(Cli::try_parse_from(["draft", "bogus"]).is_err());
    }
}
