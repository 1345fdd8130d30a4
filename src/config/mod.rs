//! Configuration model for draft.
//!
//! This module defines the Config struct that represents a `draftrc.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.
//! A loaded Config also acts as the global value source for placeholder
//! resolution through its `placeholders` map.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::ExerciseSelection;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "draftrc.yaml";
