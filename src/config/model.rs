//! Config struct definition and default implementation.

use super::types::ExerciseSelection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration for a draft run.
///
/// This struct represents the contents of `draftrc.yaml`. Unknown fields in
/// the YAML are ignored for forward compatibility. Keys use kebab-case, e.g.
/// `draft-exercises` and `unique-exercise-placeholders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Name of the preamble template (default: "default").
    pub preamble: String,

    /// Name of the header template. Required at pipeline construction;
    /// a missing or null value there is a fatal configuration error.
    pub header: Option<String>,

    /// Whether to prompt for a per-exercise instance count during selection.
    pub multiple_exercises: bool,

    /// Whether supplements resolve against their exercise's per-instance
    /// placeholder values instead of the global configuration.
    pub unique_exercise_placeholders: bool,

    /// The exercises to compile: name to `{path, count}`. When absent, the
    /// selection is prompted for and applied once before compilation.
    pub draft_exercises: Option<BTreeMap<String, ExerciseSelection>>,

    /// Global placeholder values. Any placeholder found here resolves
    /// without prompting.
    pub placeholders: BTreeMap<String, String>,

    /// Root of the template directory tree (default: "templates").
    pub templates: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preamble: default_preamble(),
            header: None,
            multiple_exercises: false,
            unique_exercise_placeholders: false,
            draft_exercises: None,
            placeholders: BTreeMap::new(),
            templates: default_templates(),
        }
    }
}

fn default_preamble() -> String {
    "default".to_string()
}

fn default_templates() -> PathBuf {
    PathBuf::from("templates")
}
