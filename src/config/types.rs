//! Supporting types for the draft configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One entry of the `draft-exercises` mapping: which template file an
/// exercise name refers to and how many instances of it to compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSelection {
    /// Path to the exercise's main template file.
    pub path: PathBuf,

    /// Number of instances to compile. Must be at least 1.
    #[serde(default = "default_count")]
    pub count: u32,
}

impl ExerciseSelection {
    /// A selection of a single instance of the template at `path`.
    pub fn single<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            count: default_count(),
        }
    }
}

pub(super) fn default_count() -> u32 {
    1
}
