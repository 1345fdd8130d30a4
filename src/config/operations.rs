//! Config loading, validation, and the single selection mutation.

use super::model::Config;
use super::types::ExerciseSelection;
use crate::error::{DraftError, Result};
use std::collections::BTreeMap;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DraftError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| DraftError::ConfigError(format!("failed to parse draftrc YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return an error on invalid values.
    ///
    /// Validation rules:
    /// - `preamble` must be non-empty
    /// - `header`, when present, must be non-empty
    /// - every `draft-exercises` count must be at least 1
    pub fn validate(&self) -> Result<()> {
        if self.preamble.is_empty() {
            return Err(DraftError::ConfigError(
                "config validation failed: preamble must be non-empty".to_string(),
            ));
        }

        if let Some(header) = &self.header
            && header.is_empty()
        {
            return Err(DraftError::ConfigError(
                "config validation failed: header must be non-empty".to_string(),
            ));
        }

        if let Some(exercises) = &self.draft_exercises {
            for (name, selection) in exercises {
                if name.is_empty() {
                    return Err(DraftError::ConfigError(
                        "config validation failed: exercise names must be non-empty".to_string(),
                    ));
                }
                if selection.count == 0 {
                    return Err(DraftError::ConfigError(format!(
                        "config validation failed: count for exercise '{}' must be at least 1",
                        name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Record the resolved exercise selection.
    ///
    /// This is the only mutation of a Config after loading. The compiler
    /// performs it exactly once, before compilation begins, and only when no
    /// selection was configured.
    pub fn apply_exercise_selection(
        &mut self,
        selection: BTreeMap<String, ExerciseSelection>,
    ) -> Result<()> {
        if self.draft_exercises.is_some() {
            return Err(DraftError::ConfigError(
                "exercise selection was already applied".to_string(),
            ));
        }
        self.draft_exercises = Some(selection);
        self.validate()
    }

    /// The configured selection, if any.
    pub fn exercise_selection(&self) -> Option<&BTreeMap<String, ExerciseSelection>> {
        self.draft_exercises.as_ref()
    }

    /// Configured instance count for an exercise name (1 when unknown).
    pub fn exercise_count(&self, name: &str) -> u32 {
        self.draft_exercises
            .as_ref()
            .and_then(|sel| sel.get(name))
            .map(|s| s.count)
            .unwrap_or(1)
    }
}
