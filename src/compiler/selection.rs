//! Exercise selection and expansion.
//!
//! When the configuration has no `draft-exercises` entry, the selection is
//! obtained interactively: a multi-select over the store's exercise names,
//! then, with `multiple-exercises` enabled, a count question per chosen name.
//! A non-positive count answer is rejected inside the prompt loop and asked
//! again; it never becomes a pipeline error.

use crate::config::{Config, ExerciseSelection};
use crate::error::{DraftError, Result};
use crate::fragment::Exercise;
use crate::prompt::{Prompter, positive_count};
use crate::template::TemplateStore;
use std::collections::BTreeMap;

/// Ask which exercises to include and, optionally, how many of each.
pub(super) fn prompt_for_exercises(
    config: &Config,
    store: &dyn TemplateStore,
    prompter: &mut dyn Prompter,
) -> Result<BTreeMap<String, ExerciseSelection>> {
    let names = store.exercise_names()?;
    if names.is_empty() {
        return Err(DraftError::TemplateError(
            "no exercise templates available".to_string(),
        ));
    }

    let chosen = prompter.multi_select("Which exercises should be included?", &names)?;

    let mut selection = BTreeMap::new();
    for name in chosen {
        let path = store.exercise_path(&name)?;
        let mut entry = ExerciseSelection::single(path);

        if config.multiple_exercises {
            let answer = prompter.input(
                &format!("How many '{}'?", name),
                Some(&entry.count.to_string()),
                &positive_count,
            )?;
            entry.count = answer.trim().parse().map_err(|_| {
                DraftError::PromptError(format!("count '{}' is not a positive integer", answer))
            })?;
        }

        selection.insert(name, entry);
    }

    Ok(selection)
}

/// Expand the configured selection into concrete exercise instances: exactly
/// `count` independent instances per entry, all sharing the entry's template
/// and carrying the entry's key as their name.
pub(super) fn expand_exercises(
    config: &Config,
    store: &dyn TemplateStore,
) -> Result<Vec<Exercise>> {
    let mut exercises = Vec::new();

    if let Some(selection) = config.exercise_selection() {
        for (name, entry) in selection {
            let mut template = store.exercise(&entry.path)?;
            // The entry key is the instance name even when it differs from
            // the template file stem; count lookups key on it.
            template.name = name.clone();
            let supplements = store.supplements(&entry.path)?;
            for _ in 0..entry.count {
                exercises.push(Exercise::new(template.clone(), supplements.clone())?);
            }
        }
    }

    Ok(exercises)
}
