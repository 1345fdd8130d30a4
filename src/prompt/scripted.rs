//! Scripted prompter for tests.
//!
//! Answers questions from pre-recorded queues and keeps a transcript of every
//! question asked, so tests can assert both the answers consumed and the
//! order in which the pipeline prompted.

use super::{Prompter, ValidationResult};
use crate::error::{DraftError, Result};
use std::collections::VecDeque;

/// Prompter that replays scripted answers.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    selections: VecDeque<Vec<String>>,
    inputs: VecDeque<String>,
    /// Every question asked, in order.
    pub transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next multi-select question.
    pub fn push_selection<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selections
            .push_back(names.into_iter().map(Into::into).collect());
    }

    /// Queue an answer for the next free-text question. Rejected answers are
    /// consumed too, so a test can script an invalid answer followed by a
    /// valid one to exercise the re-prompt loop.
    pub fn push_input<S: Into<String>>(&mut self, answer: S) {
        self.inputs.push_back(answer.into());
    }

    /// True when every scripted answer has been consumed.
    pub fn exhausted(&self) -> bool {
        self.selections.is_empty() && self.inputs.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn multi_select(&mut self, message: &str, choices: &[String]) -> Result<Vec<String>> {
        self.transcript.push(message.to_string());
        let chosen = self.selections.pop_front().ok_or_else(|| {
            DraftError::PromptError(format!("no scripted selection for: {}", message))
        })?;

        for name in &chosen {
            if !choices.contains(name) {
                return Err(DraftError::PromptError(format!(
                    "scripted selection '{}' is not among the offered choices",
                    name
                )));
            }
        }
        Ok(chosen)
    }

    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> ValidationResult,
    ) -> Result<String> {
        self.transcript.push(message.to_string());

        loop {
            let mut answer = self.inputs.pop_front().ok_or_else(|| {
                DraftError::PromptError(format!("no scripted input for: {}", message))
            })?;
            if answer.is_empty()
                && let Some(default) = default
            {
                answer = default.to_string();
            }

            if validate(&answer).is_ok() {
                return Ok(answer);
            }
            // Rejected; fall through to the next scripted answer, mirroring
            // the console re-prompt loop.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{accept_any, positive_count};

    #[test]
    fn replays_selections_in_order() {
        let mut prompter = ScriptedPrompter::new();
        prompter.push_selection(["intervals"]);

        let choices = vec!["chords".to_string(), "intervals".to_string()];
        let chosen = prompter.multi_select("Which exercises?", &choices).unwrap();
        assert_eq!(chosen, vec!["intervals".to_string()]);
        assert_eq!(prompter.transcript, vec!["Which exercises?".to_string()]);
        assert!(prompter.exhausted());
    }

    #[test]
    fn rejects_selection_outside_choices() {
        let mut prompter = ScriptedPrompter::new();
        prompter.push_selection(["nonexistent"]);

        let choices = vec!["intervals".to_string()];
        let err = prompter.multi_select("Which exercises?", &choices).unwrap_err();
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn rejected_answers_consume_the_queue() {
        let mut prompter = ScriptedPrompter::new();
        prompter.push_input("zero");
        prompter.push_input("0");
        prompter.push_input("2");

        let answer = prompter
            .input("How many?", Some("1"), &positive_count)
            .unwrap();
        assert_eq!(answer, "2");
        assert!(prompter.exhausted());
    }

    #[test]
    fn empty_answer_uses_default() {
        let mut prompter = ScriptedPrompter::new();
        prompter.push_input("");

        let answer = prompter
            .input("How many?", Some("1"), &positive_count)
            .unwrap();
        assert_eq!(answer, "1");
    }

    #[test]
    fn exhausted_script_is_a_prompt_error() {
        let mut prompter = ScriptedPrompter::new();
        let err = prompter.input("Value", None, &accept_any).unwrap_err();
        assert!(err.to_string().contains("no scripted input"));
    }
}
