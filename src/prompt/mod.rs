//! Interactive prompting for draft.
//!
//! The compilation pipeline never talks to the terminal directly; it asks
//! questions through the [`Prompter`] trait. `ConsolePrompter` renders them
//! on stdin/stdout, and tests use the scripted implementation in
//! [`scripted`] to answer deterministically.
//!
//! Validators return `Ok(())` to accept an answer or a human-readable
//! rejection message, which re-prompts; a rejected answer never escapes the
//! prompt loop as an error.

#[cfg(test)]
pub mod scripted;

use crate::error::{DraftError, Result};
use std::io::{BufRead, Write};

/// Outcome of validating a free-text answer.
pub type ValidationResult = std::result::Result<(), String>;

/// Accept any answer. Used for plain free-text questions.
pub fn accept_any(_answer: &str) -> ValidationResult {
    Ok(())
}

/// Validate an exercise instance count: a positive integer.
pub fn positive_count(answer: &str) -> ValidationResult {
    match answer.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(()),
        _ => Err("Please enter a positive integer.".to_string()),
    }
}

/// The questions the pipeline can ask.
///
/// Both calls block until the collaborator returns an answer.
pub trait Prompter {
    /// Ask the user to pick any subset of `choices`. Returns the chosen
    /// entries in choice order.
    fn multi_select(&mut self, message: &str, choices: &[String]) -> Result<Vec<String>>;

    /// Ask a free-text question. An empty answer falls back to `default`
    /// when one is given. Answers rejected by `validate` are re-prompted.
    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> ValidationResult,
    ) -> Result<String>;
}

/// Prompter backed by stdin/stdout.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| DraftError::PromptError(format!("failed to read stdin: {}", e)))?;
        if read == 0 {
            return Err(DraftError::PromptError(
                "stdin closed while waiting for an answer".to_string(),
            ));
        }
        Ok(line.trim().to_string())
    }

    fn flush_prompt(&self, text: &str) -> Result<()> {
        print!("{}", text);
        std::io::stdout()
            .flush()
            .map_err(|e| DraftError::PromptError(format!("failed to flush stdout: {}", e)))
    }
}

impl Prompter for ConsolePrompter {
    fn multi_select(&mut self, message: &str, choices: &[String]) -> Result<Vec<String>> {
        println!("{}", message);
        for (i, choice) in choices.iter().enumerate() {
            println!("  {}) {}", i + 1, choice);
        }

        loop {
            self.flush_prompt("Select (comma-separated numbers): ")?;
            let line = self.read_line()?;

            match parse_selection(&line, choices.len()) {
                Ok(indices) => {
                    return Ok(indices.into_iter().map(|i| choices[i].clone()).collect());
                }
                Err(reason) => println!("{}", reason),
            }
        }
    }

    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> ValidationResult,
    ) -> Result<String> {
        loop {
            match default {
                Some(default) => self.flush_prompt(&format!("{} [{}]: ", message, default))?,
                None => self.flush_prompt(&format!("{}: ", message))?,
            }

            let mut answer = self.read_line()?;
            if answer.is_empty()
                && let Some(default) = default
            {
                answer = default.to_string();
            }

            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => println!("{}", reason),
            }
        }
    }
}

/// Parse a multi-select answer like `1,3` into zero-based indices, sorted
/// and deduplicated.
fn parse_selection(line: &str, choice_count: usize) -> std::result::Result<Vec<usize>, String> {
    let mut indices = Vec::new();
    for part in line.split([',', ' ']).filter(|p| !p.is_empty()) {
        let number: usize = part
            .parse()
            .map_err(|_| format!("'{}' is not a number.", part))?;
        if number < 1 || number > choice_count {
            return Err(format!(
                "'{}' is out of range (1-{}).",
                number, choice_count
            ));
        }
        if !indices.contains(&(number - 1)) {
            indices.push(number - 1);
        }
    }
    indices.sort_unstable();
    Ok(indices)
}
