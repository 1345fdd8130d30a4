//! Resolvable template fragments.
//!
//! Every unit of template text the compiler emits (preamble, header,
//! exercise, supplement) is a fragment: it owns placeholder text, can report
//! whether resolving would require interaction, resolves its placeholders
//! against a value source (prompting for anything missing), and can reset its
//! resolution state.
//!
//! Prompt answers are cached in the fragment's own scope, so re-resolving
//! against an unchanged value source reproduces the same contents without
//! asking again.

pub mod exercise;


pub use exercise::{Exercise, Supplement, SupplementOutput};

use crate::config::Config;
use crate::error::{DraftError, Result};
use crate::prompt::{Prompter, accept_any};
use crate::template::{self, Template};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A mapping consulted to fill a fragment's placeholders: either the global
/// configuration or an exercise's per-instance value set.
pub trait ValueSource {
    /// The value bound to `key`, if any.
    fn value(&self, key: &str) -> Option<&str>;

    /// Containment check, used as a guard before prompting.
    fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }
}

impl ValueSource for Config {
    fn value(&self, key: &str) -> Option<&str> {
        self.placeholders.get(key).map(String::as_str)
    }
}

impl ValueSource for BTreeMap<String, String> {
    fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// The capability shared by all fragment kinds.
pub trait Resolvable {
    /// The fragment's template name.
    fn name(&self) -> &str;

    /// The resolved text, once `resolve_placeholders` has run.
    fn contents(&self) -> Option<&str>;

    /// Whether resolving against `source` would require interactive input.
    fn will_prompt(&self, source: &dyn ValueSource) -> bool;

    /// Fill every placeholder from `source`, prompting for missing values,
    /// and store the result. Idempotent for an unchanged source.
    fn resolve_placeholders(
        &mut self,
        source: &dyn ValueSource,
        prompter: &mut dyn Prompter,
    ) -> Result<()>;

    /// Discard resolved contents and cached prompt answers.
    fn reset(&mut self);
}

/// Shared state and resolution algorithm behind every fragment kind.
#[derive(Debug, Clone)]
pub struct FragmentBody {
    name: String,
    path: PathBuf,
    template: String,
    placeholder_names: Vec<String>,
    answers: BTreeMap<String, String>,
    contents: Option<String>,
}

impl FragmentBody {
    /// Build a body from a loaded template, scanning its placeholders.
    /// Malformed placeholder syntax is rejected here, before compilation.
    pub fn new(template: Template) -> Result<Self> {
        let placeholder_names = template::placeholders(&template.text).map_err(|e| {
            DraftError::TemplateError(format!("in '{}': {}", template.path.display(), e))
        })?;

        Ok(Self {
            name: template.name,
            path: template.path,
            template: template.text,
            placeholder_names,
            answers: BTreeMap::new(),
            contents: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Placeholders that neither the source nor the answer cache can fill.
    pub fn will_prompt(&self, source: &dyn ValueSource) -> bool {
        self.placeholder_names
            .iter()
            .any(|name| !source.contains(name) && !self.answers.contains_key(name))
    }

    /// Resolve and return the rendered text together with the full
    /// placeholder-to-value binding that produced it.
    ///
    /// Lookup order per placeholder: the value source, then cached answers,
    /// then the prompter (whose answer is cached).
    pub fn resolve_with(
        &mut self,
        source: &dyn ValueSource,
        prompter: &mut dyn Prompter,
    ) -> Result<(String, BTreeMap<String, String>)> {
        let Self {
            placeholder_names,
            answers,
            template,
            contents,
            path,
            ..
        } = self;

        let mut values = BTreeMap::new();
        for name in placeholder_names.iter() {
            let value = if let Some(value) = source.value(name) {
                value.to_string()
            } else if let Some(answer) = answers.get(name) {
                answer.clone()
            } else {
                let answer =
                    prompter.input(&format!("Value for '{}'", name), None, &accept_any)?;
                answers.insert(name.clone(), answer.clone());
                answer
            };
            values.insert(name.clone(), value);
        }

        let rendered = template::render(template, &values)
            .map_err(|e| DraftError::TemplateError(format!("in '{}': {}", path.display(), e)))?;
        *contents = Some(rendered.clone());
        Ok((rendered, values))
    }

    /// Drop cached prompt answers, keeping any resolved contents.
    pub fn clear_answers(&mut self) {
        self.answers.clear();
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.contents = None;
    }
}

/// The document preamble fragment.
#[derive(Debug, Clone)]
pub struct Preamble {
    body: FragmentBody,
}

impl Preamble {
    pub fn new(template: Template) -> Result<Self> {
        Ok(Self {
            body: FragmentBody::new(template)?,
        })
    }
}

impl Resolvable for Preamble {
    fn name(&self) -> &str {
        self.body.name()
    }

    fn contents(&self) -> Option<&str> {
        self.body.contents()
    }

    fn will_prompt(&self, source: &dyn ValueSource) -> bool {
        self.body.will_prompt(source)
    }

    fn resolve_placeholders(
        &mut self,
        source: &dyn ValueSource,
        prompter: &mut dyn Prompter,
    ) -> Result<()> {
        self.body.resolve_with(source, prompter)?;
        Ok(())
    }

    fn reset(&mut self) {
        self.body.reset();
    }
}

/// The document header fragment.
#[derive(Debug, Clone)]
pub struct Header {
    body: FragmentBody,
}

impl Header {
    pub fn new(template: Template) -> Result<Self> {
        Ok(Self {
            body: FragmentBody::new(template)?,
        })
    }
}

impl Resolvable for Header {
    fn name(&self) -> &str {
        self.body.name()
    }

    fn contents(&self) -> Option<&str> {
        self.body.contents()
    }

    fn will_prompt(&self, source: &dyn ValueSource) -> bool {
        self.body.will_prompt(source)
    }

    fn resolve_placeholders(
        &mut self,
        source: &dyn ValueSource,
        prompter: &mut dyn Prompter,
    ) -> Result<()> {
        self.body.resolve_with(source, prompter)?;
        Ok(())
    }

    fn reset(&mut self) {
        self.body.reset();
    }
}
