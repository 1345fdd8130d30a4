//! Exercise fragments and their supplemental files.
//!
//! An exercise owns its supplements and a per-instance value set,
//! `unique_placeholder_values`, populated while the exercise itself resolves
//! and consumed by its supplements when `unique-exercise-placeholders` is
//! enabled. The value set lives until `clean_resolve_placeholders` runs after
//! the instance's supplements have been written, so state from one instance
//! never leaks into the next.

use super::{FragmentBody, Resolvable, ValueSource};
use crate::error::{DraftError, Result};
use crate::prompt::Prompter;
use crate::template::Template;
use std::collections::BTreeMap;

/// One concrete exercise instance to compile.
///
/// Instances expanded from the same template share name and path but are
/// independent mutable entities; disambiguation gives each a unique display
/// name within a run.
#[derive(Debug, Clone)]
pub struct Exercise {
    body: FragmentBody,
    extension: String,
    supplements: Vec<Supplement>,
    disambiguation_suffix: Option<u32>,
    unique_placeholder_values: BTreeMap<String, String>,
}

/// A resolved supplement ready to be handed to the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplementOutput {
    /// Output filename, derived from the owning exercise's disambiguated
    /// name plus the supplement's extension.
    pub filename: String,
    /// The resolved supplement text.
    pub contents: String,
}

impl Exercise {
    /// Build an exercise instance from its template and supplement templates.
    pub fn new(template: Template, supplements: Vec<Template>) -> Result<Self> {
        let extension = template.extension.clone();
        let supplements = supplements
            .into_iter()
            .map(Supplement::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            body: FragmentBody::new(template)?,
            extension,
            supplements,
            disambiguation_suffix: None,
            unique_placeholder_values: BTreeMap::new(),
        })
    }

    /// The exercise template's file extension (e.g. `.tex`).
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn disambiguation_suffix(&self) -> Option<u32> {
        self.disambiguation_suffix
    }

    pub fn set_disambiguation_suffix(&mut self, suffix: u32) {
        self.disambiguation_suffix = Some(suffix);
    }

    /// The instance's unique display name: the template name, with the
    /// disambiguation suffix appended when one is assigned.
    pub fn disambiguated_name(&self) -> String {
        match self.disambiguation_suffix {
            Some(suffix) => format!("{}{}", self.body.name(), suffix),
            None => self.body.name().to_string(),
        }
    }

    pub fn supplements(&self) -> &[Supplement] {
        &self.supplements
    }

    pub fn supplement_count(&self) -> usize {
        self.supplements.len()
    }

    /// The per-instance value set populated by this exercise's resolution.
    pub fn unique_placeholder_values(&self) -> &BTreeMap<String, String> {
        &self.unique_placeholder_values
    }

    /// Derive each supplement's output filename from this instance's
    /// disambiguated name, keeping the supplement's own extension.
    pub fn rename_supplements(&mut self) {
        let stem = self.disambiguated_name();
        for supplement in &mut self.supplements {
            supplement.filename = format!("{}{}", stem, supplement.extension);
        }
    }

    /// Resolve the supplement at `index` and return its output.
    ///
    /// With `unique` set, the supplement resolves against this instance's
    /// `unique_placeholder_values`; otherwise against `global`.
    pub fn resolve_supplement(
        &mut self,
        index: usize,
        global: &dyn ValueSource,
        unique: bool,
        prompter: &mut dyn Prompter,
    ) -> Result<SupplementOutput> {
        let Self {
            supplements,
            unique_placeholder_values,
            ..
        } = self;

        let supplement = supplements.get_mut(index).ok_or_else(|| {
            DraftError::TemplateError(format!("no supplement at index {}", index))
        })?;

        let source: &dyn ValueSource = if unique {
            unique_placeholder_values
        } else {
            global
        };

        let (contents, _) = supplement.body.resolve_with(source, prompter)?;
        Ok(SupplementOutput {
            filename: supplement.filename.clone(),
            contents,
        })
    }

    /// Clear the per-instance value set and all transient prompt state.
    /// Called after every supplement of this instance has been written.
    pub fn clean_resolve_placeholders(&mut self) {
        self.unique_placeholder_values.clear();
        self.body.clear_answers();
        for supplement in &mut self.supplements {
            supplement.body.clear_answers();
        }
    }
}

impl Resolvable for Exercise {
    fn name(&self) -> &str {
        self.body.name()
    }

    fn contents(&self) -> Option<&str> {
        self.body.contents()
    }

    fn will_prompt(&self, source: &dyn ValueSource) -> bool {
        self.body.will_prompt(source)
    }

    /// Resolve the exercise's own placeholders. Every binding used, whether
    /// it came from the source or from a prompt, is recorded in
    /// `unique_placeholder_values` for this instance's supplements.
    fn resolve_placeholders(
        &mut self,
        source: &dyn ValueSource,
        prompter: &mut dyn Prompter,
    ) -> Result<()> {
        let Self {
            body,
            unique_placeholder_values,
            ..
        } = self;

        let (_, values) = body.resolve_with(source, prompter)?;
        unique_placeholder_values.extend(values);
        Ok(())
    }

    fn reset(&mut self) {
        self.body.reset();
        self.unique_placeholder_values.clear();
        for supplement in &mut self.supplements {
            supplement.reset();
        }
    }
}

/// An auxiliary file associated with one exercise instance, resolved and
/// written independently of the exercise's own content.
#[derive(Debug, Clone)]
pub struct Supplement {
    pub(super) body: FragmentBody,
    extension: String,
    pub(super) filename: String,
}

impl Supplement {
    pub fn new(template: Template) -> Result<Self> {
        let extension = template.extension.clone();
        let filename = format!("{}{}", template.name, extension);
        Ok(Self {
            body: FragmentBody::new(template)?,
            extension,
            filename,
        })
    }

    /// The supplement's file extension (e.g. `.ly`).
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The output filename; `Exercise::rename_supplements` replaces the
    /// template-name stem with the disambiguated name.
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl Resolvable for Supplement {
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
