//! The compilation pipeline.
//!
//! `Compiler::new` builds the run: it checks the fatal preconditions (a
//! configured header), loads the preamble and header fragments, obtains the
//! exercise selection (prompting if the configuration has none), expands it
//! into concrete exercise instances, and disambiguates repeated instances.
//! Construction is the only point where the configuration is mutated; a
//! fatal error here aborts before any output exists.
//!
//! `compile` then runs a fixed sequential pass: preamble, header, and each
//! exercise with its supplements, handing every resolved supplement to the
//! output sink and clearing per-instance state afterwards.

mod disambiguate;
mod selection;


use crate::config::Config;
use crate::error::{DraftError, Result};
use crate::fragment::{Exercise, Header, Preamble, Resolvable};
use crate::output::OutputSink;
use crate::prompt::Prompter;
use crate::template::TemplateStore;

/// Orchestrates one compilation run.
#[derive(Debug)]
pub struct Compiler {
    config: Config,
    preamble: Preamble,
    header: Header,
    exercises: Vec<Exercise>,
}

impl Compiler {
    /// Construct the pipeline for one run.
    ///
    /// Fails with [`DraftError::MissingHeader`] when the configuration has no
    /// header; this is always fatal and happens before anything is compiled
    /// or written. May prompt for the exercise selection, which is then
    /// applied to the configuration exactly once.
    pub fn new(
        mut config: Config,
        store: &dyn TemplateStore,
        prompter: &mut dyn Prompter,
    ) -> Result<Self> {
        let header_name = config.header.clone().ok_or(DraftError::MissingHeader)?;

        let preamble = Preamble::new(store.preamble(&config.preamble)?)?;
        let header = Header::new(store.header(&header_name)?)?;

        if config.exercise_selection().is_none() {
            let selection = selection::prompt_for_exercises(&config, store, prompter)?;
            config.apply_exercise_selection(selection)?;
        }

        let mut exercises = selection::expand_exercises(&config, store)?;
        disambiguate::assign_suffixes(&mut exercises, &config);

        Ok(Self {
            config,
            preamble,
            header,
            exercises,
        })
    }

    /// The configuration driving this run, selection included.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The exercise instances to be compiled. The order is fixed for this
    /// run but is not a guarantee; only per-name suffix ordering is.
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn preamble(&self) -> &Preamble {
        &self.preamble
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Compile the document: preamble and header first, then every exercise
    /// and its supplements, in a single sequential pass.
    pub fn compile(
        &mut self,
        prompter: &mut dyn Prompter,
        sink: &mut dyn OutputSink,
    ) -> Result<()> {
        println!(
            "Drafting new {} with {} preamble...",
            self.header.name(),
            self.preamble.name()
        );

        if self.preamble.will_prompt(&self.config) {
            rule("preamble");
        }
        self.preamble.resolve_placeholders(&self.config, prompter)?;
        println!("==> Compiled preamble");

        if self.header.will_prompt(&self.config) {
            rule("header");
        }
        self.header.resolve_placeholders(&self.config, prompter)?;
        println!("==> Compiled header");

        rule("exercises");
        let unique = self.config.unique_exercise_placeholders;
        for exercise in &mut self.exercises {
            let display = exercise.disambiguated_name();
            if display != exercise.name() {
                println!("{}{} ({})", exercise.name(), exercise.extension(), display);
            } else {
                println!("{}{}", exercise.name(), exercise.extension());
            }

            exercise.resolve_placeholders(&self.config, prompter)?;
            exercise.rename_supplements();
            println!("==> Compiled exercise");

            for index in 0..exercise.supplement_count() {
                let output = exercise.resolve_supplement(index, &self.config, unique, prompter)?;
                sink.write_supplement(&output.filename, &output.contents)?;
                println!("==> Wrote {}", output.filename);
            }

            exercise.clean_resolve_placeholders();
        }

        Ok(())
    }
}

/// Print a section rule before a block of interactive questions.
fn rule(title: &str) {
    println!();
    println!("---- {} ----", title);
}
