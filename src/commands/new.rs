//! The `new` command: compile a document.

use super::{load_config, template_root};
use crate::cli::NewArgs;
use crate::compiler::Compiler;
use crate::error::Result;
use crate::output::DirectorySink;
use crate::prompt::ConsolePrompter;
use crate::template::FsTemplateStore;

/// Compile a new document into the current directory.
pub(super) fn cmd_new(args: NewArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let store = FsTemplateStore::new(template_root(&config, args.templates.as_deref()));

    let mut prompter = ConsolePrompter::new();
    let mut compiler = Compiler::new(config, &store, &mut prompter)?;

    let mut sink = DirectorySink::current_dir();
    compiler.compile(&mut prompter, &mut sink)
}
