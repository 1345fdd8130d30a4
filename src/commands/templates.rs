//! The `templates` command: list what the template store offers.

use super::{load_config, template_root};
use crate::cli::TemplatesArgs;
use crate::error::Result;
use crate::template::{FsTemplateStore, TemplateStore};

/// Print the available header, preamble, and exercise template names.
pub(super) fn cmd_templates(args: TemplatesArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let store = FsTemplateStore::new(template_root(&config, args.templates.as_deref()));

    println!("Templates in {}:", store.root().display());
    print_section("headers", &store.header_names()?);
    print_section("preambles", &store.preamble_names()?);
    print_section("exercises", &store.exercise_names()?);

    Ok(())
}

fn print_section(title: &str, names: &[String]) {
    println!();
    println!("{}:", title);
    if names.is_empty() {
        println!("  (none)");
        return;
    }
    for name in names {
        println!("  {}", name);
    }
}
