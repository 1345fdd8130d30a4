//! Template text handling for draft.
//!
//! `engine` scans and substitutes `<<name>>` placeholders inside fragment
//! text; `store` locates template files on disk and exposes them behind the
//! `TemplateStore` trait.

pub mod engine;
pub mod store;

pub use engine::{TemplateError, placeholders, render};
pub use store::{FsTemplateStore, Template, TemplateStore};
