//! Placeholder engine for template fragments.
//!
//! Fragments mark the slots that must be bound before they can be emitted
//! with `<<name>>`. The engine is fail-safe: a placeholder without a value
//! causes an error rather than silent substitution with an empty string, and
//! malformed delimiters are rejected when a fragment is constructed. A single
//! `<` or a lone `>` is ordinary text, so LaTeX sources pass through
//! untouched.

use std::collections::BTreeMap;
use std::fmt;

/// Error type for placeholder scanning and rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder was referenced but no value was provided.
    UndefinedPlaceholder {
        /// The name of the unbound placeholder.
        name: String,
        /// The position in the template where the placeholder opens.
        position: usize,
    },
    /// A `<<` was found without a closing `>>`.
    UnmatchedDelimiter {
        /// The position of the unmatched `<<`.
        position: usize,
    },
    /// An empty placeholder name was found (e.g. `<<>>`).
    EmptyPlaceholderName {
        /// The position of the empty placeholder.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedPlaceholder { name, position } => {
                write!(
                    f,
                    "no value for placeholder '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnmatchedDelimiter { position } => {
                write!(f, "unmatched '<<' at position {} in template", position)
            }
            TemplateError::EmptyPlaceholderName { position } => {
                write!(
                    f,
                    "empty placeholder name '<<>>' at position {} in template",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// A scanned piece of template text.
enum Piece<'a> {
    Literal(&'a str),
    Placeholder { name: &'a str, position: usize },
}

/// Scan a template into literal runs and placeholders.
fn scan(template: &str) -> Result<Vec<Piece<'_>>, TemplateError> {
    let mut pieces = Vec::new();
    let mut literal_start = 0;
    let bytes = template.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'<' && bytes.get(i + 1) == Some(&b'<') {
            if literal_start < i {
                pieces.push(Piece::Literal(&template[literal_start..i]));
            }

            // Find the closing `>>` for the placeholder opened at `i`.
            let body_start = i + 2;
            let close = template[body_start..]
                .find(">>")
                .ok_or(TemplateError::UnmatchedDelimiter { position: i })?;

            let name = template[body_start..body_start + close].trim();
            if name.is_empty() {
                return Err(TemplateError::EmptyPlaceholderName { position: i });
            }

            pieces.push(Piece::Placeholder { name, position: i });
            i = body_start + close + 2;
            literal_start = i;
        } else {
            i += 1;
        }
    }

    if literal_start < template.len() {
        pieces.push(Piece::Literal(&template[literal_start..]));
    }

    Ok(pieces)
}

/// List the placeholder names in a template, in order of first appearance,
/// without duplicates.
pub fn placeholders(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut names: Vec<String> = Vec::new();
    for piece in scan(template)? {
        if let Piece::Placeholder { name, .. } = piece
            && !names.iter().any(|n| n == name)
        {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

/// Render a template by substituting every placeholder from `values`.
///
/// Returns `TemplateError::UndefinedPlaceholder` if any placeholder has no
/// value; the pipeline prevents this by prompting for missing values first.
pub fn render(
    template: &str,
    values: &BTreeMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    for piece in scan(template)? {
        match piece {
            Piece::Literal(text) => result.push_str(text),
            Piece::Placeholder { name, position } => match values.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedPlaceholder {
                        name: name.to_string(),
                        position,
                    });
                }
            },
        }
    }
    Ok(result)
}
