//! Template discovery and loading.
//!
//! Templates live in a root directory with three subdirectories:
//!
//! - `headers/` - header fragments
//! - `preambles/` - preamble fragments
//! - `exercises/` - exercise fragments and their supplemental files
//!
//! Header, preamble, and exercise templates are `.tex` files addressed by
//! their file stem. Within `exercises/`, any sibling file that shares an
//! exercise's stem but has a different extension is a supplemental file of
//! that exercise (for example `intervals.tex` with `intervals.ly`).

use crate::error::{DraftError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name for header templates.
pub const HEADERS_DIR: &str = "headers";

/// Directory name for preamble templates.
pub const PREAMBLES_DIR: &str = "preambles";

/// Directory name for exercise templates.
pub const EXERCISES_DIR: &str = "exercises";

/// Extension of the main template file of every fragment kind.
pub const TEMPLATE_EXTENSION: &str = ".tex";

/// A loaded template: raw text plus the identity needed to build a fragment.
#[derive(Debug, Clone)]
pub struct Template {
    /// The template's name (file stem).
    pub name: String,
    /// Source path the text was loaded from.
    pub path: PathBuf,
    /// File extension including the leading dot (e.g. `.tex`).
    pub extension: String,
    /// Raw template text with unresolved placeholders.
    pub text: String,
}

/// Source of template text for the compilation pipeline.
///
/// The pipeline only ever reads through this trait, so tests can substitute
/// an in-memory store and the on-disk layout stays a detail of
/// [`FsTemplateStore`].
pub trait TemplateStore {
    /// Load a header template by name.
    fn header(&self, name: &str) -> Result<Template>;

    /// Load a preamble template by name.
    fn preamble(&self, name: &str) -> Result<Template>;

    /// Load an exercise template from its recorded path.
    fn exercise(&self, path: &Path) -> Result<Template>;

    /// Path of the exercise template with the given name.
    fn exercise_path(&self, name: &str) -> Result<PathBuf>;

    /// Names of all available exercise templates, sorted.
    fn exercise_names(&self) -> Result<Vec<String>>;

    /// Supplemental files belonging to the exercise template at `path`.
    fn supplements(&self, path: &Path) -> Result<Vec<Template>>;
}

/// Filesystem-backed template store.
#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    root: PathBuf,
}

impl FsTemplateStore {
    /// Create a store rooted at `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of all available header templates, sorted.
    pub fn header_names(&self) -> Result<Vec<String>> {
        self.template_names(HEADERS_DIR)
    }

    /// Names of all available preamble templates, sorted.
    pub fn preamble_names(&self) -> Result<Vec<String>> {
        self.template_names(PREAMBLES_DIR)
    }

    fn fragment(&self, dir: &str, name: &str) -> Result<Template> {
        let path = self
            .root
            .join(dir)
            .join(format!("{}{}", name, TEMPLATE_EXTENSION));
        if !path.is_file() {
            return Err(DraftError::TemplateError(format!(
                "no template '{}' in {}",
                name,
                self.root.join(dir).display()
            )));
        }
        load_template(&path)
    }

    fn template_names(&self, dir: &str) -> Result<Vec<String>> {
        let dir = self.root.join(dir);
        let entries = fs::read_dir(&dir).map_err(|e| {
            DraftError::TemplateError(format!(
                "failed to read template directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                DraftError::TemplateError(format!(
                    "failed to read template directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
            let path = entry.path();
            if path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some("tex")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl TemplateStore for FsTemplateStore {
    fn header(&self, name: &str) -> Result<Template> {
        self.fragment(HEADERS_DIR, name)
    }

    fn preamble(&self, name: &str) -> Result<Template> {
        self.fragment(PREAMBLES_DIR, name)
    }

    fn exercise(&self, path: &Path) -> Result<Template> {
        if !path.is_file() {
            return Err(DraftError::TemplateError(format!(
                "exercise template '{}' does not exist",
                path.display()
            )));
        }
        load_template(path)
    }

    fn exercise_path(&self, name: &str) -> Result<PathBuf> {
        let path = self
            .root
            .join(EXERCISES_DIR)
            .join(format!("{}{}", name, TEMPLATE_EXTENSION));
        if !path.is_file() {
            return Err(DraftError::TemplateError(format!(
                "no exercise template '{}' in {}",
                name,
                self.root.join(EXERCISES_DIR).display()
            )));
        }
        Ok(path)
    }

    fn exercise_names(&self) -> Result<Vec<String>> {
        self.template_names(EXERCISES_DIR)
    }

    fn supplements(&self, path: &Path) -> Result<Vec<Template>> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                DraftError::TemplateError(format!(
                    "exercise template '{}' has no usable file stem",
                    path.display()
                ))
            })?
            .to_string();
        let dir = path.parent().unwrap_or(Path::new("."));

        let entries = fs::read_dir(dir).map_err(|e| {
            DraftError::TemplateError(format!(
                "failed to read exercise directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let mut supplements = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                DraftError::TemplateError(format!(
                    "failed to read exercise directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
            let candidate = entry.path();
            if candidate.is_file()
                && candidate.file_stem().and_then(|s| s.to_str()) == Some(stem.as_str())
                && candidate != *path
            {
                supplements.push(load_template(&candidate)?);
            }
        }
        // Deterministic order per exercise.
        supplements.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(supplements)
    }
}

/// Load a template file, deriving name and extension from the path.
fn load_template(path: &Path) -> Result<Template> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            DraftError::TemplateError(format!(
                "template path '{}' has no usable file stem",
                path.display()
            ))
        })?
        .to_string();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();

    let text = fs::read_to_string(path).map_err(|e| {
        DraftError::TemplateError(format!(
            "failed to read template '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(Template {
        name,
        path: path.to_path_buf(),
        extension,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scaffold() -> TempDir {
        let dir = TempDir::new().unwrap();
        for sub in [HEADERS_DIR, PREAMBLES_DIR, EXERCISES_DIR] {
            fs::create_dir(dir.path().join(sub)).unwrap();
        }
        fs::write(
            dir.path().join(HEADERS_DIR).join("worksheet.tex"),
            "\\header{<<course>>}",
        )
        .unwrap();
        fs::write(
            dir.path().join(PREAMBLES_DIR).join("default.tex"),
            "\\usepackage{amsmath}",
        )
        .unwrap();
        fs::write(
            dir.path().join(EXERCISES_DIR).join("intervals.tex"),
            "\\section{Intervals}",
        )
        .unwrap();
        fs::write(
            dir.path().join(EXERCISES_DIR).join("intervals.ly"),
            "\\relative c' { <<motif>> }",
        )
        .unwrap();
        fs::write(
            dir.path().join(EXERCISES_DIR).join("chords.tex"),
            "\\section{Chords}",
        )
        .unwrap();
        dir
    }

    #[test]
    fn loads_header_by_name() {
        let dir = scaffold();
        let store = FsTemplateStore::new(dir.path());

        let template = store.header("worksheet").unwrap();
        assert_eq!(template.name, "worksheet");
        assert_eq!(template.extension, ".tex");
        assert_eq!(template.text, "\\header{<<course>>}");
    }

    #[test]
    fn loads_preamble_by_name() {
        let dir = scaffold();
        let store = FsTemplateStore::new(dir.path());

        let template = store.preamble("default").unwrap();
        assert_eq!(template.name, "default");
    }

    #[test]
    fn unknown_header_is_a_template_error() {
        let dir = scaffold();
        let store = FsTemplateStore::new(dir.path());

        let err = store.header("missing").unwrap_err();
        assert!(matches!(err, DraftError::TemplateError(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn exercise_names_are_sorted_stems() {
        let dir = scaffold();
        let store = FsTemplateStore::new(dir.path());

        let names = store.exercise_names().unwrap();
        assert_eq!(names, vec!["chords".to_string(), "intervals".to_string()]);
    }

    #[test]
    fn exercise_path_resolves_to_tex_file() {
        let dir = scaffold();
        let store = FsTemplateStore::new(dir.path());

        let path = store.exercise_path("intervals").unwrap();
        assert!(path.ends_with("exercises/intervals.tex"));
        assert!(store.exercise(&path).is_ok());
    }

    #[test]
    fn supplements_share_the_stem_but_not_the_template_file() {
        let dir = scaffold();
        let store = FsTemplateStore::new(dir.path());

        let path = store.exercise_path("intervals").unwrap();
        let supplements = store.supplements(&path).unwrap();
        assert_eq!(supplements.len(), 1);
        assert_eq!(supplements[0].name, "intervals");
        assert_eq!(supplements[0].extension, ".ly");
    }

    #[test]
    fn exercise_without_siblings_has_no_supplements() {
        let dir = scaffold();
        let store = FsTemplateStore::new(dir.path());

        let path = store.exercise_path("chords").unwrap();
        let supplements = store.supplements(&path).unwrap();
        assert!(supplements.is_empty());
    }

    #[test]
    fn header_names_lists_stems() {
        let dir = scaffold();
        let store = FsTemplateStore::new(dir.path());

        assert_eq!(store.header_names().unwrap(), vec!["worksheet".to_string()]);
        assert_eq!(store.preamble_names().unwrap(), vec!["default".to_string()]);
    }
}
