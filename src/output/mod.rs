//! Output sinks for resolved supplements.
//!
//! The orchestrator hands each resolved supplement to an [`OutputSink`] as
//! one discrete write; overwrite semantics are the sink's responsibility.
//! The default sink writes standalone files into a directory (normally the
//! working directory), and tests collect writes in memory.

use crate::error::Result;
use crate::fs::atomic_write_file;
use std::path::PathBuf;

/// Destination for resolved supplement files.
pub trait OutputSink {
    /// Persist one resolved supplement under `filename`.
    fn write_supplement(&mut self, filename: &str, contents: &str) -> Result<()>;
}

/// Sink that writes each supplement as a file in a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Sink writing into `dir`. Existing files are overwritten.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Sink writing into the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }
}

impl OutputSink for DirectorySink {
    fn write_supplement(&mut self, filename: &str, contents: &str) -> Result<()> {
        atomic_write_file(self.dir.join(filename), contents)
    }
}

/// In-memory sink for tests: records every write in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub writes: Vec<(String, String)>,
}

#[cfg(test)]
impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filenames(&self) -> Vec<&str> {
        self.writes.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn contents_of(&self, filename: &str) -> Option<&str> {
        self.writes
            .iter()
            .find(|(name, _)| name == filename)
            .map(|(_, contents)| contents.as_str())
    }
}

#[cfg(test)]
impl OutputSink for MemorySink {
    fn write_supplement(&mut self, filename: &str, contents: &str) -> Result<()> {
        self.writes
            .push((filename.to_string(), contents.to_string()));
        Ok(())
    }
}
