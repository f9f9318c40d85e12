//! Inbound document shape — a path plus the text the host holds for it.

use std::path::{Path, PathBuf};

/// A document as the host hands it to the linter.
///
/// `lines` reflects the host's in-memory buffer, which may differ from the
/// on-disk content for an unsaved document.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
}

impl Document {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    /// Split `text` into lines (line endings stripped).
    #[must_use]
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self::new(path, text.lines().map(String::from).collect())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Character length of the 0-indexed `line`.
    ///
    /// Counts characters, not bytes. Returns 0 when the document has no
    /// lines or the index is out of range — an empty file can still fail
    /// linting if it isn't named properly.
    #[must_use]
    pub fn line_len(&self, line: u32) -> u32 {
        self.lines
            .get(line as usize)
            .map_or(0, |l| l.chars().count() as u32)
    }
}
