//! Per-path diagnostics cache — the last computed result for each document.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use pylint_bridge_types::Diagnostic;

/// Keyed by the document's logical path.
///
/// Entries are overwritten on every successful lint and never evicted. An
/// explicit empty entry means "linted clean", distinct from "never linted";
/// this is why empty results are stored rather than removed.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticsCache {
    data: HashMap<PathBuf, Vec<Diagnostic>>,
}

impl DiagnosticsCache {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Last cached result for `path`; empty if the path was never linted.
    pub fn get(&self, path: &Path) -> Vec<Diagnostic> {
        self.data.get(path).cloned().unwrap_or_default()
    }

    pub fn insert(&mut self, path: PathBuf, items: Vec<Diagnostic>) {
        self.data.insert(path, items);
    }

    #[cfg(test)]
    pub fn contains(&self, path: &Path) -> bool {
        self.data.contains_key(path)
    }
}
