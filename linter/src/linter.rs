//! PylintLinter facade — the lint operation the host calls.

use std::path::MAIN_SEPARATOR;

use pylint_bridge_types::{Diagnostic, Document};

use crate::analyzer::{Analyzer, AnalyzerError};
use crate::cache::DiagnosticsCache;
use crate::report;

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),
    #[error("pylint produced a malformed JSON report")]
    MalformedReport(#[source] serde_json::Error),
}

/// Pylint's argument splitter treats backslashes as escape sequences, so on
/// a backslash-separator platform every backslash becomes a forward slash
/// before the path goes on the command line. The cache keeps the original
/// path.
fn normalize_invocation_path(path: &str) -> String {
    if MAIN_SEPARATOR == '\\' {
        path.replace('\\', "/")
    } else {
        path.to_string()
    }
}

/// Adapter between the host's lint hook and pylint.
///
/// Owns its analyzer and its cache — two independent linters share nothing,
/// and `&mut self` on [`lint`](Self::lint) serializes access per instance.
pub struct PylintLinter<A> {
    analyzer: A,
    cache: DiagnosticsCache,
}

impl<A: Analyzer> PylintLinter<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            cache: DiagnosticsCache::new(),
        }
    }

    /// Lint `document`, or replay the last result when it isn't saved.
    ///
    /// Pylint can only analyze content that has been saved to disk. Rather
    /// than return nothing for an unsaved document — which would clear any
    /// previously shown diagnostics until the next save — the previous
    /// (possibly stale) diagnostics for that path are returned unchanged.
    ///
    /// Analyzer launch failures and malformed reports propagate; there is
    /// no retry and no partial result.
    pub async fn lint(
        &mut self,
        document: &Document,
        is_saved: bool,
    ) -> Result<Vec<Diagnostic>, LintError> {
        tracing::debug!(path = %document.path().display(), "Running pylint");

        if !is_saved {
            tracing::debug!("Document not saved to disk, returning cached diagnostics");
            return Ok(self.cache.get(document.path()));
        }

        let arg = normalize_invocation_path(&document.path().to_string_lossy());
        let raw = self.analyzer.analyze(&arg).await?;

        // Pylint prints nothing rather than [] when there are no findings.
        if raw.is_empty() {
            self.cache.insert(document.path().to_path_buf(), Vec::new());
            return Ok(Vec::new());
        }

        let messages = report::parse(&raw).map_err(LintError::MalformedReport)?;
        let diagnostics: Vec<Diagnostic> = messages
            .iter()
            .map(|msg| msg.to_diagnostic(document))
            .collect();

        tracing::debug!(
            path = %document.path().display(),
            count = diagnostics.len(),
            "Diagnostics updated"
        );
        self.cache
            .insert(document.path().to_path_buf(), diagnostics.clone());
        Ok(diagnostics)
    }
}
