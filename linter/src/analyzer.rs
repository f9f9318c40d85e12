//! Analyzer capability — pylint invocation behind a one-method trait.
//!
//! [`PylintLinter`](crate::PylintLinter) talks to pylint only through
//! [`Analyzer`], so lint logic stays unit-testable without spawning a
//! real process.

use std::future::Future;
use std::io;
use std::process::Stdio;

use serde::Deserialize;
use tokio::process::Command;

/// Exit-status bit pylint sets when it was invoked incorrectly.
///
/// The other bits (1, 2, 4, 8, 16) only encode which message categories
/// were emitted, so a non-zero exit is not by itself a failure.
const USAGE_ERROR_BIT: i32 = 32;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("'{command}' not found in PATH")]
    NotFound {
        command: String,
        #[source]
        source: which::Error,
    },
    #[error("failed to run pylint")]
    Io(#[from] io::Error),
    #[error("pylint did not run to completion: {stderr}")]
    Failed { stderr: String },
}

/// Configuration for the pylint invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct PylintConfig {
    /// Executable name or path. Default: "pylint".
    #[serde(default = "default_executable")]
    pub executable: String,
    /// Extra flags passed before the file path (e.g. "--disable=C0114").
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_executable() -> String {
    "pylint".to_string()
}

impl Default for PylintConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            args: Vec::new(),
        }
    }
}

/// Capability interface for the external analyzer: run it against an
/// on-disk path and hand back the raw JSON report bytes.
pub trait Analyzer {
    fn analyze(
        &mut self,
        path: &str,
    ) -> impl Future<Output = Result<Vec<u8>, AnalyzerError>> + Send;
}

/// Spawns the real pylint executable and captures its stdout.
#[derive(Debug)]
pub struct PylintAnalyzer {
    config: PylintConfig,
}

impl PylintAnalyzer {
    #[must_use]
    pub fn new(config: PylintConfig) -> Self {
        Self { config }
    }
}

impl Analyzer for PylintAnalyzer {
    async fn analyze(&mut self, path: &str) -> Result<Vec<u8>, AnalyzerError> {
        let resolved =
            which::which(&self.config.executable).map_err(|source| AnalyzerError::NotFound {
                command: self.config.executable.clone(),
                source,
            })?;

        let mut cmd = Command::new(&resolved);
        cmd.arg("--output-format=json")
            // Pylint persists per-file stats between runs; clear them so no
            // stale cross-file state leaks into the next run, as its docs
            // recommend.
            .arg("--clear-cache-post-run=y")
            .args(&self.config.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        tracing::debug!(command = %resolved.display(), path, "Invoking pylint");
        let output = cmd.output().await?;

        // A signal-killed child reports no exit code; that run did not
        // complete and must not read as a clean result.
        if output.status.code().is_none_or(|code| code & USAGE_ERROR_BIT != 0) {
            return Err(AnalyzerError::Failed {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output.stdout)
    }
}
