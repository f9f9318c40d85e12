//! Bridges a language-server host to the pylint static analyzer.
//!
//! The host calls [`PylintLinter::lint`] with a document and a saved flag.
//! Saved documents are analyzed on disk by pylint and the JSON report is
//! translated into host-shaped [`pylint_bridge_types::Diagnostic`] records;
//! unsaved documents get the last cached result for that path, since pylint
//! can only see on-disk content.

pub mod analyzer;

pub(crate) mod cache;
pub(crate) mod report;

mod linter;

pub use analyzer::{Analyzer, AnalyzerError, PylintAnalyzer, PylintConfig};
pub use linter::{LintError, PylintLinter};
pub use report::DIAGNOSTIC_SOURCE;
