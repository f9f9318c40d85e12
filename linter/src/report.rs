//! Serde types for pylint's JSON report.
//!
//! Pylint's JSON output is a list of objects with the following format:
//!
//! ```json
//! {
//!     "obj": "main",
//!     "path": "foo.py",
//!     "message": "Missing function docstring",
//!     "message-id": "C0111",
//!     "symbol": "missing-docstring",
//!     "column": 0,
//!     "type": "convention",
//!     "line": 5,
//!     "module": "foo"
//! }
//! ```
//!
//! Only `line`, `column`, `type`, `symbol` and `message` are consumed.

use serde::Deserialize;

use pylint_bridge_types::{Diagnostic, DiagnosticSeverity, Document, Position, Range};

/// `source` value stamped on every diagnostic this crate produces.
pub const DIAGNOSTIC_SOURCE: &str = "pylint";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum MessageKind {
    Convention,
    Error,
    Fatal,
    Refactor,
    Warning,
    /// Pylint's message categories are an open set; anything unrecognized
    /// is downgraded to a warning rather than dropped.
    #[serde(other)]
    Other,
}

impl MessageKind {
    pub fn severity(self) -> DiagnosticSeverity {
        match self {
            Self::Convention => DiagnosticSeverity::Information,
            Self::Error | Self::Fatal => DiagnosticSeverity::Error,
            Self::Refactor => DiagnosticSeverity::Hint,
            Self::Warning | Self::Other => DiagnosticSeverity::Warning,
        }
    }
}

/// One finding from the report. Unconsumed fields are ignored by serde.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PylintMessage {
    /// 1-indexed line.
    pub line: u32,
    /// 0-indexed column.
    pub column: u32,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub symbol: String,
    pub message: String,
}

impl PylintMessage {
    /// Translate into the host diagnostic shape.
    ///
    /// Pylint lines index from 1, the host indexes from 0; both index
    /// columns from 0. The range runs to the end of the flagged line as the
    /// host holds it.
    pub fn to_diagnostic(&self, document: &Document) -> Diagnostic {
        let line = self.line.saturating_sub(1);
        let range = Range::new(
            Position::new(line, self.column),
            Position::new(line, document.line_len(line)),
        );
        Diagnostic::new(
            DIAGNOSTIC_SOURCE.to_string(),
            range,
            format!("[{}] {}", self.symbol, self.message),
            self.kind.severity(),
        )
    }
}

pub(crate) fn parse(bytes: &[u8]) -> Result<Vec<PylintMessage>, serde_json::Error> {
    serde_json::from_slice(bytes)
}
