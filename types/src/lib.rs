//! Core domain types for pylint-bridge — no IO, no async.

mod diagnostic;
mod document;

pub use diagnostic::{Diagnostic, DiagnosticSeverity, Position, Range};
pub use document::Document;
