//! pylint-bridge CLI — lints files with pylint and prints host-shaped
//! diagnostics.
//!
//! This is the standalone driver for the adapter that otherwise lives inside
//! a language-server host: every file named on the command line is read,
//! linted through [`PylintLinter`], and its diagnostics printed one per line.
//! Exits non-zero when any error-severity diagnostic was reported.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pylint_bridge_linter::{PylintAnalyzer, PylintConfig, PylintLinter};
use pylint_bridge_types::{DiagnosticSeverity, Document};

const USAGE: &str = "usage: pylint-bridge [--pylint <executable>] [--] <file.py>...";

struct Args {
    config: PylintConfig,
    files: Vec<PathBuf>,
}

fn parse_args(argv: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut argv = argv.into_iter();
    let mut config = PylintConfig::default();
    let mut files = Vec::new();
    let mut positional_only = false;

    while let Some(arg) = argv.next() {
        if positional_only {
            files.push(PathBuf::from(arg));
        } else if arg == "--" {
            positional_only = true;
        } else if arg == "--pylint" {
            config.executable = argv.next().context("--pylint requires an executable name")?;
        } else if arg.starts_with('-') && arg != "-" {
            bail!("unknown option '{arg}'\n{USAGE}");
        } else {
            files.push(PathBuf::from(arg));
        }
    }

    if files.is_empty() {
        bail!("no files given\n{USAGE}");
    }
    Ok(Args { config, files })
}

fn init_tracing() {
    // Diagnostics go to stdout; keep logs on stderr so output stays parseable.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    init_tracing();

    let args = parse_args(env::args().skip(1))?;
    let mut linter = PylintLinter::new(PylintAnalyzer::new(args.config));

    let mut errors = 0usize;
    let mut warnings = 0usize;
    for path in &args.files {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let document = Document::from_text(path.clone(), &text);

        let diagnostics = linter
            .lint(&document, true)
            .await
            .with_context(|| format!("linting {}", path.display()))?;
        tracing::debug!(path = %path.display(), count = diagnostics.len(), "Linted file");

        for diag in &diagnostics {
            println!("{}", diag.display_with_path(path));
            if diag.severity().is_error() {
                errors += 1;
            } else if diag.severity() == DiagnosticSeverity::Warning {
                warnings += 1;
            }
        }
    }

    if errors + warnings > 0 {
        eprintln!("E:{errors} W:{warnings}");
    }
    Ok(if errors > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_files_only() {
        let args = parse_args(argv(&["a.py", "b.py"])).unwrap();
        assert_eq!(args.files, vec![PathBuf::from("a.py"), PathBuf::from("b.py")]);
        assert_eq!(args.config.executable, "pylint");
    }

    #[test]
    fn test_parse_pylint_override() {
        let args = parse_args(argv(&["--pylint", "/opt/venv/bin/pylint", "a.py"])).unwrap();
        assert_eq!(args.config.executable, "/opt/venv/bin/pylint");
        assert_eq!(args.files, vec![PathBuf::from("a.py")]);
    }

    #[test]
    fn test_parse_double_dash_ends_options() {
        let args = parse_args(argv(&["--", "--pylint"])).unwrap();
        assert_eq!(args.files, vec![PathBuf::from("--pylint")]);
    }

    #[test]
    fn test_parse_rejects_unknown_option() {
        assert!(parse_args(argv(&["--frobnicate", "a.py"])).is_err());
    }

    #[test]
    fn test_parse_requires_files() {
        assert!(parse_args(argv(&[])).is_err());
    }

    #[test]
    fn test_parse_pylint_requires_value() {
        assert!(parse_args(argv(&["--pylint"])).is_err());
    }
}
