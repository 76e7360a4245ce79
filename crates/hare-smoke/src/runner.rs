//! Runs the smoke check from command-line arguments.
//!
//! Exit codes: 0 when the grammar loads (and any sample parses cleanly),
//! 1 for load failures, unstable handles and sample problems, 2 when the
//! loader faulted, and 64 for usage or configuration errors.

use std::error::Error as _;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as _;
use thiserror::Error;
use tracing::debug;

use crate::cli::Cli;
use crate::error::SmokeError;
use crate::loader::{GrammarLoader, NativeLoader};
use crate::parser::SyntaxErrorInfo;
use crate::telemetry::{self, TelemetryError};
use crate::verify::{VerifiedGrammar, verify_repeated_loads};

const EXIT_SUCCESS: u8 = 0;
const EXIT_LOAD_FAILURE: u8 = 1;
const EXIT_FAULT: u8 = 2;
const EXIT_USAGE: u8 = 64;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("failed to configure telemetry")]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Smoke(#[from] SmokeError),
    #[error("failed to read sample {}", path.display())]
    ReadSample { path: PathBuf, source: io::Error },
    #[error("sample {} has {} syntax error(s)", path.display(), errors.len())]
    SampleErrors {
        path: PathBuf,
        errors: Vec<SyntaxErrorInfo>,
    },
    #[error("failed to write output: {0}")]
    Output(io::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Telemetry(_) => EXIT_USAGE,
            Self::Smoke(error) if error.is_fault() => EXIT_FAULT,
            _ => EXIT_LOAD_FAILURE,
        }
    }
}

/// Parses `args` and verifies the Hare grammar.
///
/// Results go to `stdout`; errors and usage problems go to `stderr`.
pub fn run<I, T, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
    E: Write,
{
    run_with_loader(args, &NativeLoader::hare(), stdout, stderr)
}

/// Like [`run`], but verifies the grammar supplied by `loader`.
pub fn run_with_loader<I, T, L, W, E>(
    args: I,
    loader: &L,
    stdout: &mut W,
    stderr: &mut E,
) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    L: GrammarLoader + ?Sized,
    W: Write,
    E: Write,
{
    ExitCode::from(dispatch(args, loader, stdout, stderr))
}

pub(crate) fn dispatch<I, T, L, W, E>(args: I, loader: &L, stdout: &mut W, stderr: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    L: GrammarLoader + ?Sized,
    W: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => return report_usage(&error, stdout, stderr),
    };

    match execute(&cli, loader, stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => report(&error, stderr),
    }
}

fn execute<L, W>(cli: &Cli, loader: &L, stdout: &mut W) -> Result<(), CliError>
where
    L: GrammarLoader + ?Sized,
    W: Write,
{
    telemetry::initialise(&cli.log_filter, cli.log_format)?;

    let verified = verify_repeated_loads(loader, cli.repeat)?;
    writeln!(
        stdout,
        "{} grammar loaded (ABI {}, {} node kinds)",
        verified.grammar(),
        verified.abi_version(),
        verified.node_kind_count()
    )
    .map_err(CliError::Output)?;

    if let Some(path) = &cli.sample {
        check_sample(&verified, path, stdout)?;
    }
    Ok(())
}

fn check_sample<W: Write>(
    verified: &VerifiedGrammar<'_>,
    path: &Path,
    stdout: &mut W,
) -> Result<(), CliError> {
    let source = fs::read_to_string(path).map_err(|source| CliError::ReadSample {
        path: path.to_path_buf(),
        source,
    })?;

    let mut parser = verified.parser()?;
    let result = parser.parse(&source)?;
    debug!(
        grammar = result.grammar(),
        root = result.root_node().kind(),
        "parsed sample"
    );
    if result.has_errors() {
        return Err(CliError::SampleErrors {
            path: path.to_path_buf(),
            errors: result.errors(),
        });
    }

    writeln!(stdout, "parsed {} without errors", path.display()).map_err(CliError::Output)
}

fn report_usage<W: Write, E: Write>(error: &clap::Error, stdout: &mut W, stderr: &mut E) -> u8 {
    let rendered = error.render().to_string();
    if error.use_stderr() {
        emit(stderr, &rendered, EXIT_USAGE)
    } else {
        emit(stdout, &rendered, EXIT_SUCCESS)
    }
}

fn report<E: Write>(error: &CliError, stderr: &mut E) -> u8 {
    let mut lines = vec![error.to_string()];

    let mut cause = error.source();
    while let Some(inner) = cause {
        lines.push(format!("  caused by: {inner}"));
        cause = inner.source();
    }

    if let CliError::SampleErrors { errors, .. } = error {
        lines.extend(errors.iter().map(|info| {
            format!(
                "  {}:{}: {} near `{}`",
                info.line, info.column, info.message, info.context
            )
        }));
    }

    lines.push(String::new());
    emit(stderr, &lines.join("\n"), error.exit_code())
}

fn emit<W: Write>(writer: &mut W, text: &str, code: u8) -> u8 {
    match writer.write_all(text.as_bytes()).and_then(|()| writer.flush()) {
        Ok(()) => code,
        Err(_) => EXIT_LOAD_FAILURE,
    }
}
