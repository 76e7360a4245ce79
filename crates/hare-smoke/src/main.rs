//! CLI entrypoint for the Hare grammar smoke check.
//!
//! The binary delegates to [`hare_smoke::run`], which parses arguments,
//! installs telemetry, and verifies the linked grammar.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    hare_smoke::run(std::env::args_os(), &mut stdout, &mut stderr)
}
