//! Command-line interface for the `hare-smoke` runner.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::logging::LogFormat;

/// Checks that the Hare tree-sitter grammar loads and, optionally, parses a sample.
#[derive(Parser, Debug)]
#[command(name = "hare-smoke", version)]
pub(crate) struct Cli {
    /// Number of times to load the grammar; every load must return the same language.
    #[arg(long, env = "HARE_SMOKE_REPEAT", default_value = "1", value_name = "N")]
    pub(crate) repeat: NonZeroUsize,
    /// Hare source file to parse once the grammar has loaded.
    #[arg(long, env = "HARE_SMOKE_SAMPLE", value_name = "PATH")]
    pub(crate) sample: Option<PathBuf>,
    /// Tracing filter directives, for example `hare_smoke=debug`.
    #[arg(
        long,
        env = "HARE_SMOKE_LOG",
        default_value = "warn",
        value_name = "FILTER"
    )]
    pub(crate) log_filter: String,
    /// Log output format (`json` or `compact`).
    #[arg(long, env = "HARE_SMOKE_LOG_FORMAT", default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
}
