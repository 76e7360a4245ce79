//! Load smoke checks for the Hare tree-sitter grammar.
//!
//! The grammar itself is native code linked by the `tree-sitter-hare`
//! crate. This crate asks it for a language handle through the
//! [`GrammarLoader`] seam and checks the answer:
//!
//! - [`verify_grammar_loads`] passes if and only if the loader returns a
//!   non-null handle that the tree-sitter runtime accepts. Otherwise it fails
//!   with [`SmokeError::LoadFailure`], whose message is
//!   `Error loading Hare grammar`.
//! - A loader that panics is reported as [`SmokeError::Fault`] instead.
//! - [`verify_repeated_loads`] checks that repeated loads keep returning the
//!   same language.
//! - [`Parser`] parses source samples with a verified grammar and reports
//!   syntax errors with one-based positions.
//!
//! # Example
//!
//! ```
//! use hare_smoke::{NativeLoader, verify_grammar_loads};
//!
//! let grammar = verify_grammar_loads(&NativeLoader::hare()).expect("Error loading Hare grammar");
//! assert_eq!(grammar.grammar(), "Hare");
//! ```

mod cli;
mod error;
mod handle;
mod loader;
mod logging;
mod parser;
mod runner;
pub mod telemetry;
mod verify;

pub use error::{LoadError, SmokeError};
pub use handle::LanguageHandle;
pub use loader::{GrammarLoader, HARE, NativeLoader};
pub use logging::{LogFormat, LogFormatParseError};
pub use parser::{ParseResult, Parser, SyntaxErrorInfo};
pub use runner::{run, run_with_loader};
pub use verify::{VerifiedGrammar, verify_grammar_loads, verify_repeated_loads};

#[cfg(test)]
mod tests;
