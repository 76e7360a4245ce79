//! Build-time utilities shared by the Hare grammar build script.
//!
//! The Hare parser is generated by the tree-sitter CLI from
//! `grammar/grammar.js`. The build script compiles the generated sources
//! checked in under `grammar/src`, unless the operator points it at a
//! freshly generated directory instead.

use std::path::{Path, PathBuf};

/// Environment variable naming a directory of generated parser sources.
pub const SOURCE_OVERRIDE_VAR: &str = "TREE_SITTER_HARE_SRC";

const PARSER_FILE: &str = "parser.c";
const SCANNER_FILE: &str = "scanner.c";
const CRATE_LOCAL_SRC: &str = "grammar/src";

/// Generated parser sources ready to hand to the C compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserSources {
    src_dir: PathBuf,
    parser: PathBuf,
    scanner: Option<PathBuf>,
}

impl ParserSources {
    fn from_dir(src_dir: &Path) -> Option<Self> {
        let parser = src_dir.join(PARSER_FILE);
        if !parser.is_file() {
            return None;
        }
        let scanner = Some(src_dir.join(SCANNER_FILE)).filter(|path| path.is_file());
        Some(Self {
            src_dir: src_dir.to_path_buf(),
            parser,
            scanner,
        })
    }

    /// Directory holding `parser.c` and the `tree_sitter/` headers.
    #[must_use]
    pub fn src_dir(&self) -> &Path {
        &self.src_dir
    }

    /// Path to the generated `parser.c`.
    #[must_use]
    pub fn parser(&self) -> &Path {
        &self.parser
    }

    /// Path to a hand-written external scanner, when the grammar has one.
    #[must_use]
    pub fn scanner(&self) -> Option<&Path> {
        self.scanner.as_deref()
    }
}

/// Locate generated parser sources for the crate rooted at `manifest_dir`.
///
/// An override directory wins when it contains `parser.c`. An override
/// that does not is reported through `warnings` and the crate-local
/// `grammar/src` directory is tried instead. Returns `None` when neither
/// location has a generated parser.
///
/// Warnings are collected without the `cargo:warning=` prefix so the caller
/// can decide how to emit them.
///
/// # Examples
/// ```
/// use hare_build_util::locate_parser_sources;
///
/// let dir = tempfile::tempdir().expect("tempdir");
/// let mut warnings = Vec::new();
/// let sources = locate_parser_sources(dir.path(), None, &mut warnings);
///
/// assert!(sources.is_none());
/// assert!(warnings.is_empty());
/// ```
pub fn locate_parser_sources(
    manifest_dir: &Path,
    override_dir: Option<&Path>,
    warnings: &mut Vec<String>,
) -> Option<ParserSources> {
    if let Some(dir) = override_dir {
        if let Some(sources) = ParserSources::from_dir(dir) {
            return Some(sources);
        }
        warnings.push(format!(
            "{SOURCE_OVERRIDE_VAR}={} has no {PARSER_FILE}; falling back to {CRATE_LOCAL_SRC}",
            dir.display()
        ));
    }

    ParserSources::from_dir(&manifest_dir.join(CRATE_LOCAL_SRC))
}
