//! Hare language support for the [tree-sitter] parsing library.
//!
//! Hand [`LANGUAGE`] to a tree-sitter parser:
//!
//! ```ignore
//! let mut parser = tree_sitter::Parser::new();
//! parser
//!     .set_language(&tree_sitter_hare::LANGUAGE.into())
//!     .expect("Error loading Hare grammar");
//! ```
//!
//! [tree-sitter]: https://tree-sitter.github.io/

use tree_sitter_language::LanguageFn;

unsafe extern "C" {
    fn tree_sitter_hare() -> *const ();
}

/// The tree-sitter [`LanguageFn`] for the Hare grammar.
// SAFETY: `tree_sitter_hare` is the generated constructor, which takes no
// arguments and returns a pointer to a static `TSLanguage`.
pub const LANGUAGE: LanguageFn = unsafe { LanguageFn::from_raw(tree_sitter_hare) };

/// The tree-sitter grammar name. The native entry point is `tree_sitter_<name>`.
pub const GRAMMAR_NAME: &str = "hare";

/// The grammar description the parser is generated from.
pub const GRAMMAR: &str = include_str!("../grammar/grammar.js");

/// The content of the [`node-types.json`][] file for this grammar.
///
/// [`node-types.json`]: https://tree-sitter.github.io/tree-sitter/using-parsers/6-static-node-types
pub const NODE_TYPES: &str = include_str!("../grammar/src/node-types.json");
