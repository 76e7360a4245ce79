//! Parsing source samples with a loaded grammar.
//!
//! Loading proves the language handle is usable; parsing a real sample shows
//! the generated tables work end to end. Tree-sitter is error-tolerant, so a
//! sample with mistakes still yields a tree whose ERROR and MISSING nodes are
//! reported as [`SyntaxErrorInfo`] records.

use std::ops::Range;

use crate::error::{LoadError, SmokeError};
use crate::handle::LanguageHandle;

const CONTEXT_LIMIT: usize = 50;

/// Result of parsing a source sample.
#[derive(Debug)]
pub struct ParseResult {
    tree: tree_sitter::Tree,
    source: String,
    grammar: String,
}

impl ParseResult {
    /// Returns the display name of the grammar used.
    #[must_use]
    pub fn grammar(&self) -> &str {
        &self.grammar
    }

    /// Returns whether the tree contains any ERROR or MISSING nodes.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Collects all syntax errors in document order.
    #[must_use]
    pub fn errors(&self) -> Vec<SyntaxErrorInfo> {
        let mut errors = Vec::new();
        collect_error_nodes(self.tree.root_node(), &self.source, &mut errors);
        errors
    }

    /// Returns the root node of the syntax tree.
    #[must_use]
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }
}

/// A syntax error found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Byte range of the error in the source.
    pub byte_range: Range<usize>,
    /// Line number (one-based) where the error starts.
    pub line: u32,
    /// Column number (one-based) where the error starts.
    pub column: u32,
    /// A snippet of the problematic source text.
    pub context: String,
    /// Human-readable description of the error.
    pub message: String,
}

impl SyntaxErrorInfo {
    fn from_node(node: tree_sitter::Node<'_>, source: &str) -> Self {
        let byte_range = node.byte_range();
        let context = source
            .get(byte_range.clone())
            .map(truncate_context)
            .unwrap_or_default();

        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "syntax error".to_owned()
        };

        let start = node.start_position();

        Self {
            byte_range,
            line: one_based(start.row),
            column: one_based(start.column),
            context,
            message,
        }
    }
}

fn one_based(index: usize) -> u32 {
    u32::try_from(index.saturating_add(1)).unwrap_or(u32::MAX)
}

fn truncate_context(text: &str) -> String {
    if text.chars().count() > CONTEXT_LIMIT {
        let truncated: String = text.chars().take(CONTEXT_LIMIT - 3).collect();
        format!("{truncated}...")
    } else {
        text.to_owned()
    }
}

/// Tree-sitter parser bound to one loaded grammar.
pub struct Parser {
    inner: tree_sitter::Parser,
    grammar: String,
}

impl Parser {
    /// Creates a parser for the language behind `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`SmokeError::LoadFailure`] if the runtime refuses the
    /// language.
    pub fn from_handle(handle: &LanguageHandle<'_>) -> Result<Self, SmokeError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&handle.to_language())
            .map_err(|e| {
                SmokeError::load_failure(handle.grammar(), LoadError::rejected(e.to_string()))
            })?;

        Ok(Self {
            inner,
            grammar: handle.grammar().to_owned(),
        })
    }

    /// Parses source code and returns the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser produces no tree at all.
    pub fn parse(&mut self, source: &str) -> Result<ParseResult, SmokeError> {
        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| SmokeError::parse(&self.grammar, "parsing failed"))?;

        Ok(ParseResult {
            tree,
            source: source.to_owned(),
            grammar: self.grammar.clone(),
        })
    }
}

fn collect_error_nodes(
    node: tree_sitter::Node<'_>,
    source: &str,
    errors: &mut Vec<SyntaxErrorInfo>,
) {
    if node.is_error() || node.is_missing() {
        errors.push(SyntaxErrorInfo::from_node(node, source));
        return;
    }
    if !node.has_error() {
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_error_nodes(child, source, errors);
    }
}
