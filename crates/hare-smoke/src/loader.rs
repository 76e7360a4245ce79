//! Grammar loaders.
//!
//! A [`GrammarLoader`] hides where a language comes from. Verification only
//! talks to this trait, so tests can substitute another grammar, a null
//! entry point, or a loader that panics without linking the Hare library.

use std::fmt;

use tree_sitter_language::LanguageFn;

use crate::error::LoadError;
use crate::handle::LanguageHandle;

/// Display name of the Hare grammar.
pub const HARE: &str = "Hare";

/// A capability that yields a read-only language handle for one grammar.
pub trait GrammarLoader {
    /// Display name used in messages, for example `Hare`.
    fn grammar(&self) -> &str;

    /// Loads the grammar and returns a handle borrowed from the library.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] when no usable handle can be produced.
    fn load(&self) -> Result<LanguageHandle<'_>, LoadError>;
}

/// Loads a grammar through a linked native entry point.
#[derive(Clone, Copy)]
pub struct NativeLoader {
    grammar: &'static str,
    entry: LanguageFn,
}

impl NativeLoader {
    /// Creates a loader for an arbitrary linked grammar.
    #[must_use]
    pub const fn new(grammar: &'static str, entry: LanguageFn) -> Self {
        Self { grammar, entry }
    }

    /// Creates the loader for the Hare grammar.
    #[must_use]
    pub const fn hare() -> Self {
        Self::new(HARE, tree_sitter_hare::LANGUAGE)
    }
}

impl Default for NativeLoader {
    fn default() -> Self {
        Self::hare()
    }
}

impl fmt::Debug for NativeLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeLoader")
            .field("grammar", &self.grammar)
            .field("entry", &self.entry.into_raw())
            .finish()
    }
}

impl GrammarLoader for NativeLoader {
    fn grammar(&self) -> &str {
        self.grammar
    }

    fn load(&self) -> Result<LanguageHandle<'_>, LoadError> {
        LanguageHandle::resolve(self.grammar, self.entry)
    }
}
