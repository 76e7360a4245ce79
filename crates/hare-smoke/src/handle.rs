//! Borrowed views of natively owned tree-sitter languages.

use std::fmt;
use std::ptr::NonNull;

use tree_sitter_language::LanguageFn;

use crate::error::LoadError;

/// A non-null language pointer produced by a native grammar library.
///
/// The library owns the underlying `TSLanguage`; this handle only borrows
/// it and never frees it. The `'lib` lifetime is bounded by whatever stands
/// in for the library's process-wide state, normally the loader that
/// produced the handle.
#[derive(Clone, Copy)]
pub struct LanguageHandle<'lib> {
    grammar: &'lib str,
    raw: NonNull<()>,
}

impl<'lib> LanguageHandle<'lib> {
    /// Calls a native entry point and wraps the language it returns.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NullHandle`] when the entry point returns null.
    pub fn resolve(grammar: &'lib str, entry: LanguageFn) -> Result<Self, LoadError> {
        // SAFETY: a `LanguageFn` wraps a generated `tree_sitter_<name>`
        // constructor, which takes no arguments and has no preconditions.
        let raw = unsafe { (entry.into_raw())() };
        let raw = NonNull::new(raw.cast_mut()).ok_or(LoadError::NullHandle)?;
        Ok(Self { grammar, raw })
    }

    /// Display name of the grammar this handle belongs to.
    #[must_use]
    pub const fn grammar(&self) -> &'lib str {
        self.grammar
    }

    /// Address of the underlying language, used to compare handles.
    #[must_use]
    pub fn address(&self) -> usize {
        self.raw.as_ptr().addr()
    }

    /// Wraps the language for use by the tree-sitter runtime.
    ///
    /// The result shares the library's static language; nothing is copied.
    #[must_use]
    pub fn to_language(&self) -> tree_sitter::Language {
        // SAFETY: `raw` is non-null and was returned by a tree-sitter
        // language constructor, so it points at a `TSLanguage` that lives
        // for the rest of the process.
        unsafe { tree_sitter::Language::from_raw(self.raw.as_ptr().cast_const().cast()) }
    }
}

impl fmt::Debug for LanguageHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageHandle")
            .field("grammar", &self.grammar)
            .field("address", &format_args!("{:#x}", self.address()))
            .finish()
    }
}
