//! Crate-level tests and the loader doubles they share.

mod behaviour;

use tree_sitter_language::LanguageFn;

use crate::{GrammarLoader, LanguageHandle, LoadError};

unsafe extern "C" fn null_language() -> *const () {
    std::ptr::null()
}

/// Leading fields of a generated language table. The runtime reads the
/// ABI version from the first field before touching anything else.
#[repr(C, align(8))]
struct LanguageHeader([u32; 16]);

impl LanguageHeader {
    const fn with_abi(version: u32) -> Self {
        let mut fields = [0; 16];
        fields[0] = version;
        Self(fields)
    }
}

static FUTURE_ABI: LanguageHeader = LanguageHeader::with_abi(99);
static OBSOLETE_ABI: LanguageHeader = LanguageHeader::with_abi(12);

unsafe extern "C" fn future_language() -> *const () {
    (&raw const FUTURE_ABI).cast()
}

unsafe extern "C" fn obsolete_language() -> *const () {
    (&raw const OBSOLETE_ABI).cast()
}

/// Entry point returning a language generated for ABI 99.
pub(crate) fn future_abi_entry() -> LanguageFn {
    // SAFETY: `future_language` has the constructor signature. The table it
    // returns is only inspected for its ABI version.
    unsafe { LanguageFn::from_raw(future_language) }
}

/// Entry point returning a language generated for ABI 12.
pub(crate) fn obsolete_abi_entry() -> LanguageFn {
    // SAFETY: as for `future_abi_entry`.
    unsafe { LanguageFn::from_raw(obsolete_language) }
}

/// Loader whose native entry point returns a null language.
pub(crate) struct NullLoader {
    grammar: String,
}

impl NullLoader {
    pub(crate) fn new(grammar: &str) -> Self {
        Self {
            grammar: grammar.to_owned(),
        }
    }
}

impl GrammarLoader for NullLoader {
    fn grammar(&self) -> &str {
        &self.grammar
    }

    fn load(&self) -> Result<LanguageHandle<'_>, LoadError> {
        // SAFETY: `null_language` has the constructor signature.
        let entry = unsafe { LanguageFn::from_raw(null_language) };
        LanguageHandle::resolve(&self.grammar, entry)
    }
}

/// Loader that panics instead of returning.
pub(crate) struct PanickingLoader {
    message: String,
}

impl PanickingLoader {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

impl GrammarLoader for PanickingLoader {
    fn grammar(&self) -> &str {
        "Hare"
    }

    fn load(&self) -> Result<LanguageHandle<'_>, LoadError> {
        panic!("{}", self.message)
    }
}
