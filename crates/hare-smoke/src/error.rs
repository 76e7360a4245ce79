//! Error types for grammar loading and verification.
//!
//! [`LoadError`] explains why a loader could not produce a usable handle.
//! [`SmokeError`] is what verification reports to its caller; a loader that
//! panics is reported as [`SmokeError::Fault`], separately from the ordinary
//! [`SmokeError::LoadFailure`].

use thiserror::Error;

/// Reasons a grammar loader failed to produce a usable language handle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    /// The native entry point returned a null pointer.
    #[error("grammar entry point returned a null language pointer")]
    NullHandle,

    /// The language was generated for an ABI the runtime cannot read.
    #[error("language ABI version {version} is outside the supported range {min}..={max}")]
    Incompatible {
        /// ABI version reported by the language.
        version: usize,
        /// Oldest ABI version the runtime accepts.
        min: usize,
        /// Newest ABI version the runtime accepts.
        max: usize,
    },

    /// The parsing runtime refused the language.
    #[error("parser rejected the language: {message}")]
    Rejected {
        /// Description from the runtime.
        message: String,
    },
}

impl LoadError {
    /// Creates an incompatible ABI error against the linked runtime's range.
    #[must_use]
    pub const fn incompatible(version: usize) -> Self {
        Self::Incompatible {
            version,
            min: tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION,
            max: tree_sitter::LANGUAGE_VERSION,
        }
    }

    /// Creates a runtime rejection error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Errors reported by grammar verification.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SmokeError {
    /// The loader returned an unusable handle.
    #[error("Error loading {grammar} grammar")]
    LoadFailure {
        /// Display name of the grammar.
        grammar: String,
        /// Why the handle was unusable.
        #[source]
        source: LoadError,
    },

    /// The loader panicked instead of returning.
    #[error("unexpected fault while loading {grammar} grammar: {message}")]
    Fault {
        /// Display name of the grammar.
        grammar: String,
        /// The panic payload, when it was a string.
        message: String,
    },

    /// A repeated load returned a different language than the first one.
    #[error("{grammar} grammar returned a different handle on load attempt {attempt}")]
    UnstableHandle {
        /// Display name of the grammar.
        grammar: String,
        /// One-based attempt number that diverged.
        attempt: usize,
    },

    /// The parser produced no syntax tree.
    #[error("failed to parse {grammar} source: {message}")]
    Parse {
        /// Display name of the grammar.
        grammar: String,
        /// Description of the failure.
        message: String,
    },
}

impl SmokeError {
    /// Creates a load failure error.
    #[must_use]
    pub fn load_failure(grammar: impl Into<String>, source: LoadError) -> Self {
        Self::LoadFailure {
            grammar: grammar.into(),
            source,
        }
    }

    /// Creates a fault error.
    #[must_use]
    pub fn fault(grammar: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fault {
            grammar: grammar.into(),
            message: message.into(),
        }
    }

    /// Creates an unstable handle error.
    #[must_use]
    pub fn unstable_handle(grammar: impl Into<String>, attempt: usize) -> Self {
        Self::UnstableHandle {
            grammar: grammar.into(),
            attempt,
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(grammar: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            grammar: grammar.into(),
            message: message.into(),
        }
    }

    /// Returns true when the loader faulted rather than failing cleanly.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Fault { .. })
    }
}
