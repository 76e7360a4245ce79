//! Load verification.
//!
//! [`verify_grammar_loads`] is the smoke test proper: ask a loader for its
//! language, reject a null handle, and confirm the tree-sitter runtime
//! accepts it. [`verify_repeated_loads`] repeats the load to check that the
//! library hands back the same language every time.

use std::any::Any;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error, info, info_span, warn};

use crate::error::{LoadError, SmokeError};
use crate::handle::LanguageHandle;
use crate::loader::GrammarLoader;
use crate::parser::Parser;

/// A grammar that loaded and was accepted by the parsing runtime.
#[derive(Debug, Clone, Copy)]
pub struct VerifiedGrammar<'lib> {
    handle: LanguageHandle<'lib>,
    abi_version: usize,
    node_kind_count: usize,
}

impl<'lib> VerifiedGrammar<'lib> {
    /// Display name of the grammar.
    #[must_use]
    pub const fn grammar(&self) -> &'lib str {
        self.handle.grammar()
    }

    /// The verified language handle.
    #[must_use]
    pub const fn handle(&self) -> &LanguageHandle<'lib> {
        &self.handle
    }

    /// ABI version the grammar was generated for.
    #[must_use]
    pub const fn abi_version(&self) -> usize {
        self.abi_version
    }

    /// Number of distinct node kinds in the grammar.
    #[must_use]
    pub const fn node_kind_count(&self) -> usize {
        self.node_kind_count
    }

    /// Creates a parser for this grammar.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime refuses the language.
    pub fn parser(&self) -> Result<Parser, SmokeError> {
        Parser::from_handle(&self.handle)
    }
}

/// Verifies that `loader` produces a usable language handle.
///
/// A loader that returns an error fails with [`SmokeError::LoadFailure`].
/// A loader that panics fails with [`SmokeError::Fault`]. Only Rust panics
/// can be observed; a crash inside native code aborts the process.
///
/// # Errors
///
/// Returns the failure described above.
pub fn verify_grammar_loads<L>(loader: &L) -> Result<VerifiedGrammar<'_>, SmokeError>
where
    L: GrammarLoader + ?Sized,
{
    let span = info_span!("verify_grammar_loads", grammar = loader.grammar());
    let _entered = span.enter();

    let handle = load_guarded(loader)?;
    accept(handle)
}

/// Loads `attempts` times and checks every load returns the first handle.
///
/// # Errors
///
/// Fails like [`verify_grammar_loads`] on any attempt, or with
/// [`SmokeError::UnstableHandle`] when a later attempt returns a different
/// language.
pub fn verify_repeated_loads<L>(
    loader: &L,
    attempts: NonZeroUsize,
) -> Result<VerifiedGrammar<'_>, SmokeError>
where
    L: GrammarLoader + ?Sized,
{
    let verified = verify_grammar_loads(loader)?;

    let span = info_span!(
        "verify_repeated_loads",
        grammar = loader.grammar(),
        attempts = attempts.get()
    );
    let _entered = span.enter();

    for attempt in 2..=attempts.get() {
        let handle = load_guarded(loader)?;
        if handle.address() != verified.handle().address() {
            warn!(attempt, "grammar loader returned a different language");
            return Err(SmokeError::unstable_handle(loader.grammar(), attempt));
        }
    }

    Ok(verified)
}

fn load_guarded<L>(loader: &L) -> Result<LanguageHandle<'_>, SmokeError>
where
    L: GrammarLoader + ?Sized,
{
    debug!("loading grammar");
    match panic::catch_unwind(AssertUnwindSafe(|| loader.load())) {
        Ok(Ok(handle)) => Ok(handle),
        Ok(Err(source)) => {
            warn!(%source, "grammar loader returned no usable handle");
            Err(SmokeError::load_failure(loader.grammar(), source))
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(%message, "grammar loader faulted");
            Err(SmokeError::fault(loader.grammar(), message))
        }
    }
}

fn accept(handle: LanguageHandle<'_>) -> Result<VerifiedGrammar<'_>, SmokeError> {
    let language = handle.to_language();
    let abi_version = language.abi_version();

    let supported = tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION..=tree_sitter::LANGUAGE_VERSION;
    if !supported.contains(&abi_version) {
        let source = LoadError::incompatible(abi_version);
        warn!(%source, "grammar ABI is not supported by the runtime");
        return Err(SmokeError::load_failure(handle.grammar(), source));
    }

    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&language).map_err(|error| {
        let source = LoadError::rejected(error.to_string());
        warn!(%source, "parser rejected the grammar");
        SmokeError::load_failure(handle.grammar(), source)
    })?;

    let node_kind_count = language.node_kind_count();
    info!(abi_version, node_kind_count, "grammar loaded");
    Ok(VerifiedGrammar {
        handle,
        abi_version,
        node_kind_count,
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
