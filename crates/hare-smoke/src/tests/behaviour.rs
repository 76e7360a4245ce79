//! Behaviour-driven development (BDD) step definitions for hare-smoke scenarios.

use std::cell::RefCell;
use std::num::NonZeroUsize;

use rstest::fixture;
use rstest_bdd_macros::{given, then, when};

use super::{NullLoader, PanickingLoader, future_abi_entry};
use crate::{GrammarLoader, NativeLoader, SmokeError, verify_grammar_loads, verify_repeated_loads};

mod scenarios;

// =============================================================================
// Test World
// =============================================================================

/// State shared across BDD steps.
#[derive(Default)]
struct TestWorld {
    /// Loader under test.
    loader: Option<Box<dyn GrammarLoader>>,
    /// Outcome of the last verification: the grammar name or the error.
    outcome: Option<Result<String, SmokeError>>,
}

impl TestWorld {
    fn loader(&self) -> &dyn GrammarLoader {
        self.loader.as_deref().expect("a loader should be given")
    }

    fn outcome(&self) -> &Result<String, SmokeError> {
        self.outcome.as_ref().expect("verification should have run")
    }
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

/// Strips surrounding double quotes from a string if present.
fn strip_quotes(s: &str) -> &str {
    s.trim_matches('"')
}

// =============================================================================
// Given Steps
// =============================================================================

#[given("a loader for the Hare grammar")]
fn given_hare_loader(world: &RefCell<TestWorld>) {
    world.borrow_mut().loader = Some(Box::new(NativeLoader::hare()));
}

#[given("a loader for the Rust grammar")]
fn given_rust_loader(world: &RefCell<TestWorld>) {
    world.borrow_mut().loader = Some(Box::new(NativeLoader::new(
        "Rust",
        tree_sitter_rust::LANGUAGE,
    )));
}

#[given("a loader whose entry point returns null for grammar {grammar}")]
fn given_null_loader(world: &RefCell<TestWorld>, grammar: String) {
    world.borrow_mut().loader = Some(Box::new(NullLoader::new(strip_quotes(&grammar))));
}

#[given("a loader whose language targets a future ABI for grammar {grammar}")]
fn given_future_abi_loader(world: &RefCell<TestWorld>, grammar: String) {
    let grammar: &'static str = strip_quotes(&grammar).to_owned().leak();
    world.borrow_mut().loader = Some(Box::new(NativeLoader::new(grammar, future_abi_entry())));
}

#[given("a loader that panics with {message}")]
fn given_panicking_loader(world: &RefCell<TestWorld>, message: String) {
    world.borrow_mut().loader = Some(Box::new(PanickingLoader::new(strip_quotes(&message))));
}

// =============================================================================
// When Steps
// =============================================================================

#[when("the grammar load is verified")]
fn when_verified(world: &RefCell<TestWorld>) {
    let mut w = world.borrow_mut();
    let outcome = verify_grammar_loads(w.loader()).map(|grammar| grammar.grammar().to_owned());
    w.outcome = Some(outcome);
}

#[when("the grammar is loaded {count} times")]
fn when_loaded_repeatedly(world: &RefCell<TestWorld>, count: usize) {
    let mut w = world.borrow_mut();
    let attempts = NonZeroUsize::new(count).expect("non-zero load count");
    let outcome =
        verify_repeated_loads(w.loader(), attempts).map(|grammar| grammar.grammar().to_owned());
    w.outcome = Some(outcome);
}

// =============================================================================
// Then Steps
// =============================================================================

#[then("verification passes")]
fn then_passes(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    if let Err(error) = w.outcome() {
        panic!("expected verification to pass, got: {error}");
    }
}

#[then("verification passes for grammar {grammar}")]
fn then_passes_for(world: &RefCell<TestWorld>, grammar: String) {
    let w = world.borrow();
    match w.outcome() {
        Ok(loaded) => assert_eq!(loaded, strip_quotes(&grammar)),
        Err(error) => panic!("expected verification to pass, got: {error}"),
    }
}

#[then("verification fails with message {message}")]
fn then_fails_with(world: &RefCell<TestWorld>, message: String) {
    let w = world.borrow();
    let error = w.outcome().as_ref().expect_err("verification should fail");
    assert!(!error.is_fault(), "expected a load failure, got a fault");
    assert_eq!(error.to_string(), strip_quotes(&message));
}

#[then("verification reports a fault mentioning {message}")]
fn then_reports_fault(world: &RefCell<TestWorld>, message: String) {
    let w = world.borrow();
    let error = w.outcome().as_ref().expect_err("verification should fail");
    assert!(error.is_fault(), "expected a fault, got: {error}");
    assert!(error.to_string().contains(strip_quotes(&message)));
}
