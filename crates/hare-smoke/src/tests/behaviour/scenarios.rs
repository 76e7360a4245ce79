//! Scenario bindings for the `hare-smoke` BDD feature file.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::scenario;

use super::TestWorld;

/// Fixture providing the shared BDD world.
#[fixture]
fn world() -> RefCell<TestWorld> {
    super::world()
}

#[scenario(
    path = "tests/features/hare_smoke.feature",
    name = "The Hare grammar loads"
)]
fn hare_grammar_loads(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/hare_smoke.feature",
    name = "A linked grammar loads"
)]
fn linked_grammar_loads(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/hare_smoke.feature",
    name = "A null handle fails with the harness message"
)]
fn null_handle_fails(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/hare_smoke.feature",
    name = "An unsupported grammar ABI fails with the harness message"
)]
fn unsupported_abi_fails(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/hare_smoke.feature",
    name = "A panicking loader is reported as a fault"
)]
fn panicking_loader_faults(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/hare_smoke.feature",
    name = "Repeated loads return the same language"
)]
fn repeated_loads_are_stable(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/hare_smoke.feature",
    name = "Repeated Hare loads return the same language"
)]
fn repeated_hare_loads_are_stable(world: RefCell<TestWorld>) {
    drop(world);
}
