//! Behavioural tests for the service result envelope.
//!
//! These scenarios cover the construction contract and the inspection
//! helpers callers use to branch on outcome.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use service_result::{
    ContractViolation, FailureCategory, FieldError, FieldErrorsExt, Outcome, ServiceResult,
    TypedServiceResult,
};

/// Test world holding the field errors under construction and the built
/// envelopes.
#[derive(Default, ScenarioState)]
struct World {
    field_errors: Slot<Vec<FieldError>>,
    result: Slot<Result<ServiceResult, ContractViolation>>,
    typed: Slot<TypedServiceResult<String>>,
}

impl World {
    fn result(&self) -> Result<ServiceResult, ContractViolation> {
        self.result.get().expect("a result should have been built")
    }

    fn built(&self) -> ServiceResult {
        self.result().expect("construction should succeed")
    }

    fn rejection(&self) -> ContractViolation {
        match self.result() {
            Ok(result) => panic!("expected construction to be rejected, got {result:?}"),
            Err(violation) => violation,
        }
    }

    fn typed(&self) -> TypedServiceResult<String> {
        self.typed.get().expect("a typed result should have been built")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn parse_category(name: &str) -> FailureCategory {
    serde_json::from_value(serde_json::Value::String(name.to_owned()))
        .expect("feature files use serde category names")
}

// ============================================================================
// Given steps
// ============================================================================

#[given("an empty list of field errors")]
fn an_empty_list_of_field_errors(world: &World) {
    world.field_errors.set(Vec::new());
}

#[given("a field error for {field} with code {code}")]
fn a_field_error_for_field_with_code(world: &World, field: String, code: String) {
    let mut errors = world
        .field_errors
        .get()
        .expect("field error list should be set");
    errors.append_field_error(field, code);
    world.field_errors.set(errors);
}

// ============================================================================
// When steps
// ============================================================================

#[when("a successful result is built")]
fn a_successful_result_is_built(world: &World) {
    world.result.set(Ok(ServiceResult::success()));
}

#[when("a validation failure is built from the list")]
fn a_validation_failure_is_built_from_the_list(world: &World) {
    let errors = world
        .field_errors
        .get()
        .expect("field error list should be set");
    world
        .result
        .set(ServiceResult::try_failure_validation(errors));
}

#[when("a failure is built with category {category}")]
fn a_failure_is_built_with_category(world: &World, category: String) {
    world
        .result
        .set(ServiceResult::try_failure(parse_category(&category)));
}

#[when("a typed success is built with payload {payload}")]
fn a_typed_success_is_built_with_payload(world: &World, payload: String) {
    let typed = TypedServiceResult::success(payload);
    world.result.set(Ok(typed.envelope().clone()));
    world.typed.set(typed);
}

#[when("a typed not-found failure is built")]
fn a_typed_not_found_failure_is_built(world: &World) {
    let typed = TypedServiceResult::failure_not_found();
    world.result.set(Ok(typed.envelope().clone()));
    world.typed.set(typed);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the outcome is {outcome}")]
fn the_outcome_is(world: &World, outcome: String) {
    let expected = match outcome.as_str() {
        "successful" => Outcome::Successful,
        "failed" => Outcome::Failed,
        other => panic!("unknown outcome in feature file: {other}"),
    };
    let result = world.built();
    assert_eq!(result.outcome(), expected);
    assert_eq!(result.is_success(), expected == Outcome::Successful);
    assert_eq!(result.is_failure(), expected == Outcome::Failed);
}

#[then("the failure category is {category}")]
fn the_failure_category_is(world: &World, category: String) {
    assert_eq!(world.built().failure_category(), parse_category(&category));
}

#[then("the result has {count} field errors")]
fn the_result_has_field_errors(world: &World, count: usize) {
    assert_eq!(world.built().field_errors().len(), count);
}

#[then("field error {position} names {field} with code {code}")]
fn field_error_names_field_with_code(world: &World, position: usize, field: String, code: String) {
    let result = world.built();
    let error = position
        .checked_sub(1)
        .and_then(|index| result.field_errors().get(index))
        .expect("field error position should exist");
    assert_eq!(error.field_name(), field);
    assert_eq!(error.error_code(), code);
}

#[then("construction is rejected because no field was named")]
fn construction_is_rejected_because_no_field_was_named(world: &World) {
    assert_eq!(
        world.rejection(),
        ContractViolation::ValidationWithoutFieldErrors
    );
}

#[then("construction is rejected because the category is missing")]
fn construction_is_rejected_because_the_category_is_missing(world: &World) {
    assert_eq!(world.rejection(), ContractViolation::FailedWithoutCategory);
}

#[then("extracting the payload yields {payload}")]
fn extracting_the_payload_yields(world: &World, payload: String) {
    let typed = world.typed();
    assert_eq!(typed.try_success(), Some(&payload));
    assert_eq!(typed.into_success(), Some(payload));
}

#[then("no payload can be extracted")]
fn no_payload_can_be_extracted(world: &World) {
    let typed = world.typed();
    assert!(typed.is_failure());
    assert_eq!(typed.try_success(), None);
    assert_eq!(typed.into_success(), None);
}

// ============================================================================
// Scenarios
// ============================================================================

#[scenario(
    path = "tests/features/service_result.feature",
    name = "A successful operation reports no error"
)]
fn a_successful_operation_reports_no_error(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/service_result.feature",
    name = "A validation routine reports the offending field"
)]
fn a_validation_routine_reports_the_offending_field(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/service_result.feature",
    name = "Field errors keep the order the rules ran in"
)]
fn field_errors_keep_the_order_the_rules_ran_in(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/service_result.feature",
    name = "An empty validation failure is a contract violation"
)]
fn an_empty_validation_failure_is_a_contract_violation(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/service_result.feature",
    name = "A failure without a category is a contract violation"
)]
fn a_failure_without_a_category_is_a_contract_violation(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/service_result.feature",
    name = "A payload is extracted from a successful typed result"
)]
fn a_payload_is_extracted_from_a_successful_typed_result(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/service_result.feature",
    name = "A failed typed result yields no payload"
)]
fn a_failed_typed_result_yields_no_payload(world: World) {
    let _ = world;
}
