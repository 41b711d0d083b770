//! The non-generic result envelope and its construction contract.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::FollowUpAction;
use crate::category::{FailureCategory, Outcome};
use crate::field_error::FieldError;
use crate::violation::ContractViolation;

/// Envelope telling a caller whether a service operation succeeded, and if
/// not, why.
///
/// ## Invariants
/// - A successful result carries [`FailureCategory::NoError`] and no field
///   errors.
/// - A failed result carries any category other than `NoError`.
/// - A [`FailureCategory::Validation`] failure names at least one field.
///
/// Fields are private: the constructors below (and serde decoding, which
/// re-checks the invariants) are the only way to obtain a value. Follow-up
/// actions are the one part callers may extend afterwards.
///
/// # Examples
/// ```
/// use service_result::{FailureCategory, Outcome, ServiceResult};
///
/// let result = ServiceResult::failure_validation_field("username", "Mandatory");
/// assert_eq!(result.outcome(), Outcome::Failed);
/// assert_eq!(result.failure_category(), FailureCategory::Validation);
/// assert_eq!(result.field_errors().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ServiceResultDto", into = "ServiceResultDto")]
pub struct ServiceResult {
    outcome: Outcome,
    failure_category: FailureCategory,
    field_errors: Vec<FieldError>,
    actions: Vec<FollowUpAction>,
}

impl ServiceResult {
    /// Result for a request that completed successfully.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            outcome: Outcome::Successful,
            failure_category: FailureCategory::NoError,
            field_errors: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Failed result with the given category and no field errors.
    ///
    /// # Panics
    /// Panics when `category` is [`FailureCategory::NoError`] or
    /// [`FailureCategory::Validation`]; use [`Self::try_failure`] to handle
    /// those as values.
    #[must_use]
    pub fn failure(category: FailureCategory) -> Self {
        match Self::try_failure(category) {
            Ok(value) => value,
            Err(err) => panic!("service result contract violated: {err}"),
        }
    }

    /// Fallible counterpart of [`Self::failure`].
    ///
    /// # Errors
    /// Returns [`ContractViolation::FailedWithoutCategory`] for `NoError` and
    /// [`ContractViolation::ValidationWithoutFieldErrors`] for `Validation`.
    pub fn try_failure(category: FailureCategory) -> Result<Self, ContractViolation> {
        Self::try_failed(category, Vec::new())
    }

    /// Failed result for caller input that did not pass validation.
    ///
    /// # Panics
    /// Panics when `field_errors` is empty; use
    /// [`Self::try_failure_validation`] to handle that as a value.
    #[must_use]
    pub fn failure_validation(field_errors: Vec<FieldError>) -> Self {
        match Self::try_failure_validation(field_errors) {
            Ok(value) => value,
            Err(err) => panic!("service result contract violated: {err}"),
        }
    }

    /// Fallible counterpart of [`Self::failure_validation`].
    ///
    /// # Errors
    /// Returns [`ContractViolation::ValidationWithoutFieldErrors`] when
    /// `field_errors` is empty.
    pub fn try_failure_validation(field_errors: Vec<FieldError>) -> Result<Self, ContractViolation> {
        Self::try_failed(FailureCategory::Validation, field_errors)
    }

    /// Validation failure naming a single field.
    #[must_use]
    pub fn failure_validation_field(
        field_name: impl Into<String>,
        error_code: impl Into<String>,
    ) -> Self {
        Self::failed(
            FailureCategory::Validation,
            vec![FieldError::new(field_name, error_code)],
        )
    }

    /// Failure because a requested resource could not be found.
    #[must_use]
    pub fn failure_not_found() -> Self {
        Self::failed(FailureCategory::NotFound, Vec::new())
    }

    /// Failure because the caller is not authorised.
    #[must_use]
    pub fn failure_unauthorized() -> Self {
        Self::failed(FailureCategory::Authorization, Vec::new())
    }

    /// Failure because the caller could not be authenticated.
    #[must_use]
    pub fn failure_unauthenticated() -> Self {
        Self::failed(FailureCategory::Authentication, Vec::new())
    }

    /// Failure caused by a system fault such as a timeout.
    #[must_use]
    pub fn failure_system() -> Self {
        Self::failed(FailureCategory::SystemError, Vec::new())
    }

    fn try_failed(
        category: FailureCategory,
        field_errors: Vec<FieldError>,
    ) -> Result<Self, ContractViolation> {
        check_invariants(Outcome::Failed, category, &field_errors)?;
        Ok(Self::failed(category, field_errors))
    }

    /// Build a failed result whose invariants the caller already holds.
    fn failed(category: FailureCategory, field_errors: Vec<FieldError>) -> Self {
        debug!(
            category = %category,
            field_errors = field_errors.len(),
            "service result marked as failed"
        );
        Self {
            outcome: Outcome::Failed,
            failure_category: category,
            field_errors,
            actions: Vec::new(),
        }
    }

    /// Rebuild a result from raw parts, checking every invariant.
    pub(crate) fn try_from_parts(
        outcome: Outcome,
        failure_category: FailureCategory,
        field_errors: Vec<FieldError>,
        actions: Vec<FollowUpAction>,
    ) -> Result<Self, ContractViolation> {
        check_invariants(outcome, failure_category, &field_errors)?;
        Ok(Self {
            outcome,
            failure_category,
            field_errors,
            actions,
        })
    }

    /// Whether the request succeeded.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Why the request failed; `NoError` on success.
    #[must_use]
    pub const fn failure_category(&self) -> FailureCategory {
        self.failure_category
    }

    /// Field errors in the order they were recorded.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Follow-up actions in the order they were added.
    #[must_use]
    pub fn actions(&self) -> &[FollowUpAction] {
        &self.actions
    }

    /// Mutable access to the follow-up actions.
    ///
    /// Actions are not covered by the envelope invariants, so callers may
    /// append to them after construction.
    pub fn actions_mut(&mut self) -> &mut Vec<FollowUpAction> {
        &mut self.actions
    }

    /// Append one follow-up action.
    #[must_use]
    pub fn with_action(mut self, action: FollowUpAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Append several follow-up actions, keeping their order.
    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = FollowUpAction>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// `true` when the outcome is [`Outcome::Successful`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Successful)
    }

    /// `true` when the outcome is [`Outcome::Failed`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failed)
    }
}

fn check_invariants(
    outcome: Outcome,
    category: FailureCategory,
    field_errors: &[FieldError],
) -> Result<(), ContractViolation> {
    match outcome {
        Outcome::Successful if category.is_failure() => {
            Err(ContractViolation::SuccessWithFailureCategory { category })
        }
        Outcome::Successful if !field_errors.is_empty() => {
            Err(ContractViolation::SuccessWithFieldErrors {
                count: field_errors.len(),
            })
        }
        Outcome::Successful => Ok(()),
        Outcome::Failed => match category {
            FailureCategory::NoError => Err(ContractViolation::FailedWithoutCategory),
            FailureCategory::Validation if field_errors.is_empty() => {
                Err(ContractViolation::ValidationWithoutFieldErrors)
            }
            _ => Ok(()),
        },
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct ServiceResultDto {
    outcome: Outcome,
    failure_category: FailureCategory,
    #[serde(default)]
    field_errors: Vec<FieldError>,
    #[serde(default)]
    actions: Vec<FollowUpAction>,
}

impl From<ServiceResult> for ServiceResultDto {
    fn from(value: ServiceResult) -> Self {
        Self {
            outcome: value.outcome,
            failure_category: value.failure_category,
            field_errors: value.field_errors,
            actions: value.actions,
        }
    }
}

impl TryFrom<ServiceResultDto> for ServiceResult {
    type Error = ContractViolation;

    fn try_from(value: ServiceResultDto) -> Result<Self, Self::Error> {
        let ServiceResultDto {
            outcome,
            failure_category,
            field_errors,
            actions,
        } = value;

        Self::try_from_parts(outcome, failure_category, field_errors, actions)
    }
}
