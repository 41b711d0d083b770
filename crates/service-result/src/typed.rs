//! Envelope carrying a payload on success.

use serde::{Deserialize, Serialize};

use crate::action::FollowUpAction;
use crate::category::{FailureCategory, Outcome};
use crate::envelope::ServiceResult;
use crate::field_error::FieldError;
use crate::violation::ContractViolation;

/// [`ServiceResult`] plus the content a successful operation returns.
///
/// ## Invariants
/// - All [`ServiceResult`] invariants hold for the embedded envelope.
/// - The payload is present if and only if the outcome is successful.
///
/// Serialised as the envelope's fields plus `payload`, which is omitted on
/// failure.
///
/// # Examples
/// ```
/// use service_result::TypedServiceResult;
///
/// let found = TypedServiceResult::success("congrats");
/// assert_eq!(found.try_success(), Some(&"congrats"));
///
/// let missing: TypedServiceResult<&str> = TypedServiceResult::failure_not_found();
/// assert_eq!(missing.try_success(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TypedServiceResultDto<T>")]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct TypedServiceResult<T> {
    #[serde(flatten)]
    envelope: ServiceResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<T>,
}

impl<T> TypedServiceResult<T> {
    /// Result for a request that completed successfully with `payload`.
    #[must_use]
    pub const fn success(payload: T) -> Self {
        Self {
            envelope: ServiceResult::success(),
            payload: Some(payload),
        }
    }

    /// Failed result with the given category and no payload.
    ///
    /// # Panics
    /// Panics under the same conditions as [`ServiceResult::failure`].
    #[must_use]
    pub fn failure(category: FailureCategory) -> Self {
        Self::failed(ServiceResult::failure(category))
    }

    /// Fallible counterpart of [`Self::failure`].
    ///
    /// # Errors
    /// Returns the [`ContractViolation`] reported by
    /// [`ServiceResult::try_failure`].
    pub fn try_failure(category: FailureCategory) -> Result<Self, ContractViolation> {
        ServiceResult::try_failure(category).map(Self::failed)
    }

    /// Failed result for caller input that did not pass validation.
    ///
    /// # Panics
    /// Panics when `field_errors` is empty.
    #[must_use]
    pub fn failure_validation(field_errors: Vec<FieldError>) -> Self {
        Self::failed(ServiceResult::failure_validation(field_errors))
    }

    /// Fallible counterpart of [`Self::failure_validation`].
    ///
    /// # Errors
    /// Returns [`ContractViolation::ValidationWithoutFieldErrors`] when
    /// `field_errors` is empty.
    pub fn try_failure_validation(field_errors: Vec<FieldError>) -> Result<Self, ContractViolation> {
        ServiceResult::try_failure_validation(field_errors).map(Self::failed)
    }

    /// Validation failure naming a single field.
    #[must_use]
    pub fn failure_validation_field(
        field_name: impl Into<String>,
        error_code: impl Into<String>,
    ) -> Self {
        Self::failed(ServiceResult::failure_validation_field(
            field_name, error_code,
        ))
    }

    /// Failure because a requested resource could not be found.
    #[must_use]
    pub fn failure_not_found() -> Self {
        Self::failed(ServiceResult::failure_not_found())
    }

    /// Failure because the caller is not authorised.
    #[must_use]
    pub fn failure_unauthorized() -> Self {
        Self::failed(ServiceResult::failure_unauthorized())
    }

    /// Failure because the caller could not be authenticated.
    #[must_use]
    pub fn failure_unauthenticated() -> Self {
        Self::failed(ServiceResult::failure_unauthenticated())
    }

    /// Failure caused by a system fault such as a timeout.
    #[must_use]
    pub fn failure_system() -> Self {
        Self::failed(ServiceResult::failure_system())
    }

    const fn failed(envelope: ServiceResult) -> Self {
        Self {
            envelope,
            payload: None,
        }
    }

    /// The embedded envelope.
    #[must_use]
    pub const fn envelope(&self) -> &ServiceResult {
        &self.envelope
    }

    /// Whether the request succeeded.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.envelope.outcome()
    }

    /// Why the request failed; `NoError` on success.
    #[must_use]
    pub const fn failure_category(&self) -> FailureCategory {
        self.envelope.failure_category()
    }

    /// Field errors in the order they were recorded.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        self.envelope.field_errors()
    }

    /// Follow-up actions in the order they were added.
    #[must_use]
    pub fn actions(&self) -> &[FollowUpAction] {
        self.envelope.actions()
    }

    /// Mutable access to the follow-up actions.
    pub fn actions_mut(&mut self) -> &mut Vec<FollowUpAction> {
        self.envelope.actions_mut()
    }

    /// Append one follow-up action.
    #[must_use]
    pub fn with_action(mut self, action: FollowUpAction) -> Self {
        self.envelope = self.envelope.with_action(action);
        self
    }

    /// Append several follow-up actions, keeping their order.
    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = FollowUpAction>) -> Self {
        self.envelope = self.envelope.with_actions(actions);
        self
    }

    /// `true` when the outcome is [`Outcome::Successful`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.envelope.is_success()
    }

    /// `true` when the outcome is [`Outcome::Failed`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.envelope.is_failure()
    }

    /// Borrow the payload when the request succeeded.
    ///
    /// Returns `None` for every failed result; never panics.
    #[must_use]
    pub const fn try_success(&self) -> Option<&T> {
        if self.is_success() {
            self.payload.as_ref()
        } else {
            None
        }
    }

    /// Take the payload when the request succeeded.
    #[must_use]
    pub fn into_success(self) -> Option<T> {
        if self.is_success() { self.payload } else { None }
    }

    /// Convert into a `Result`, handing back the envelope on failure.
    ///
    /// # Errors
    /// Returns the embedded [`ServiceResult`] when the request failed.
    ///
    /// # Examples
    /// ```
    /// use service_result::{ServiceResult, TypedServiceResult};
    ///
    /// fn total(order: TypedServiceResult<u32>) -> Result<u32, ServiceResult> {
    ///     let amount = order.into_result()?;
    ///     Ok(amount * 2)
    /// }
    ///
    /// assert_eq!(total(TypedServiceResult::success(21)), Ok(42));
    /// assert!(total(TypedServiceResult::failure_not_found()).is_err());
    /// ```
    pub fn into_result(self) -> Result<T, ServiceResult> {
        match self.payload {
            Some(payload) if self.envelope.is_success() => Ok(payload),
            _ => Err(self.envelope),
        }
    }

    /// Transform the payload, keeping the envelope untouched.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> TypedServiceResult<U>
    where
        F: FnOnce(T) -> U,
    {
        TypedServiceResult {
            envelope: self.envelope,
            payload: self.payload.map(f),
        }
    }
}

impl<T> AsRef<ServiceResult> for TypedServiceResult<T> {
    fn as_ref(&self) -> &ServiceResult {
        &self.envelope
    }
}

impl<T> From<TypedServiceResult<T>> for ServiceResult {
    fn from(value: TypedServiceResult<T>) -> Self {
        value.envelope
    }
}

/// Re-type a failed envelope, for example when a failure from one service is
/// passed on by another with a different payload type.
///
/// # Examples
/// ```
/// use service_result::{ContractViolation, ServiceResult, TypedServiceResult};
///
/// let retyped = TypedServiceResult::<String>::try_from(ServiceResult::failure_not_found());
/// assert!(retyped.is_ok_and(|result| result.is_failure()));
///
/// let success = TypedServiceResult::<String>::try_from(ServiceResult::success());
/// assert_eq!(success, Err(ContractViolation::MissingPayload));
/// ```
impl<T> TryFrom<ServiceResult> for TypedServiceResult<T> {
    type Error = ContractViolation;

    fn try_from(value: ServiceResult) -> Result<Self, Self::Error> {
        if value.is_success() {
            return Err(ContractViolation::MissingPayload);
        }
        Ok(Self::failed(value))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct TypedServiceResultDto<T> {
    outcome: Outcome,
    failure_category: FailureCategory,
    #[serde(default)]
    field_errors: Vec<FieldError>,
    #[serde(default)]
    actions: Vec<FollowUpAction>,
    #[serde(default, deserialize_with = "present")]
    payload: Option<T>,
}

/// A `payload` key is present even when its value is `null`, as it is for
/// `()` or `Option::None` payloads; only an absent key decodes to `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<T> TryFrom<TypedServiceResultDto<T>> for TypedServiceResult<T> {
    type Error = ContractViolation;

    fn try_from(value: TypedServiceResultDto<T>) -> Result<Self, Self::Error> {
        let TypedServiceResultDto {
            outcome,
            failure_category,
            field_errors,
            actions,
            payload,
        } = value;

        let envelope =
            ServiceResult::try_from_parts(outcome, failure_category, field_errors, actions)?;
        match (envelope.is_success(), payload.is_some()) {
            (true, false) => Err(ContractViolation::MissingPayload),
            (false, true) => Err(ContractViolation::PayloadOnFailure),
            _ => Ok(Self { envelope, payload }),
        }
    }
}
