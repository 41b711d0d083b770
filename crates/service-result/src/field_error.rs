//! Per-field input errors carried by validation failures.

use serde::{Deserialize, Serialize};

/// One caller-input problem tied to a named field.
///
/// `error_code` is an open string so each service can layer its own code
/// vocabulary over the shared [`crate::FailureCategory`]. Services with an
/// enum of codes convert it into a `String` when building the error.
/// `error_message` is a fallback for display; clients should map the code to
/// their own wording.
///
/// # Examples
/// ```
/// use service_result::FieldError;
///
/// let error = FieldError::new("email", "InvalidFormat").with_message("not an email address");
/// assert_eq!(error.field_name(), "email");
/// assert_eq!(error.error_message(), Some("not an email address"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct FieldError {
    field_name: String,
    error_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl FieldError {
    /// Create an error for `field_name` without a display message.
    #[must_use]
    pub fn new(field_name: impl Into<String>, error_code: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            error_code: error_code.into(),
            error_message: None,
        }
    }

    /// Attach a human-readable fallback message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Input field this error relates to.
    #[must_use]
    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    /// Service-defined code describing why the field was rejected.
    #[must_use]
    pub fn error_code(&self) -> &str {
        self.error_code.as_str()
    }

    /// Optional fallback message for display.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// Builds [`FieldError`] values in place on a caller-owned list.
///
/// Validation routines accumulate errors with these helpers and hand the list
/// to [`crate::ServiceResult::failure_validation`] once they are done.
///
/// # Examples
/// ```
/// use service_result::{FieldError, FieldErrorsExt};
///
/// let mut errors: Vec<FieldError> = Vec::new();
/// errors.append_field_error("username", "Mandatory");
/// errors.append_field_error_with_message("age", "BelowMinValue", "must be 18 or over");
/// assert_eq!(errors.len(), 2);
/// ```
pub trait FieldErrorsExt {
    /// Append an error for `field_name` with `error_code`.
    fn append_field_error(&mut self, field_name: impl Into<String>, error_code: impl Into<String>);

    /// Append an error for `field_name` with `error_code` and a fallback message.
    fn append_field_error_with_message(
        &mut self,
        field_name: impl Into<String>,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    );
}

impl FieldErrorsExt for Vec<FieldError> {
    fn append_field_error(&mut self, field_name: impl Into<String>, error_code: impl Into<String>) {
        self.push(FieldError::new(field_name, error_code));
    }

    fn append_field_error_with_message(
        &mut self,
        field_name: impl Into<String>,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) {
        self.push(FieldError::new(field_name, error_code).with_message(error_message));
    }
}
