//! Programmer-contract violations raised while building an envelope.
//!
//! These are bugs in the calling code, not business outcomes. The panicking
//! constructors fail fast with the `Display` text below; the `try_*`
//! constructors and serde decoding return the value instead.

use thiserror::Error;

use crate::category::FailureCategory;

/// Reasons an envelope could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// A failed result was given [`FailureCategory::NoError`].
    #[error("a failed result must carry a failure category other than no_error")]
    FailedWithoutCategory,
    /// A validation failure named no offending fields.
    #[error("a validation failure must name at least one field error")]
    ValidationWithoutFieldErrors,
    /// A successful result carried a failure category.
    #[error("a successful result must not carry failure category {category}")]
    SuccessWithFailureCategory {
        /// Category found on the successful result.
        category: FailureCategory,
    },
    /// A successful result carried field errors.
    #[error("a successful result must not carry field errors (found {count})")]
    SuccessWithFieldErrors {
        /// Number of field errors found.
        count: usize,
    },
    /// A successful typed result had no payload.
    #[error("a successful typed result must carry a payload")]
    MissingPayload,
    /// A failed typed result carried a payload.
    #[error("a failed typed result must not carry a payload")]
    PayloadOnFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_failure_category_names_the_category() {
        let err = ContractViolation::SuccessWithFailureCategory {
            category: FailureCategory::NotFound,
        };
        assert_eq!(
            err.to_string(),
            "a successful result must not carry failure category not_found"
        );
    }

    #[test]
    fn success_with_field_errors_reports_count() {
        let err = ContractViolation::SuccessWithFieldErrors { count: 2 };
        assert_eq!(
            err.to_string(),
            "a successful result must not carry field errors (found 2)"
        );
    }
}
