//! Closed error vocabulary shared by every envelope.
//!
//! These values are transport agnostic. Adapters that need numeric status
//! codes own that mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a service operation succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The operation completed as requested.
    Successful,
    /// The operation did not complete; the failure category says why.
    Failed,
}

/// Coarse classification of why a request failed.
///
/// Field-level detail lives in [`crate::FieldError`] codes, which are open
/// strings; this set stays closed so adapters can map it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCategory {
    /// No failure. Only valid on successful results.
    NoError,
    /// Caller input failed validation.
    Validation,
    /// The caller is not permitted to perform the operation.
    Authorization,
    /// The caller could not be identified.
    Authentication,
    /// A requested resource does not exist.
    NotFound,
    /// A system fault such as a timeout or serialisation error.
    SystemError,
}

impl FailureCategory {
    /// Stable wire name, matching the serde representation.
    ///
    /// # Examples
    /// ```
    /// use service_result::FailureCategory;
    ///
    /// assert_eq!(FailureCategory::NotFound.as_str(), "not_found");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoError => "no_error",
            Self::Validation => "validation",
            Self::Authorization => "authorization",
            Self::Authentication => "authentication",
            Self::NotFound => "not_found",
            Self::SystemError => "system_error",
        }
    }

    /// `true` for every category except [`FailureCategory::NoError`].
    #[must_use]
    pub const fn is_failure(self) -> bool {
        !matches!(self, Self::NoError)
    }
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FailureCategory::NoError, "no_error")]
    #[case(FailureCategory::Validation, "validation")]
    #[case(FailureCategory::Authorization, "authorization")]
    #[case(FailureCategory::Authentication, "authentication")]
    #[case(FailureCategory::NotFound, "not_found")]
    #[case(FailureCategory::SystemError, "system_error")]
    fn wire_name_matches_serde(#[case] category: FailureCategory, #[case] expected: &str) {
        assert_eq!(category.as_str(), expected);
        assert_eq!(category.to_string(), expected);
        assert_eq!(
            serde_json::to_value(category).ok(),
            Some(serde_json::Value::String(expected.to_owned()))
        );
    }

    #[rstest]
    fn only_no_error_is_not_a_failure() {
        assert!(!FailureCategory::NoError.is_failure());
        assert!(FailureCategory::SystemError.is_failure());
    }

    #[rstest]
    fn outcome_serialises_in_snake_case() {
        assert_eq!(
            serde_json::to_string(&Outcome::Successful).ok().as_deref(),
            Some("\"successful\"")
        );
    }
}
