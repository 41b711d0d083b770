//! Uniform result envelope for service-layer operations.
//!
//! Services return a [`ServiceResult`] (or a [`TypedServiceResult`] when they
//! have content to hand back) instead of raising on expected failure paths
//! such as validation, authorisation, or missing resources. Callers branch on
//! the outcome and read machine-readable detail from the envelope.
//!
//! # Overview
//!
//! - [`Outcome`] and [`FailureCategory`] form the closed error vocabulary.
//! - [`FieldError`] names one offending input field with an open, service
//!   defined error code.
//! - [`FollowUpAction`] describes an optional next step for the caller.
//! - Constructors on [`ServiceResult`] and [`TypedServiceResult`] are the only
//!   way to build an envelope; contract violations panic or, through the
//!   `try_*` variants, surface as [`ContractViolation`].
//!
//! # Example
//!
//! ```
//! use service_result::{FieldError, FieldErrorsExt, TypedServiceResult};
//!
//! fn register(username: &str) -> TypedServiceResult<u64> {
//!     let mut errors: Vec<FieldError> = Vec::new();
//!     if username.trim().is_empty() {
//!         errors.append_field_error("username", "Mandatory");
//!     }
//!     if !errors.is_empty() {
//!         return TypedServiceResult::failure_validation(errors);
//!     }
//!     TypedServiceResult::success(42)
//! }
//!
//! assert_eq!(register("ada").try_success(), Some(&42));
//!
//! let rejected = register("  ");
//! assert!(rejected.is_failure());
//! assert_eq!(rejected.field_errors()[0].error_code(), "Mandatory");
//! ```

mod action;
mod category;
mod envelope;
mod field_error;
mod typed;
mod violation;

pub use action::{ActionsExt, FollowUpAction};
pub use category::{FailureCategory, Outcome};
pub use envelope::ServiceResult;
pub use field_error::{FieldError, FieldErrorsExt};
pub use typed::TypedServiceResult;
pub use violation::ContractViolation;
