//! Checks serialised service result envelopes against the result contract.
//!
//! The binary reads one JSON document, decodes it through the
//! `service-result` serde contract, and reports whether it is well formed.
//! Parsing and reporting live here so they can be exercised in tests without
//! spawning a process.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use serde_json::Value;
use service_result::{ServiceResult, TypedServiceResult};
use thiserror::Error;
use tracing::debug;

/// Settings for a check run, loaded from CLI flags, environment variables
/// prefixed with `ENVELOPE_CHECK_`, and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ENVELOPE_CHECK")]
pub struct EnvelopeCheckSettings {
    /// Path to the JSON document to check.
    pub input: Option<PathBuf>,
    /// Require the document to decode as a typed result with a payload on
    /// success.
    #[ortho_config(default = false)]
    pub require_payload: bool,
}

impl EnvelopeCheckSettings {
    /// Return the configured input path.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::MissingInput`] when no path was supplied.
    pub fn input(&self) -> Result<&Path, CheckError> {
        self.input.as_deref().ok_or(CheckError::MissingInput)
    }
}

/// Errors surfaced while checking an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Settings could not be loaded.
    #[error("failed to load settings: {message}")]
    Config {
        /// Description of the loader failure.
        message: String,
    },
    /// No input path was configured.
    #[error("missing required setting: --input (or ENVELOPE_CHECK_INPUT)")]
    MissingInput,
    /// The input file could not be read.
    #[error("failed to read envelope at '{path}': {message}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// The input is not valid JSON.
    #[error("invalid envelope JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },
    /// The input is JSON but not a well-formed envelope.
    #[error("envelope breaks the result contract: {message}")]
    Contract {
        /// Description of the violation.
        message: String,
    },
}

/// Summary of a well-formed envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    envelope: ServiceResult,
    has_payload: bool,
}

impl Report {
    /// The decoded envelope, without any payload.
    #[must_use]
    pub const fn envelope(&self) -> &ServiceResult {
        &self.envelope
    }

    /// Whether the document carried a payload.
    #[must_use]
    pub const fn has_payload(&self) -> bool {
        self.has_payload
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.envelope.is_success() {
            let suffix = if self.has_payload { " with payload" } else { "" };
            return write!(f, "successful{suffix}");
        }
        write!(
            f,
            "failed: {} ({} field errors)",
            self.envelope.failure_category(),
            self.envelope.field_errors().len()
        )
    }
}

/// Read and check the document named by `settings`.
///
/// # Errors
///
/// Returns [`CheckError`] when the input is missing, unreadable, not JSON, or
/// not a well-formed envelope.
pub fn run(settings: &EnvelopeCheckSettings) -> Result<Report, CheckError> {
    let path = settings.input()?;
    debug!(path = %path.display(), "checking envelope");
    let contents = fs::read_to_string(path).map_err(|err| CheckError::Io {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    check_document(&contents, settings.require_payload)
}

/// Check a JSON document against the envelope contract.
///
/// Documents with a `payload` key, or any document when `require_payload` is
/// set, are decoded as typed results; everything else as a plain envelope.
///
/// # Errors
///
/// Returns [`CheckError::Parse`] for malformed JSON and
/// [`CheckError::Contract`] when the envelope invariants do not hold.
///
/// # Example
///
/// ```
/// use envelope_check::check_document;
///
/// let report = check_document(
///     r#"{"outcome": "failed", "failureCategory": "not_found"}"#,
///     false,
/// )
/// .expect("well-formed envelope");
/// assert_eq!(report.to_string(), "failed: not_found (0 field errors)");
/// ```
pub fn check_document(contents: &str, require_payload: bool) -> Result<Report, CheckError> {
    let document: Value = serde_json::from_str(contents).map_err(|err| CheckError::Parse {
        message: err.to_string(),
    })?;

    if require_payload || document.get("payload").is_some() {
        let typed: TypedServiceResult<Value> =
            serde_json::from_value(document).map_err(contract_error)?;
        let has_payload = typed.try_success().is_some();
        return Ok(Report {
            envelope: typed.into(),
            has_payload,
        });
    }

    let envelope: ServiceResult = serde_json::from_value(document).map_err(contract_error)?;
    Ok(Report {
        envelope,
        has_payload: false,
    })
}

fn contract_error(err: serde_json::Error) -> CheckError {
    CheckError::Contract {
        message: err.to_string(),
    }
}
