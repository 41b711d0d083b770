//! CLI entry point for checking a serialised service result envelope.
//!
//! This binary delegates to `envelope_check` for loading and checking, so the
//! behaviour stays testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use envelope_check::{CheckError, EnvelopeCheckSettings, Report, run};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match check() {
        Ok(report) => {
            info!(summary = %report, "envelope is well formed");
            write_line(io::stdout().lock(), &report.to_string());
            ExitCode::SUCCESS
        }
        Err(err) => {
            warn!(error = %err, "envelope check failed");
            write_line(io::stderr().lock(), &err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn check() -> Result<Report, CheckError> {
    let settings =
        EnvelopeCheckSettings::load_from_iter(env::args_os()).map_err(|err| CheckError::Config {
            message: err.to_string(),
        })?;
    run(&settings)
}

fn write_line(mut out: impl Write, message: &str) {
    if let Err(err) = writeln!(out, "{message}") {
        drop(err);
    }
}
