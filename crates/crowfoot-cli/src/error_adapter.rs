//! Error adapter for converting CrowfootError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. The library has
//! no source-span diagnostics (parsing is total), so the adapter carries a
//! message and an optional help text only.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crowfoot::CrowfootError;

/// A renderable diagnostic wrapping a [`CrowfootError`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Reportable {
    /// Human-readable error message
    message: String,
    /// Optional remediation hint
    help: Option<&'static str>,
}

impl MietteDiagnostic for Reportable {
    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>)
    }
}

/// Adapt a library error into a miette-renderable diagnostic.
pub fn to_reportable(err: &CrowfootError) -> Reportable {
    let help = match err {
        CrowfootError::Io(_) => Some("check that the input path exists and is readable"),
        CrowfootError::Config(_) => Some("check the TOML configuration file for syntax errors"),
    };

    Reportable {
        message: err.to_string(),
        help,
    }
}
