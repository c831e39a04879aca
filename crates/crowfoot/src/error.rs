//! Error types for Crowfoot operations.
//!
//! The parser and orderer are total functions and contribute no error
//! variants; everything here concerns the surrounding pipeline (file access
//! and configuration loading).

use std::io;

use thiserror::Error;

/// The main error type for Crowfoot operations.
#[derive(Debug, Error)]
pub enum CrowfootError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
