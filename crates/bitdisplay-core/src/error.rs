//! # Error Types
//!
//! The engines are total functions over non-empty strings, so the only
//! error that originates in this workspace's core is rejected input.
//! Errors are never retried or swallowed; callers propagate them with `?`.

use thiserror::Error;

/// Top-level error type for the bitdisplay engines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// A required name or label was empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DisplayError {
    /// Shorthand for the empty-input rejection shared by every engine entry point.
    pub fn empty(what: &str) -> Self {
        Self::InvalidInput(format!("{what} must not be empty"))
    }
}
