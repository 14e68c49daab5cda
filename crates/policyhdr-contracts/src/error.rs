//! Error types for policy header rendering.
//!
//! All fallible operations return `PolicyResult<T>`. Variants carry the
//! header being rendered and the offending directive so callers can report
//! exactly which configuration key was rejected.

use thiserror::Error;

/// The unified error type for the policyhdr crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyHeaderError {
    /// A configuration key is not part of the directive catalog.
    #[error("invalid directive for {header}: {name}")]
    InvalidDirectiveName { header: String, name: String },

    /// The parameters for a directive are absent or select nothing.
    ///
    /// Raised when none of `none`, `all`, `self` is set and `origins` is
    /// missing or empty.
    #[error("invalid directive parameters for {header}: {name}")]
    InvalidDirectiveParameters { header: String, name: String },

    /// A policy document could not be read or parsed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the policyhdr crates.
pub type PolicyResult<T> = Result<T, PolicyHeaderError>;
