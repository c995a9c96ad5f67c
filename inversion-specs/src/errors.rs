//! Error types for loading and checking fixtures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    /// The fixture file is not valid fixture TOML.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// A fixture's expectations did not hold.
    #[error("assertion failed: {message}")]
    Assertion { message: String },
}

pub type SpecResult<T> = Result<T, SpecError>;
