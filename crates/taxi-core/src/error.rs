//! Core error type.
//!
//! Sub-crates define their own error enums for domain failures; `CoreError`
//! covers the few things that can go wrong before a simulation exists, such
//! as an invalid configuration or an unparseable name.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for the `taxi-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
