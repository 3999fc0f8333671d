//! Unified error types for the payboard crate.

use thiserror::Error;

/// All errors the crate can produce.
///
/// Ledger errors (`MissingField`, `InvalidAmount`, `PaymentNotFound`) are
/// recoverable at the call site: the console aborts the in-progress action,
/// reports the message, and keeps running.
#[derive(Debug, Error)]
pub enum Error {
    /// An add operation was given an empty required field.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the empty field (description, entity, due date)
        field: &'static str,
    },

    /// An add operation was given a non-finite or negative amount.
    #[error("invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// A pay operation referenced an id no record carries.
    #[error("payment {id} not found")]
    PaymentNotFound {
        /// The unknown record id
        id: i64,
    },

    /// Seed configuration could not be read or parsed.
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Console read/write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required environment variable lookup failed.
    #[error("environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
