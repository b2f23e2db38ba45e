// Rust guideline compliant 2026-02-06

//! Error types for the Ayuda core library.

use thiserror::Error;

/// Result type alias for Ayuda operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Ayuda operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No queue entry, case, or transaction has the given ID.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input rejected by a store operation.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Invalid state transition.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// Approval refused because the scanned beneficiary is flagged.
    #[error("Approval blocked: beneficiary {0} is flagged and must go through case review")]
    ApprovalBlocked(String),

    /// The scan decoder could not produce a result.
    #[error("Decode error: {0}")]
    Decode(#[from] crate::scan::DecodeError),

    /// The scan was cancelled before it resolved.
    #[error("Scan cancelled")]
    ScanCancelled,

    /// A peso amount could not be parsed.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Configuration file or environment value is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
