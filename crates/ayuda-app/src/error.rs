// Rust guideline compliant 2026-02-09

//! Error handling for Ayuda application services.

use ayuda_core::{DecodeError, Error as CoreError};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested queue entry, case, or transaction was not found.
    NotFound,
    /// The requested state transition is invalid.
    InvalidTransition,
    /// Input validation failed.
    ValidationError,
    /// Approval refused for a flagged beneficiary.
    ApprovalBlocked,
    /// The scan payload could not be decoded.
    DecodeError,
    /// The scan was cancelled before it resolved.
    ScanCancelled,
    /// The request included invalid inputs.
    InvalidInput,
    /// Configuration is invalid.
    ConfigError,
    /// IO failure.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::ValidationFailed(_) => ErrorCode::ValidationError,
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
                CoreError::ApprovalBlocked(_) => ErrorCode::ApprovalBlocked,
                CoreError::Decode(_) => ErrorCode::DecodeError,
                CoreError::ScanCancelled => ErrorCode::ScanCancelled,
                CoreError::InvalidAmount(_) => ErrorCode::InvalidInput,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::InvalidInput(_) => None,
            AppError::Core(core) => match core {
                CoreError::NotFound(id) => Some(serde_json::json!({ "id": id })),
                CoreError::ApprovalBlocked(beneficiary_id) => Some(serde_json::json!({
                    "beneficiary_id": beneficiary_id,
                    "next_step": "escalate",
                })),
                CoreError::Decode(DecodeError::UnknownBeneficiary(payload)) => {
                    Some(serde_json::json!({ "payload": payload }))
                }
                _ => None,
            },
        }
    }
}
