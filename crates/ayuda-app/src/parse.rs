// Rust guideline compliant 2026-02-09

//! Parsers for user-facing inputs.

use crate::error::{AppError, Result};
use crate::portal::ScanAction;
use ayuda_core::{Amount, Decision, StatusFilter, TransactionStatus, UpdateKind};

/// Parses a transaction status facet. `all` (or an empty value) matches
/// every status.
///
/// # Arguments
///
/// * `value` - Facet string
///
/// # Returns
///
/// The parsed status filter.
///
/// # Errors
///
/// Returns an error if the facet is not a known status.
pub fn parse_status_filter(value: &str) -> Result<StatusFilter> {
    match value.trim().to_lowercase().as_str() {
        "" | "all" => Ok(StatusFilter::All),
        "approved" => Ok(StatusFilter::Only(TransactionStatus::Approved)),
        "rejected" => Ok(StatusFilter::Only(TransactionStatus::Rejected)),
        "flagged" => Ok(StatusFilter::Only(TransactionStatus::Flagged)),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid status filter: {}",
            value
        ))),
    }
}

/// Parses a case review decision.
///
/// # Errors
///
/// Returns an error unless the value is `approve` or `reject`.
pub fn parse_case_decision(value: &str) -> Result<Decision> {
    match value.trim().to_lowercase().as_str() {
        "approve" | "approved" => Ok(Decision::Approve),
        "reject" | "rejected" => Ok(Decision::Reject),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid decision: {} (expected approve or reject)",
            value
        ))),
    }
}

/// Parses what to do with a scanned beneficiary.
///
/// # Errors
///
/// Returns an error unless the value is `approve`, `reject`, or `escalate`.
pub fn parse_scan_action(value: &str) -> Result<ScanAction> {
    match value.trim().to_lowercase().as_str() {
        "approve" => Ok(ScanAction::Approve),
        "reject" => Ok(ScanAction::Reject),
        "escalate" | "flag" => Ok(ScanAction::Escalate),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid scan action: {} (expected approve, reject, or escalate)",
            value
        ))),
    }
}

/// Parses a program update kind.
///
/// # Errors
///
/// Returns an error unless the value is `announcement`, `alert`, or
/// `reminder`.
pub fn parse_update_kind(value: &str) -> Result<UpdateKind> {
    match value.trim().to_lowercase().as_str() {
        "announcement" => Ok(UpdateKind::Announcement),
        "alert" => Ok(UpdateKind::Alert),
        "reminder" => Ok(UpdateKind::Reminder),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid update type: {} (expected announcement, alert, or reminder)",
            value
        ))),
    }
}

/// Parses a peso amount such as `3000`, `₱3,000` or `3,000.50`.
///
/// # Errors
///
/// Returns an error if the amount is malformed.
pub fn parse_amount(value: &str) -> Result<Amount> {
    Ok(value.parse::<Amount>()?)
}
