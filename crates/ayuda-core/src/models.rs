// Rust guideline compliant 2026-02-06

//! Core data models for Ayuda.

use crate::money::Amount;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a queue entry at the claiming counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    /// Waiting to be called.
    Waiting,
    /// Currently being served at the counter.
    Serving,
    /// Service finished.
    Completed,
}

impl QueueStatus {
    /// Returns the lowercase name used in output and input parsing.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueStatus::Waiting => "waiting",
            QueueStatus::Serving => "serving",
            QueueStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A beneficiary waiting for in-person service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Stable entry identifier.
    pub id: String,
    /// Ticket number shown on the counter display.
    pub display_number: u32,
    /// Beneficiary name.
    pub name: String,
    /// Aid program being claimed.
    pub program: String,
    /// Current status.
    pub status: QueueStatus,
    /// Minutes spent waiting so far.
    pub wait_minutes: u32,
    /// Amount to disburse.
    pub amount: Amount,
}

/// Severity assigned to a flagged case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Needs attention first.
    High,
    /// Normal review priority.
    Medium,
    /// Review when convenient.
    Low,
}

impl Severity {
    /// Returns the lowercase name used in output and input parsing.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claim that failed an automatic eligibility rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedCase {
    /// Case identifier (format: FLAG-NNN).
    pub id: String,
    /// Beneficiary identifier.
    pub beneficiary_id: String,
    /// Beneficiary name.
    pub beneficiary_name: String,
    /// Aid program.
    pub program: String,
    /// Claimed amount.
    pub amount: Amount,
    /// Eligibility rule that raised the flag.
    pub flag_reason: String,
    /// When the flag was raised.
    pub flagged_at: NaiveDateTime,
    /// Review priority.
    pub severity: Severity,
    /// Number of earlier claims by the beneficiary.
    pub claim_history_count: u32,
    /// Date of the most recent claim, if any.
    pub last_claim_date: Option<NaiveDate>,
    /// Registered address.
    pub address: String,
    /// Contact number.
    pub phone: String,
}

/// Outcome recorded for a disbursement transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Disbursement released.
    Approved,
    /// Disbursement refused.
    Rejected,
    /// Routed to supervisor review.
    Flagged,
}

impl TransactionStatus {
    /// Returns the lowercase name used in output and input parsing.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Approved => "approved",
            TransactionStatus::Rejected => "rejected",
            TransactionStatus::Flagged => "flagged",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A processed disbursement. Never modified once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction identifier (format: TXN-YYYY-NNN).
    pub id: String,
    /// Beneficiary identifier.
    pub beneficiary_id: String,
    /// Beneficiary name.
    pub beneficiary_name: String,
    /// Aid program.
    pub program: String,
    /// Disbursed or requested amount.
    pub amount: Amount,
    /// Recorded outcome.
    pub status: TransactionStatus,
    /// When the transaction was processed.
    pub timestamp: NaiveDateTime,
    /// Staff member who processed it.
    pub processed_by: String,
    /// Optional free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Verification status attached to a scanned beneficiary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    /// All checks passed.
    Verified,
    /// Registration still being processed.
    Pending,
    /// Failed an eligibility rule.
    Flagged,
}

impl ScanStatus {
    /// Returns the lowercase name used in output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Verified => "verified",
            ScanStatus::Pending => "pending",
            ScanStatus::Flagged => "flagged",
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Beneficiary record resolved from a QR scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Beneficiary identifier.
    pub beneficiary_id: String,
    /// Full name.
    pub name: String,
    /// Aid program.
    pub program: String,
    /// Amount to claim.
    pub amount: Amount,
    /// Verification status.
    pub status: ScanStatus,
    /// Registered address.
    pub address: String,
    /// Contact number.
    pub phone: String,
    /// Date of registration.
    pub registered_date: NaiveDate,
    /// Number of earlier claims.
    pub claim_count: u32,
    /// Date of the most recent claim, if any.
    #[serde(default)]
    pub last_claim_date: Option<NaiveDate>,
}

/// Status of a beneficiary's claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Released to the beneficiary.
    Completed,
    /// Ready for claiming.
    Pending,
    /// Documents under verification.
    Processing,
    /// Refused.
    Rejected,
}

impl ClaimStatus {
    /// Returns the lowercase name used in output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Completed => "completed",
            ClaimStatus::Pending => "pending",
            ClaimStatus::Processing => "processing",
            ClaimStatus::Rejected => "rejected",
        }
    }

    /// Whether the claim is still in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, ClaimStatus::Pending | ClaimStatus::Processing)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claim in a beneficiary's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Claim identifier (format: CLM-YYYY-NNN).
    pub id: String,
    /// Aid program.
    pub program: String,
    /// Claim amount.
    pub amount: Amount,
    /// Current status.
    pub status: ClaimStatus,
    /// Date the claim was filed.
    pub filed_date: NaiveDate,
    /// Date the claim was released, if completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_date: Option<NaiveDate>,
    /// Status notes shown to the beneficiary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Kind of program update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    /// General news, schedules and openings.
    Announcement,
    /// Closures, outages and fraud warnings.
    Alert,
    /// Deadlines the beneficiary must meet.
    Reminder,
}

impl UpdateKind {
    /// Returns the lowercase name used in output and input parsing.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateKind::Announcement => "announcement",
            UpdateKind::Alert => "alert",
            UpdateKind::Reminder => "reminder",
        }
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notice posted by the LGU office to beneficiaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramUpdate {
    /// Update identifier (format: UPD-NNN).
    pub id: String,
    /// Headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Kind of update.
    #[serde(rename = "type")]
    pub kind: UpdateKind,
    /// When the update was posted.
    pub posted_at: NaiveDateTime,
    /// Not yet seen by the beneficiary.
    pub is_new: bool,
    /// Program the update concerns; `None` for office-wide notices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
}
