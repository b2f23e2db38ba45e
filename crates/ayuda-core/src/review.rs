// Rust guideline compliant 2026-02-06

//! Supervisor review of flagged cases.
//!
//! Every case keeps a lifecycle tag. Active cases are listed for review;
//! once approved or rejected a case leaves the active set but stays in the
//! store with the decision, notes, reviewer and time attached.

use crate::{Amount, Error, FlaggedCase, Result, Severity};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

/// Reviewer decision on a flagged case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Override the flag and release the claim.
    Approve,
    /// Refuse the claim.
    Reject,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Approve => f.write_str("approve"),
            Decision::Reject => f.write_str("reject"),
        }
    }
}

/// Decision recorded against a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDecision {
    /// The decided case ID.
    pub case_id: String,
    /// Approve or reject.
    pub outcome: Decision,
    /// Trimmed review notes.
    pub notes: String,
    /// Who decided.
    pub reviewer: String,
    /// When the decision was made.
    pub decided_at: DateTime<Utc>,
}

/// Lifecycle of a flagged case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CaseLifecycle {
    /// Awaiting review.
    Active,
    /// Approved or rejected.
    Decided(CaseDecision),
}

/// A flagged case together with its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Case details.
    pub case: FlaggedCase,
    /// Where the case is in review.
    pub lifecycle: CaseLifecycle,
}

impl ReviewRecord {
    /// Whether the case still awaits a decision.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.lifecycle, CaseLifecycle::Active)
    }
}

/// Active case counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    /// High-severity cases.
    pub high: usize,
    /// Medium-severity cases.
    pub medium: usize,
    /// Low-severity cases.
    pub low: usize,
}

impl SeverityCounts {
    /// Total across severities.
    #[must_use]
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// In-memory store of flagged cases awaiting supervisor review.
#[derive(Debug, Clone, Default)]
pub struct CaseReviewStore {
    records: Vec<ReviewRecord>,
    decision_order: Vec<usize>,
    next_seq: u32,
}

impl CaseReviewStore {
    /// Creates a store with all given cases active.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValidationFailed` if two cases share an ID.
    pub fn new(cases: Vec<FlaggedCase>) -> Result<Self> {
        let mut seen = HashSet::new();
        for case in &cases {
            if !seen.insert(case.id.as_str()) {
                return Err(Error::ValidationFailed(format!(
                    "Duplicate case ID: {}",
                    case.id
                )));
            }
        }

        let next_seq = cases.len() as u32 + 1;
        let records = cases
            .into_iter()
            .map(|case| ReviewRecord {
                case,
                lifecycle: CaseLifecycle::Active,
            })
            .collect();

        Ok(Self {
            records,
            decision_order: Vec::new(),
            next_seq,
        })
    }

    /// Returns active cases in the order they were flagged into the store.
    pub fn active(&self) -> impl Iterator<Item = &FlaggedCase> {
        self.records
            .iter()
            .filter(|r| r.is_active())
            .map(|r| &r.case)
    }

    /// Number of active cases.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_active()).count()
    }

    /// Returns decisions in the order they were made.
    #[must_use]
    pub fn decisions(&self) -> Vec<&CaseDecision> {
        self.decision_order
            .iter()
            .filter_map(|&index| match &self.records[index].lifecycle {
                CaseLifecycle::Decided(decision) => Some(decision),
                CaseLifecycle::Active => None,
            })
            .collect()
    }

    /// Looks up a case record, active or decided.
    #[must_use]
    pub fn get(&self, case_id: &str) -> Option<&ReviewRecord> {
        self.records.iter().find(|r| r.case.id == case_id)
    }

    /// Counts active cases per severity.
    #[must_use]
    pub fn severity_counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for case in self.active() {
            match case.severity {
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
        }
        counts
    }

    /// Opens a new active case and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValidationFailed` if the beneficiary ID or flag reason
    /// is blank.
    pub fn open_case(&mut self, draft: CaseDraft) -> Result<String> {
        if draft.beneficiary_id.trim().is_empty() {
            return Err(Error::ValidationFailed(
                "Beneficiary ID cannot be empty".to_string(),
            ));
        }
        if draft.flag_reason.trim().is_empty() {
            return Err(Error::ValidationFailed(
                "Flag reason cannot be empty".to_string(),
            ));
        }

        let id = loop {
            let candidate = format!("FLAG-{:03}", self.next_seq);
            self.next_seq = self.next_seq.saturating_add(1);
            if self.get(&candidate).is_none() {
                break candidate;
            }
        };

        info!(
            case_id = %id,
            beneficiary_id = %draft.beneficiary_id,
            severity = %draft.severity,
            "case opened"
        );
        self.records.push(ReviewRecord {
            case: FlaggedCase {
                id: id.clone(),
                beneficiary_id: draft.beneficiary_id,
                beneficiary_name: draft.beneficiary_name,
                program: draft.program,
                amount: draft.amount,
                flag_reason: draft.flag_reason.trim().to_string(),
                flagged_at: draft.flagged_at,
                severity: draft.severity,
                claim_history_count: draft.claim_history_count,
                last_claim_date: draft.last_claim_date,
                address: draft.address,
                phone: draft.phone,
            },
            lifecycle: CaseLifecycle::Active,
        });

        Ok(id)
    }

    /// Records a reviewer decision and resolves the case.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Notes are empty after trimming (`Error::ValidationFailed`)
    /// - Reviewer is empty after trimming (`Error::ValidationFailed`)
    /// - No active case has the ID (`Error::NotFound`)
    pub fn submit_decision(
        &mut self,
        case_id: &str,
        decision: Decision,
        notes: &str,
        reviewer: &str,
    ) -> Result<CaseDecision> {
        let notes = notes.trim();
        if notes.is_empty() {
            debug!(case_id, "decision refused: empty notes");
            return Err(Error::ValidationFailed(
                "Review notes are required before a decision".to_string(),
            ));
        }
        let reviewer = reviewer.trim();
        if reviewer.is_empty() {
            return Err(Error::ValidationFailed(
                "Reviewer cannot be empty".to_string(),
            ));
        }

        let Some(index) = self
            .records
            .iter()
            .position(|r| r.case.id == case_id && r.is_active())
        else {
            debug!(case_id, "decision refused: no active case");
            return Err(Error::NotFound(case_id.to_string()));
        };

        info!(case_id, %decision, reviewer, "case decided");
        let decided = CaseDecision {
            case_id: case_id.to_string(),
            outcome: decision,
            notes: notes.to_string(),
            reviewer: reviewer.to_string(),
            decided_at: Utc::now(),
        };
        self.records[index].lifecycle = CaseLifecycle::Decided(decided.clone());
        self.decision_order.push(index);

        Ok(decided)
    }
}

/// Everything needed to open a case except its ID, which the store assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDraft {
    /// Beneficiary identifier.
    pub beneficiary_id: String,
    /// Beneficiary name.
    pub beneficiary_name: String,
    /// Aid program.
    pub program: String,
    /// Claimed amount.
    pub amount: Amount,
    /// Why the claim was flagged.
    pub flag_reason: String,
    /// Review priority.
    pub severity: Severity,
    /// When the flag was raised.
    pub flagged_at: NaiveDateTime,
    /// Number of earlier claims.
    pub claim_history_count: u32,
    /// Date of the most recent claim.
    pub last_claim_date: Option<NaiveDate>,
    /// Registered address.
    pub address: String,
    /// Contact number.
    pub phone: String,
}
