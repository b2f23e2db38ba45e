// Rust guideline compliant 2026-02-09

//! One operator session over the in-memory stores.
//!
//! The portal owns the queue, the case review store, the transaction log,
//! the claim history, the program updates feed and the scanner, and routes
//! scan outcomes between them: approved and rejected scans land in the
//! transaction log, flagged scans can be escalated into case review.

use crate::error::Result;
use ayuda_core::{
    seed, CaseDecision, CaseDraft, CaseReviewStore, ClaimHistory, Config, Decision,
    Error as CoreError, PoolDecoder, ProgramUpdates, QueueStore, ScanDecision, ScanDecoder,
    ScanResult, ScanStatus, Scanner, Severity, StatusFilter, Transaction, TransactionDraft,
    TransactionLog, TransactionStatus,
};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Flag reason used when an escalation gives none.
const DEFAULT_FLAG_REASON: &str = "Flagged during counter verification";

/// Claims at or above this count escalate as high severity.
const HIGH_SEVERITY_CLAIMS: u32 = 3;

/// What to do with the beneficiary on screen after a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanAction {
    /// Release the disbursement.
    Approve,
    /// Refuse the disbursement.
    Reject,
    /// Hand a flagged beneficiary over to supervisor review.
    Escalate,
}

impl fmt::Display for ScanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanAction::Approve => f.write_str("approve"),
            ScanAction::Reject => f.write_str("reject"),
            ScanAction::Escalate => f.write_str("escalate"),
        }
    }
}

/// Record of a resolved scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReceipt {
    /// What was done.
    pub action: ScanAction,
    /// The scanned beneficiary.
    pub beneficiary: ScanResult,
    /// Transaction appended to the log.
    pub transaction: Transaction,
    /// Case opened for an escalation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
}

/// In-memory state of one operator session.
#[derive(Debug)]
pub struct Portal<D = PoolDecoder> {
    config: Config,
    queue: QueueStore,
    cases: CaseReviewStore,
    transactions: TransactionLog,
    claims: ClaimHistory,
    updates: ProgramUpdates,
    scanner: Scanner<D>,
}

impl Portal<PoolDecoder> {
    /// Creates a session over the demonstration data with the random pool
    /// decoder.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed data violates a store invariant.
    pub fn seeded(config: Config) -> Result<Self> {
        Self::with_decoder(config, PoolDecoder::new(seed::scan_pool()))
    }
}

impl<D: ScanDecoder> Portal<D> {
    /// Creates a session over the demonstration data with the given decoder.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed data violates a store invariant.
    pub fn with_decoder(config: Config, decoder: D) -> Result<Self> {
        Ok(Self {
            queue: QueueStore::new(seed::queue_entries())?,
            cases: CaseReviewStore::new(seed::flagged_cases())?,
            transactions: TransactionLog::new(seed::transactions())?,
            claims: ClaimHistory::new(seed::claim_history()),
            updates: ProgramUpdates::new(seed::program_updates()),
            scanner: Scanner::new(decoder, config.scan_delay()),
            config,
        })
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The counter queue.
    #[must_use]
    pub fn queue(&self) -> &QueueStore {
        &self.queue
    }

    /// The counter queue, for staff actions.
    pub fn queue_mut(&mut self) -> &mut QueueStore {
        &mut self.queue
    }

    /// Flagged cases under review.
    #[must_use]
    pub fn cases(&self) -> &CaseReviewStore {
        &self.cases
    }

    /// Processed transactions.
    #[must_use]
    pub fn transactions(&self) -> &TransactionLog {
        &self.transactions
    }

    /// The beneficiary's claim history.
    #[must_use]
    pub fn claims(&self) -> &ClaimHistory {
        &self.claims
    }

    /// Program updates posted to beneficiaries.
    #[must_use]
    pub fn updates(&self) -> &ProgramUpdates {
        &self.updates
    }

    /// The scanner.
    #[must_use]
    pub fn scanner(&self) -> &Scanner<D> {
        &self.scanner
    }

    /// Searches the transaction log.
    #[must_use]
    pub fn search_transactions(&self, query: &str, status: StatusFilter) -> Vec<Transaction> {
        self.transactions.search(query, status)
    }

    /// Decides a flagged case as the configured reviewer.
    ///
    /// # Errors
    ///
    /// Returns an error if the notes are blank or no active case has the ID.
    pub fn decide_case(
        &mut self,
        case_id: &str,
        decision: Decision,
        notes: &str,
    ) -> Result<CaseDecision> {
        let reviewer = self.config.reviewer.clone();
        Ok(self
            .cases
            .submit_decision(case_id, decision, notes, &reviewer)?)
    }

    /// Runs a scan and returns the beneficiary on screen.
    ///
    /// # Errors
    ///
    /// Returns an error if a scan is already pending, the token is
    /// cancelled, or the payload cannot be decoded.
    pub async fn scan(&mut self, raw: &[u8], token: &CancellationToken) -> Result<ScanResult> {
        Ok(self.scanner.scan(raw, token).await?.clone())
    }

    /// Abandons a scan in progress.
    ///
    /// # Errors
    ///
    /// Returns an error unless a scan is in progress.
    pub fn cancel_scan(&mut self) -> Result<()> {
        Ok(self.scanner.cancel()?)
    }

    /// Acts on the beneficiary on screen and records the transaction.
    ///
    /// `notes` go on the transaction; for an escalation they become the
    /// flag reason.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No scanned record awaits a decision
    /// - Approval is requested for a flagged beneficiary
    /// - Escalation is requested for a beneficiary who is not flagged
    pub fn resolve_scan(&mut self, action: ScanAction, notes: Option<&str>) -> Result<ScanReceipt> {
        match action {
            ScanAction::Approve => self.decide_scan(ScanDecision::Approve, notes),
            ScanAction::Reject => self.decide_scan(ScanDecision::Reject, notes),
            ScanAction::Escalate => self.escalate(notes),
        }
    }

    fn decide_scan(&mut self, decision: ScanDecision, notes: Option<&str>) -> Result<ScanReceipt> {
        let outcome = self.scanner.decide(decision)?;
        let (action, status) = match decision {
            ScanDecision::Approve => (ScanAction::Approve, TransactionStatus::Approved),
            ScanDecision::Reject => (ScanAction::Reject, TransactionStatus::Rejected),
        };

        let draft = self.draft_for(&outcome.result, status, notes.map(str::to_string));
        let transaction = self.transactions.record(draft)?.clone();

        Ok(ScanReceipt {
            action,
            beneficiary: outcome.result,
            transaction,
            case_id: None,
        })
    }

    fn escalate(&mut self, notes: Option<&str>) -> Result<ScanReceipt> {
        let Some(on_screen) = self.scanner.result() else {
            return Err(CoreError::InvalidTransition(
                "No scanned record to escalate".to_string(),
            )
            .into());
        };
        if on_screen.status != ScanStatus::Flagged {
            return Err(CoreError::InvalidTransition(format!(
                "Beneficiary {} is {}; only flagged records go to case review",
                on_screen.beneficiary_id, on_screen.status
            ))
            .into());
        }

        let result = self.scanner.take_result()?;
        let reason = notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_FLAG_REASON)
            .to_string();
        let severity = if result.claim_count >= HIGH_SEVERITY_CLAIMS {
            Severity::High
        } else {
            Severity::Medium
        };

        let case_id = self.cases.open_case(CaseDraft {
            beneficiary_id: result.beneficiary_id.clone(),
            beneficiary_name: result.name.clone(),
            program: result.program.clone(),
            amount: result.amount,
            flag_reason: reason.clone(),
            severity,
            flagged_at: now(),
            claim_history_count: result.claim_count,
            last_claim_date: result.last_claim_date,
            address: result.address.clone(),
            phone: result.phone.clone(),
        })?;

        let draft = self.draft_for(
            &result,
            TransactionStatus::Flagged,
            Some(format!("{} ({})", reason, case_id)),
        );
        let transaction = self.transactions.record(draft)?.clone();

        info!(case_id = %case_id, beneficiary_id = %result.beneficiary_id, "scan escalated");
        Ok(ScanReceipt {
            action: ScanAction::Escalate,
            beneficiary: result,
            transaction,
            case_id: Some(case_id),
        })
    }

    fn draft_for(
        &self,
        result: &ScanResult,
        status: TransactionStatus,
        notes: Option<String>,
    ) -> TransactionDraft {
        TransactionDraft {
            beneficiary_id: result.beneficiary_id.clone(),
            beneficiary_name: result.name.clone(),
            program: result.program.clone(),
            amount: result.amount,
            status,
            timestamp: now(),
            processed_by: self.config.operator.clone(),
            notes,
        }
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
