// Rust guideline compliant 2026-02-06

//! Transaction log and its search filter.

use crate::{Amount, Error, Result, Transaction, TransactionStatus};
use chrono::{Datelike, NaiveDateTime};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

/// Inputs at or above this size are filtered in parallel.
const PARALLEL_THRESHOLD: usize = 1_000;

/// Status facet for the transaction search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every status matches.
    #[default]
    All,
    /// Only the given status matches.
    Only(TransactionStatus),
}

impl StatusFilter {
    /// Whether a status passes this facet.
    #[must_use]
    pub fn matches(&self, status: TransactionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Filters transactions by free-text query and status facet.
///
/// A transaction matches the query when the lowercased query is a substring
/// of the lowercased beneficiary name, beneficiary ID or transaction ID. An
/// empty query matches everything. Input order is preserved.
///
/// # Arguments
///
/// * `transactions` - Transactions to search
/// * `query` - Free-text search
/// * `status` - Status facet
///
/// # Returns
///
/// The matching transactions, cloned, in input order.
#[must_use]
pub fn filter_transactions(
    transactions: &[Transaction],
    query: &str,
    status: StatusFilter,
) -> Vec<Transaction> {
    let needle = query.to_lowercase();

    let predicate = |txn: &&Transaction| {
        if !status.matches(txn.status) {
            return false;
        }
        if needle.is_empty() {
            return true;
        }
        txn.beneficiary_name.to_lowercase().contains(&needle)
            || txn.beneficiary_id.to_lowercase().contains(&needle)
            || txn.id.to_lowercase().contains(&needle)
    };

    if transactions.len() >= PARALLEL_THRESHOLD {
        transactions
            .par_iter()
            .filter(predicate)
            .cloned()
            .collect()
    } else {
        transactions.iter().filter(predicate).cloned().collect()
    }
}

/// Headline figures over a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransactionSummary {
    /// All transactions.
    pub total: usize,
    /// Approved transactions.
    pub approved: usize,
    /// Rejected transactions.
    pub rejected: usize,
    /// Flagged transactions.
    pub flagged: usize,
    /// Sum of approved amounts.
    pub disbursed: Amount,
}

impl TransactionSummary {
    /// Computes the summary for a slice of transactions.
    #[must_use]
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut summary = Self {
            total: transactions.len(),
            ..Self::default()
        };
        for txn in transactions {
            match txn.status {
                TransactionStatus::Approved => {
                    summary.approved += 1;
                    summary.disbursed = summary.disbursed + txn.amount;
                }
                TransactionStatus::Rejected => summary.rejected += 1,
                TransactionStatus::Flagged => summary.flagged += 1,
            }
        }
        summary
    }
}

/// Append-only log of processed transactions, newest first.
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    transactions: Vec<Transaction>,
    next_seq: u32,
}

impl TransactionLog {
    /// Creates a log from seed transactions, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValidationFailed` if two transactions share an ID.
    pub fn new(transactions: Vec<Transaction>) -> Result<Self> {
        let mut seen = HashSet::new();
        for txn in &transactions {
            if !seen.insert(txn.id.as_str()) {
                return Err(Error::ValidationFailed(format!(
                    "Duplicate transaction ID: {}",
                    txn.id
                )));
            }
        }
        let next_seq = transactions.len() as u32 + 1;
        Ok(Self {
            transactions,
            next_seq,
        })
    }

    /// Returns all transactions, newest first.
    #[must_use]
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Looks up a transaction by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Searches the log. See [`filter_transactions`].
    #[must_use]
    pub fn search(&self, query: &str, status: StatusFilter) -> Vec<Transaction> {
        filter_transactions(&self.transactions, query, status)
    }

    /// Summary over the whole log.
    #[must_use]
    pub fn summary(&self) -> TransactionSummary {
        TransactionSummary::from_transactions(&self.transactions)
    }

    /// Appends a new transaction at the head of the log and returns it.
    ///
    /// The ID is assigned as `TXN-<year>-<seq>`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValidationFailed` if the beneficiary ID or the
    /// processing officer is blank.
    pub fn record(&mut self, draft: TransactionDraft) -> Result<&Transaction> {
        if draft.beneficiary_id.trim().is_empty() {
            return Err(Error::ValidationFailed(
                "Beneficiary ID cannot be empty".to_string(),
            ));
        }
        if draft.processed_by.trim().is_empty() {
            return Err(Error::ValidationFailed(
                "Processing officer cannot be empty".to_string(),
            ));
        }

        let id = loop {
            let candidate = format!("TXN-{}-{:03}", draft.timestamp.year(), self.next_seq);
            self.next_seq = self.next_seq.saturating_add(1);
            if self.get(&candidate).is_none() {
                break candidate;
            }
        };

        info!(
            id = %id,
            beneficiary_id = %draft.beneficiary_id,
            status = %draft.status,
            "transaction recorded"
        );
        self.transactions.insert(
            0,
            Transaction {
                id,
                beneficiary_id: draft.beneficiary_id,
                beneficiary_name: draft.beneficiary_name,
                program: draft.program,
                amount: draft.amount,
                status: draft.status,
                timestamp: draft.timestamp,
                processed_by: draft.processed_by.trim().to_string(),
                notes: draft.notes.filter(|n| !n.trim().is_empty()),
            },
        );
        Ok(&self.transactions[0])
    }
}

/// A transaction to append; the log assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    /// Beneficiary identifier.
    pub beneficiary_id: String,
    /// Beneficiary name.
    pub beneficiary_name: String,
    /// Aid program.
    pub program: String,
    /// Amount involved.
    pub amount: Amount,
    /// Outcome.
    pub status: TransactionStatus,
    /// When it was processed.
    pub timestamp: NaiveDateTime,
    /// Staff member who processed it.
    pub processed_by: String,
    /// Optional notes; blank notes are dropped.
    pub notes: Option<String>,
}
