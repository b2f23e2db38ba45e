// Rust guideline compliant 2026-02-06

//! Ayuda Core Library
//!
//! This crate provides the foundational components for the Ayuda
//! aid-disbursement verification portal:
//! - Data models (queue entries, flagged cases, transactions, scan results, claims)
//! - Peso amounts held as integer centavos
//! - Queue store with the single-server invariant
//! - Case review store with a retained decision log
//! - Transaction filtering and the append-only transaction log
//! - Scan simulation over an injected decoder capability
//! - Program updates feed
//! - Seed data, configuration, and error types

pub mod claims;
pub mod config;
pub mod error;
pub mod filter;
pub mod fsm;
pub mod models;
pub mod money;
pub mod queue;
pub mod review;
pub mod scan;
pub mod seed;
pub mod updates;

pub use claims::{ClaimHistory, ClaimSummary};
pub use config::{Config, LogLevel, OutputFormat};
pub use error::{Error, Result};
pub use filter::{
    filter_transactions, StatusFilter, TransactionDraft, TransactionLog, TransactionSummary,
};
pub use models::{
    ClaimRecord, ClaimStatus, FlaggedCase, ProgramUpdate, QueueEntry, QueueStatus, ScanResult,
    ScanStatus, Severity, Transaction, TransactionStatus, UpdateKind,
};
pub use money::Amount;
pub use queue::{CompletedEntry, QueueStore};
pub use review::{
    CaseDecision, CaseDraft, CaseLifecycle, CaseReviewStore, Decision, ReviewRecord, SeverityCounts,
};
pub use scan::{
    DecodeError, LookupDecoder, PoolDecoder, ScanDecision, ScanDecoder, ScanOutcome, ScanPhase,
    Scanner,
};
pub use updates::ProgramUpdates;
