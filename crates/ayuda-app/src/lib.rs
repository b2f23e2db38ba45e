// Rust guideline compliant 2026-02-09

//! Shared application services for Ayuda.
//!
//! This crate wires the core stores into a single operator session
//! ([`Portal`]), parses user-facing inputs, and provides stable error codes
//! and response envelopes for front ends.

pub mod error;
pub mod parse;
pub mod portal;
pub mod response;

pub use error::{AppError, ErrorCode, Result};
pub use parse::{
    parse_amount, parse_case_decision, parse_scan_action, parse_status_filter, parse_update_kind,
};
pub use portal::{Portal, ScanAction, ScanReceipt};
pub use response::{ErrorEnvelope, SuccessEnvelope};
