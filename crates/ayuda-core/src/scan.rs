// Rust guideline compliant 2026-02-06

//! QR scan simulation.
//!
//! Decoding a scan is an injected capability ([`ScanDecoder`]): raw scan
//! bytes in, a beneficiary record or a [`DecodeError`] out. The
//! [`Scanner`] drives the Idle → Scanning → Result → Idle cycle around it,
//! waits out the simulated camera delay, and supports cancellation while
//! the delay is pending.

use crate::{Error, Result, ScanResult, ScanStatus};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Failure to turn raw scan bytes into a beneficiary record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Nothing was captured.
    #[error("empty scan payload")]
    EmptyPayload,
    /// The payload is not valid UTF-8 text.
    #[error("scan payload is not valid text")]
    NotText,
    /// The payload does not name a registered beneficiary.
    #[error("unknown beneficiary: {0}")]
    UnknownBeneficiary(String),
    /// The decoder has no records to draw from.
    #[error("no beneficiary records available")]
    NoRecords,
}

/// Turns raw scan bytes into a beneficiary record.
pub trait ScanDecoder {
    /// Decodes one scan.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the payload cannot be resolved.
    fn decode(&self, raw: &[u8]) -> std::result::Result<ScanResult, DecodeError>;
}

/// Stand-in decoder that ignores the payload and draws one record uniformly
/// at random from a fixed pool.
#[derive(Debug)]
pub struct PoolDecoder {
    pool: Vec<ScanResult>,
    rng: Mutex<StdRng>,
}

impl PoolDecoder {
    /// Creates a decoder over `pool` seeded from system entropy.
    #[must_use]
    pub fn new(pool: Vec<ScanResult>) -> Self {
        Self {
            pool,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a decoder with a fixed seed, for reproducible draws.
    #[must_use]
    pub fn with_seed(pool: Vec<ScanResult>, seed: u64) -> Self {
        Self {
            pool,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Records the decoder can return.
    #[must_use]
    pub fn pool(&self) -> &[ScanResult] {
        &self.pool
    }
}

impl ScanDecoder for PoolDecoder {
    fn decode(&self, _raw: &[u8]) -> std::result::Result<ScanResult, DecodeError> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.pool
            .choose(&mut *rng)
            .cloned()
            .ok_or(DecodeError::NoRecords)
    }
}

/// Decoder that reads the beneficiary ID encoded in the QR payload and looks
/// it up in a directory of records.
#[derive(Debug, Clone, Default)]
pub struct LookupDecoder {
    directory: Vec<ScanResult>,
}

impl LookupDecoder {
    /// Creates a decoder over the given records.
    #[must_use]
    pub fn new(directory: Vec<ScanResult>) -> Self {
        Self { directory }
    }
}

impl ScanDecoder for LookupDecoder {
    fn decode(&self, raw: &[u8]) -> std::result::Result<ScanResult, DecodeError> {
        let text = std::str::from_utf8(raw).map_err(|_| DecodeError::NotText)?;
        let id = text.trim();
        if id.is_empty() {
            return Err(DecodeError::EmptyPayload);
        }
        self.directory
            .iter()
            .find(|r| r.beneficiary_id.eq_ignore_ascii_case(id))
            .cloned()
            .ok_or_else(|| DecodeError::UnknownBeneficiary(id.to_string()))
    }
}

/// Where the scanner is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPhase {
    /// Ready to scan.
    Idle,
    /// Waiting for the camera.
    Scanning,
    /// A record is on screen awaiting a decision.
    Result,
}

impl fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanPhase::Idle => f.write_str("idle"),
            ScanPhase::Scanning => f.write_str("scanning"),
            ScanPhase::Result => f.write_str("result"),
        }
    }
}

/// Front-line decision on a scanned beneficiary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanDecision {
    /// Release the disbursement.
    Approve,
    /// Refuse the disbursement.
    Reject,
}

impl fmt::Display for ScanDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanDecision::Approve => f.write_str("approve"),
            ScanDecision::Reject => f.write_str("reject"),
        }
    }
}

/// A decided scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// The record that was scanned.
    pub result: ScanResult,
    /// What the operator decided.
    pub decision: ScanDecision,
    /// When the decision was made.
    pub decided_at: DateTime<Utc>,
}

#[derive(Debug)]
enum ScanState {
    Idle,
    Scanning,
    Result(ScanResult),
}

/// Scan state machine around a decoder.
#[derive(Debug)]
pub struct Scanner<D> {
    decoder: D,
    delay: Duration,
    state: ScanState,
}

impl<D: ScanDecoder> Scanner<D> {
    /// Creates an idle scanner with the given simulated camera delay.
    #[must_use]
    pub fn new(decoder: D, delay: Duration) -> Self {
        Self {
            decoder,
            delay,
            state: ScanState::Idle,
        }
    }

    /// The injected decoder.
    #[must_use]
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Simulated camera delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ScanPhase {
        match self.state {
            ScanState::Idle => ScanPhase::Idle,
            ScanState::Scanning => ScanPhase::Scanning,
            ScanState::Result(_) => ScanPhase::Result,
        }
    }

    /// The record awaiting a decision, if any.
    #[must_use]
    pub fn result(&self) -> Option<&ScanResult> {
        match &self.state {
            ScanState::Result(result) => Some(result),
            _ => None,
        }
    }

    /// Whether the record on screen may be approved. Flagged beneficiaries
    /// cannot be approved at the counter.
    #[must_use]
    pub fn can_approve(&self) -> bool {
        self.result()
            .is_some_and(|r| r.status != ScanStatus::Flagged)
    }

    /// Starts a scan.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTransition` unless the scanner is idle.
    pub fn begin(&mut self) -> Result<()> {
        self.phase().can_transition_to(ScanPhase::Scanning)?;
        self.state = ScanState::Scanning;
        debug!("scan started");
        Ok(())
    }

    /// Finishes the scan in progress by decoding `raw`.
    ///
    /// On a decode failure the scanner returns to idle.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No scan is in progress (`Error::InvalidTransition`)
    /// - The decoder rejects the payload (`Error::Decode`)
    pub fn resolve(&mut self, raw: &[u8]) -> Result<&ScanResult> {
        self.phase().can_transition_to(ScanPhase::Result)?;

        match self.decoder.decode(raw) {
            Ok(result) => {
                info!(
                    beneficiary_id = %result.beneficiary_id,
                    status = %result.status,
                    "scan resolved"
                );
                self.state = ScanState::Result(result);
                match &self.state {
                    ScanState::Result(result) => Ok(result),
                    _ => Err(Error::InvalidTransition(
                        "Scanner left the result phase".to_string(),
                    )),
                }
            }
            Err(err) => {
                warn!(error = %err, "scan could not be decoded");
                self.state = ScanState::Idle;
                Err(Error::Decode(err))
            }
        }
    }

    /// Abandons the scan in progress.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTransition` unless a scan is in progress.
    pub fn cancel(&mut self) -> Result<()> {
        if self.phase() != ScanPhase::Scanning {
            return Err(Error::InvalidTransition(format!(
                "No scan in progress (scanner is {})",
                self.phase()
            )));
        }
        self.state = ScanState::Idle;
        info!("scan cancelled");
        Ok(())
    }

    /// Runs a full scan: enters `Scanning`, waits out the delay, then
    /// decodes `raw`. Cancelling `token` during the delay returns the
    /// scanner to idle.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The scanner is not idle (`Error::InvalidTransition`)
    /// - The token is cancelled before the delay elapses (`Error::ScanCancelled`)
    /// - The decoder rejects the payload (`Error::Decode`)
    pub async fn scan(&mut self, raw: &[u8], token: &CancellationToken) -> Result<&ScanResult> {
        self.begin()?;

        tokio::select! {
            _ = tokio::time::sleep(self.delay) => {}
            _ = token.cancelled() => {
                self.cancel()?;
                return Err(Error::ScanCancelled);
            }
        }

        self.resolve(raw)
    }

    /// Records the operator's decision and returns the scanner to idle.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No record is awaiting a decision (`Error::InvalidTransition`)
    /// - Approval is requested for a flagged beneficiary
    ///   (`Error::ApprovalBlocked`); the record stays on screen
    pub fn decide(&mut self, decision: ScanDecision) -> Result<ScanOutcome> {
        let Some(result) = self.result() else {
            return Err(Error::InvalidTransition(format!(
                "Nothing to decide (scanner is {})",
                self.phase()
            )));
        };

        if decision == ScanDecision::Approve && result.status == ScanStatus::Flagged {
            warn!(
                beneficiary_id = %result.beneficiary_id,
                "approval blocked for flagged beneficiary"
            );
            return Err(Error::ApprovalBlocked(result.beneficiary_id.clone()));
        }

        let result = self.take_result()?;
        info!(beneficiary_id = %result.beneficiary_id, %decision, "scan decided");
        Ok(ScanOutcome {
            result,
            decision,
            decided_at: Utc::now(),
        })
    }

    /// Clears the record on screen without a counter decision, returning it.
    /// Used when a flagged record is handed over to case review.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTransition` if no record is on screen.
    pub fn take_result(&mut self) -> Result<ScanResult> {
        self.phase().can_transition_to(ScanPhase::Idle)?;
        match std::mem::replace(&mut self.state, ScanState::Idle) {
            ScanState::Result(result) => Ok(result),
            other => {
                self.state = other;
                Err(Error::InvalidTransition(
                    "No scanned record to take".to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, status: ScanStatus) -> ScanResult {
        ScanResult {
            beneficiary_id: id.to_string(),
            name: "Test".to_string(),
            program: "AKAP".to_string(),
            amount: crate::Amount::from_pesos(3_000),
            status,
            address: "Brgy. San Roque".to_string(),
            phone: "0917-000-0000".to_string(),
            registered_date: NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
            claim_count: 0,
            last_claim_date: None,
        }
    }

    #[test]
    fn test_lookup_decoder_reads_id() {
        let decoder = LookupDecoder::new(vec![record("BEN-1", ScanStatus::Verified)]);
        assert_eq!(decoder.decode(b" ben-1\n").unwrap().beneficiary_id, "BEN-1");
        assert_eq!(decoder.decode(b""), Err(DecodeError::EmptyPayload));
        assert_eq!(decoder.decode(&[0xff, 0xfe]), Err(DecodeError::NotText));
        assert!(matches!(
            decoder.decode(b"BEN-9"),
            Err(DecodeError::UnknownBeneficiary(_))
        ));
    }

    #[test]
    fn test_pool_decoder_empty_pool() {
        let decoder = PoolDecoder::with_seed(Vec::new(), 7);
        assert_eq!(decoder.decode(b"anything"), Err(DecodeError::NoRecords));
    }

    #[test]
    fn test_take_result_requires_result() {
        let mut scanner = Scanner::new(
            LookupDecoder::new(vec![record("BEN-1", ScanStatus::Flagged)]),
            Duration::ZERO,
        );
        assert!(scanner.take_result().is_err());
        scanner.begin().unwrap();
        assert!(scanner.take_result().is_err());
        assert_eq!(scanner.phase(), ScanPhase::Scanning);
        scanner.resolve(b"BEN-1").unwrap();
        assert_eq!(scanner.take_result().unwrap().beneficiary_id, "BEN-1");
        assert_eq!(scanner.phase(), ScanPhase::Idle);
    }
}
