// Rust guideline compliant 2026-02-06

//! Integration tests for the scan simulation.

use ayuda_core::{
    seed, DecodeError, Error, LookupDecoder, PoolDecoder, ScanDecision, ScanDecoder, ScanPhase,
    ScanStatus, Scanner,
};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const DELAY: Duration = Duration::from_millis(1_500);

fn lookup_scanner() -> Scanner<LookupDecoder> {
    Scanner::new(LookupDecoder::new(seed::scan_pool()), DELAY)
}

#[tokio::test(start_paused = true)]
async fn test_scan_cycle_reaches_result() {
    let mut scanner = lookup_scanner();
    assert_eq!(scanner.phase(), ScanPhase::Idle);

    let token = CancellationToken::new();
    let result = scanner.scan(b"BEN-2024-1234", &token).await.unwrap();
    assert_eq!(result.name, "Maria Reyes");
    assert_eq!(result.status, ScanStatus::Verified);
    assert_eq!(scanner.phase(), ScanPhase::Result);
    assert!(scanner.can_approve());

    let outcome = scanner.decide(ScanDecision::Approve).unwrap();
    assert_eq!(outcome.result.beneficiary_id, "BEN-2024-1234");
    assert_eq!(outcome.decision, ScanDecision::Approve);
    assert_eq!(scanner.phase(), ScanPhase::Idle);
    assert!(scanner.result().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_scan_waits_out_delay() {
    let mut scanner = lookup_scanner();
    let token = CancellationToken::new();
    let started = tokio::time::Instant::now();
    scanner.scan(b"BEN-2024-5678", &token).await.unwrap();
    assert!(started.elapsed() >= DELAY);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_during_delay_returns_to_idle() {
    let mut scanner = lookup_scanner();
    let token = CancellationToken::new();

    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
    });

    let result = scanner.scan(b"BEN-2024-1234", &token).await;
    assert!(matches!(result, Err(Error::ScanCancelled)));
    assert_eq!(scanner.phase(), ScanPhase::Idle);
    assert!(scanner.result().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_scan_rejected_while_result_pending() {
    let mut scanner = lookup_scanner();
    let token = CancellationToken::new();
    scanner.scan(b"BEN-2024-1234", &token).await.unwrap();

    let again = scanner.scan(b"BEN-2024-5678", &token).await;
    assert!(matches!(again, Err(Error::InvalidTransition(_))));
    assert_eq!(
        scanner.result().map(|r| r.beneficiary_id.as_str()),
        Some("BEN-2024-1234")
    );
}

#[tokio::test(start_paused = true)]
async fn test_flagged_result_blocks_approval() {
    let mut scanner = lookup_scanner();
    let token = CancellationToken::new();
    scanner.scan(b"BEN-2024-9012", &token).await.unwrap();
    assert!(!scanner.can_approve());

    let blocked = scanner.decide(ScanDecision::Approve);
    assert!(matches!(blocked, Err(Error::ApprovalBlocked(ref id)) if id == "BEN-2024-9012"));
    assert_eq!(scanner.phase(), ScanPhase::Result, "record stays on screen");

    let outcome = scanner.decide(ScanDecision::Reject).unwrap();
    assert_eq!(outcome.decision, ScanDecision::Reject);
    assert_eq!(scanner.phase(), ScanPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_unknown_beneficiary_returns_to_idle() {
    let mut scanner = lookup_scanner();
    let token = CancellationToken::new();
    let result = scanner.scan(b"BEN-0000-0000", &token).await;
    assert!(matches!(
        result,
        Err(Error::Decode(DecodeError::UnknownBeneficiary(_)))
    ));
    assert_eq!(scanner.phase(), ScanPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_pool_scan_returns_pool_member() {
    let pool = seed::scan_pool();
    let mut scanner = Scanner::new(PoolDecoder::with_seed(pool.clone(), 42), DELAY);
    let token = CancellationToken::new();
    for _ in 0..10 {
        let result = scanner.scan(b"", &token).await.unwrap().clone();
        assert!(pool.contains(&result));
        scanner.decide(ScanDecision::Reject).unwrap();
    }
}

#[test]
fn test_seeded_pool_is_reproducible() {
    let a = PoolDecoder::with_seed(seed::scan_pool(), 7);
    let b = PoolDecoder::with_seed(seed::scan_pool(), 7);
    for _ in 0..5 {
        assert_eq!(a.decode(b"x"), b.decode(b"x"));
    }
}

#[test]
fn test_decide_without_result() {
    let mut scanner = lookup_scanner();
    assert!(matches!(
        scanner.decide(ScanDecision::Reject),
        Err(Error::InvalidTransition(_))
    ));
    assert!(scanner.cancel().is_err());
}

#[test]
fn test_manual_begin_and_cancel() {
    let mut scanner = lookup_scanner();
    scanner.begin().unwrap();
    assert_eq!(scanner.phase(), ScanPhase::Scanning);
    assert!(scanner.begin().is_err());
    scanner.cancel().unwrap();
    assert_eq!(scanner.phase(), ScanPhase::Idle);
}
