// Rust guideline compliant 2026-02-09

//! Integration tests for the operator session.

use ayuda_app::{AppError, ErrorCode, Portal, ScanAction};
use ayuda_core::{
    seed, Config, Decision, LookupDecoder, ScanPhase, Severity, StatusFilter, TransactionStatus,
};
use tokio_util::sync::CancellationToken;

fn portal() -> Portal<LookupDecoder> {
    Portal::with_decoder(Config::default(), LookupDecoder::new(seed::scan_pool()))
        .expect("seed data is valid")
}

#[test]
fn test_seeded_portal_state() {
    let portal = portal();
    assert_eq!(portal.queue().visible().len(), 5);
    assert_eq!(portal.cases().active_count(), 7);
    assert_eq!(portal.transactions().all().len(), 8);
    assert_eq!(portal.claims().all().len(), 6);
    assert_eq!(portal.updates().all().len(), 8);
    assert_eq!(portal.updates().new_count(), 2);
    assert_eq!(portal.scanner().phase(), ScanPhase::Idle);
}

#[test]
fn test_pool_portal_builds() {
    let portal = Portal::seeded(Config::default()).unwrap();
    assert_eq!(portal.scanner().decoder().pool().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_approved_scan_recorded() {
    let mut portal = portal();
    let token = CancellationToken::new();
    let scanned = portal.scan(b"BEN-2024-5678", &token).await.unwrap();
    assert_eq!(scanned.name, "Jose Garcia");

    let receipt = portal.resolve_scan(ScanAction::Approve, None).unwrap();
    assert_eq!(receipt.action, ScanAction::Approve);
    assert_eq!(receipt.transaction.status, TransactionStatus::Approved);
    assert_eq!(receipt.transaction.processed_by, "Maria Santos");
    assert_eq!(receipt.case_id, None);

    let log = portal.transactions().all();
    assert_eq!(log.len(), 9);
    assert_eq!(log[0], receipt.transaction);
    assert_eq!(portal.scanner().phase(), ScanPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_rejected_scan_keeps_notes() {
    let mut portal = portal();
    let token = CancellationToken::new();
    portal.scan(b"BEN-2024-1234", &token).await.unwrap();

    let receipt = portal
        .resolve_scan(ScanAction::Reject, Some("ID does not match"))
        .unwrap();
    assert_eq!(receipt.transaction.status, TransactionStatus::Rejected);
    assert_eq!(receipt.transaction.notes.as_deref(), Some("ID does not match"));
    let rejected = portal.search_transactions("", StatusFilter::Only(TransactionStatus::Rejected));
    assert_eq!(rejected.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_flagged_scan_cannot_be_approved() {
    let mut portal = portal();
    let token = CancellationToken::new();
    portal.scan(b"BEN-2024-9012", &token).await.unwrap();

    let err = portal.resolve_scan(ScanAction::Approve, None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ApprovalBlocked);
    assert_eq!(portal.transactions().all().len(), 8);
    assert_eq!(portal.scanner().phase(), ScanPhase::Result);
}

#[tokio::test(start_paused = true)]
async fn test_escalation_opens_case() {
    let mut portal = portal();
    let token = CancellationToken::new();
    portal.scan(b"BEN-2024-9012", &token).await.unwrap();

    let receipt = portal
        .resolve_scan(ScanAction::Escalate, Some("Claim limit exceeded"))
        .unwrap();
    let case_id = receipt.case_id.clone().expect("case opened");
    assert_eq!(case_id, "FLAG-008");
    assert_eq!(receipt.transaction.status, TransactionStatus::Flagged);
    assert_eq!(
        receipt.transaction.notes.as_deref(),
        Some("Claim limit exceeded (FLAG-008)")
    );

    let record = portal.cases().get(&case_id).unwrap();
    assert!(record.is_active());
    assert_eq!(record.case.beneficiary_id, "BEN-2024-9012");
    assert_eq!(record.case.flag_reason, "Claim limit exceeded");
    assert_eq!(record.case.severity, Severity::High);
    assert_eq!(portal.cases().active_count(), 8);
    assert_eq!(portal.scanner().phase(), ScanPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_verified_scan_cannot_be_escalated() {
    let mut portal = portal();
    let token = CancellationToken::new();
    portal.scan(b"BEN-2024-1234", &token).await.unwrap();

    let err = portal.resolve_scan(ScanAction::Escalate, None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTransition);
    assert_eq!(portal.cases().active_count(), 7);
    assert_eq!(portal.scanner().phase(), ScanPhase::Result);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_scan_leaves_log_untouched() {
    let mut portal = portal();
    let token = CancellationToken::new();
    token.cancel();

    let err = portal.scan(b"BEN-2024-1234", &token).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ScanCancelled);
    assert_eq!(portal.scanner().phase(), ScanPhase::Idle);
    assert!(portal.resolve_scan(ScanAction::Reject, None).is_err());
    assert_eq!(portal.transactions().all().len(), 8);
}

#[test]
fn test_case_decision_uses_configured_reviewer() {
    let config = Config {
        reviewer: "Ofelia Ramos".to_string(),
        ..Config::default()
    };
    let mut portal =
        Portal::with_decoder(config, LookupDecoder::new(seed::scan_pool())).unwrap();

    let decision = portal
        .decide_case("FLAG-002", Decision::Reject, "duplicate registration confirmed")
        .unwrap();
    assert_eq!(decision.reviewer, "Ofelia Ramos");
    assert_eq!(portal.cases().active_count(), 6);
}

#[test]
fn test_case_decision_requires_notes() {
    let mut portal = portal();
    let err = portal
        .decide_case("FLAG-002", Decision::Approve, "  ")
        .unwrap_err();
    assert!(matches!(err, AppError::Core(_)));
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[test]
fn test_queue_actions_through_portal() {
    let mut portal = portal();
    portal.queue_mut().promote("4").unwrap();
    assert_eq!(portal.queue().serving().map(|e| e.name.as_str()), Some("Pedro Reyes"));
    portal.queue_mut().complete("4").unwrap();
    assert_eq!(portal.queue().completed().len(), 1);
}
