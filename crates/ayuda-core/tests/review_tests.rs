// Rust guideline compliant 2026-02-06

//! Integration tests for the case review store.

use ayuda_core::{
    seed, Amount, CaseDraft, CaseLifecycle, CaseReviewStore, Decision, Error, Severity,
};
use chrono::NaiveDate;

fn seeded() -> CaseReviewStore {
    CaseReviewStore::new(seed::flagged_cases()).expect("seed cases are valid")
}

fn draft() -> CaseDraft {
    CaseDraft {
        beneficiary_id: "BEN-2024-9012".to_string(),
        beneficiary_name: "Pedro Santos".to_string(),
        program: "AKAP".to_string(),
        amount: Amount::from_pesos(3_000),
        flag_reason: "Flagged at counter scan".to_string(),
        severity: Severity::High,
        flagged_at: NaiveDate::from_ymd_opt(2024, 11, 11)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap(),
        claim_history_count: 6,
        last_claim_date: NaiveDate::from_ymd_opt(2024, 11, 5),
        address: "789 Luna St, Brgy. Poblacion".to_string(),
        phone: "0919-345-6789".to_string(),
    }
}

#[test]
fn test_seed_severity_counts() {
    let store = seeded();
    let counts = store.severity_counts();
    assert_eq!((counts.high, counts.medium, counts.low), (3, 2, 2));
    assert_eq!(counts.total(), 7);
    assert_eq!(store.active_count(), 7);
}

#[test]
fn test_empty_notes_rejected() {
    let mut store = seeded();
    for notes in ["", "   ", "\n\t"] {
        let result = store.submit_decision("FLAG-001", Decision::Approve, notes, "Supervisor");
        assert!(matches!(result, Err(Error::ValidationFailed(_))));
    }
    assert_eq!(store.active_count(), 7);
    assert!(store.decisions().is_empty());
}

#[test]
fn test_approve_resolves_case() {
    let mut store = seeded();
    let decision = store
        .submit_decision("FLAG-001", Decision::Approve, "  looks fine ", "Supervisor")
        .unwrap();

    assert_eq!(decision.case_id, "FLAG-001");
    assert_eq!(decision.outcome, Decision::Approve);
    assert_eq!(decision.notes, "looks fine");
    assert_eq!(decision.reviewer, "Supervisor");

    assert_eq!(store.active_count(), 6);
    assert!(store.active().all(|c| c.id != "FLAG-001"));
    assert_eq!(store.decisions(), vec![&decision]);

    let record = store.get("FLAG-001").unwrap();
    assert_eq!(record.lifecycle, CaseLifecycle::Decided(decision));
}

#[test]
fn test_reject_is_distinguished() {
    let mut store = seeded();
    store
        .submit_decision("FLAG-003", Decision::Reject, "duplicate household", "Supervisor")
        .unwrap();
    let decisions = store.decisions();
    assert_eq!(decisions.len(), 1);
    assert_eq!(decisions[0].outcome, Decision::Reject);
    assert_eq!(store.severity_counts().medium, 1);
}

#[test]
fn test_decisions_kept_in_order() {
    let mut store = seeded();
    store
        .submit_decision("FLAG-005", Decision::Reject, "no documents", "Supervisor")
        .unwrap();
    store
        .submit_decision("FLAG-002", Decision::Approve, "verified by phone", "Supervisor")
        .unwrap();
    let order: Vec<&str> = store.decisions().iter().map(|d| d.case_id.as_str()).collect();
    assert_eq!(order, vec!["FLAG-005", "FLAG-002"]);
}

#[test]
fn test_unknown_case_not_found() {
    let mut store = seeded();
    let result = store.submit_decision("FLAG-999", Decision::Approve, "ok", "Supervisor");
    assert!(matches!(result, Err(Error::NotFound(ref id)) if id == "FLAG-999"));
    assert_eq!(store.active_count(), 7);
}

#[test]
fn test_decided_case_cannot_be_decided_again() {
    let mut store = seeded();
    store
        .submit_decision("FLAG-004", Decision::Approve, "ok", "Supervisor")
        .unwrap();
    let again = store.submit_decision("FLAG-004", Decision::Reject, "changed mind", "Supervisor");
    assert!(matches!(again, Err(Error::NotFound(_))));
    assert_eq!(store.decisions().len(), 1);
}

#[test]
fn test_blank_reviewer_rejected() {
    let mut store = seeded();
    let result = store.submit_decision("FLAG-001", Decision::Approve, "ok", " ");
    assert!(matches!(result, Err(Error::ValidationFailed(_))));
    assert!(store.get("FLAG-001").unwrap().is_active());
}

#[test]
fn test_open_case_assigns_next_id() {
    let mut store = seeded();
    let id = store.open_case(draft()).unwrap();
    assert_eq!(id, "FLAG-008");
    assert_eq!(store.active_count(), 8);
    assert_eq!(store.severity_counts().high, 4);
    assert_eq!(store.active().last().map(|c| c.id.as_str()), Some("FLAG-008"));
}

#[test]
fn test_open_case_requires_reason() {
    let mut store = seeded();
    let mut bad = draft();
    bad.flag_reason = "  ".to_string();
    assert!(matches!(store.open_case(bad), Err(Error::ValidationFailed(_))));
    assert_eq!(store.active_count(), 7);
}

#[test]
fn test_duplicate_seed_ids_rejected() {
    let mut cases = seed::flagged_cases();
    cases.push(cases[0].clone());
    assert!(CaseReviewStore::new(cases).is_err());
}
