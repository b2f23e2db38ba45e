// Rust guideline compliant 2026-02-06

//! Unit tests for output formatting module.

use ayuda_app::{AppError, ScanAction, ScanReceipt};
use ayuda_cli::create_formatter;
use ayuda_core::{
    seed, CaseReviewStore, ClaimHistory, Error as CoreError, FlaggedCase, ProgramUpdate,
    ProgramUpdates, QueueStore, TransactionLog,
};

fn queue() -> QueueStore {
    QueueStore::new(seed::queue_entries()).unwrap()
}

fn receipt() -> ScanReceipt {
    let log = TransactionLog::new(seed::transactions()).unwrap();
    ScanReceipt {
        action: ScanAction::Escalate,
        beneficiary: seed::scan_pool()[2].clone(),
        transaction: log.all()[3].clone(),
        case_id: Some("FLAG-008".to_string()),
    }
}

#[test]
fn test_json_queue_is_enveloped() {
    let formatter = create_formatter("json", false);
    let output = formatter.format_queue(&queue());
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["status"], "ok");
    assert_eq!(value["result"]["waiting"], 4);
    assert_eq!(value["result"]["serving"], 1);
    assert_eq!(value["result"]["average_wait_minutes"], 21);
    assert_eq!(value["result"]["entries"][0]["status"], "serving");
    assert_eq!(value["result"]["entries"][0]["amount"], 300_000);
}

#[test]
fn test_json_error_envelope() {
    let formatter = create_formatter("json", false);
    let err = AppError::from(CoreError::NotFound("FLAG-404".to_string()));
    let value: serde_json::Value = serde_json::from_str(&formatter.format_error(&err)).unwrap();

    assert_eq!(value["status"], "error");
    assert_eq!(value["code"], "not_found");
    assert_eq!(value["details"]["id"], "FLAG-404");
}

#[test]
fn test_json_receipt_includes_case() {
    let formatter = create_formatter("json", false);
    let value: serde_json::Value = serde_json::from_str(&formatter.format_receipt(&receipt())).unwrap();
    assert_eq!(value["result"]["action"], "escalate");
    assert_eq!(value["result"]["case_id"], "FLAG-008");
}

#[test]
fn test_table_queue_shows_peso_amounts() {
    let formatter = create_formatter("table", false);
    let output = formatter.format_queue(&queue());

    assert!(output.contains("Maria Santos"));
    assert!(output.contains("₱10,000"));
    assert!(output.contains("#101"));
    assert!(output.contains("Serving: #101 Maria Santos"));
    assert!(output.contains("Avg wait: 21 min"));
}

#[test]
fn test_table_cases_with_counts() {
    let formatter = create_formatter("table", false);
    let store = CaseReviewStore::new(seed::flagged_cases()).unwrap();
    let cases: Vec<&FlaggedCase> = store.active().collect();
    let output = formatter.format_cases(&cases, store.severity_counts());

    assert!(output.contains("FLAG-001"));
    assert!(output.contains("High: 3   Medium: 2   Low: 2"));
}

#[test]
fn test_table_case_detail() {
    let formatter = create_formatter("table", false);
    let store = CaseReviewStore::new(seed::flagged_cases()).unwrap();
    let output = formatter.format_case(store.get("FLAG-001").unwrap());

    assert!(output.contains("Case:          FLAG-001"));
    assert!(output.contains("Pedro Santos (BEN-2024-9012)"));
    assert!(output.contains("State:         active"));
}

#[test]
fn test_table_transactions_summary_line() {
    let formatter = create_formatter("table", false);
    let log = TransactionLog::new(seed::transactions()).unwrap();
    let output = formatter.format_transactions(&log.all()[..2], &log.summary());

    assert!(output.contains("TXN-2024-001"));
    assert!(!output.contains("TXN-2024-003"));
    assert!(output.contains("Showing 2 of 8"));
    assert!(output.contains("Disbursed: ₱38,000"));
}

#[test]
fn test_table_empty_transactions() {
    let formatter = create_formatter("table", false);
    let log = TransactionLog::new(seed::transactions()).unwrap();
    let output = formatter.format_transactions(&[], &log.summary());
    assert!(output.contains("No matching transactions."));
}

#[test]
fn test_table_flagged_scan_warns() {
    let formatter = create_formatter("table", false);
    let output = formatter.format_scan(&seed::scan_pool()[2]);
    assert!(output.contains("Status:        flagged"));
    assert!(output.contains("approval is blocked"));
}

#[test]
fn test_table_claims_summary() {
    let formatter = create_formatter("table", false);
    let history = ClaimHistory::new(seed::claim_history());
    let output = formatter.format_claims(history.all(), &history.summary());
    assert!(output.contains("CLM-2024-001"));
    assert!(output.contains("Active: 2   Completed: 3   Total received: ₱12,000"));
}

#[test]
fn test_table_updates_mark_new_entries() {
    let formatter = create_formatter("table", false);
    let feed = ProgramUpdates::new(seed::program_updates());
    let updates: Vec<&ProgramUpdate> = feed.all().iter().collect();
    let output = formatter.format_updates(&updates, feed.new_count());
    assert!(output.starts_with("Program updates (2 new)"));
    assert!(output.contains("AKAP Claiming Schedule [announcement] NEW"));
    assert!(output.contains("Holiday Office Closure [alert]\n"));
    assert!(output.contains("UPD-001  Nov 11, 2024 2:30 PM"));
    assert!(output.contains("Program: Scholarship"));
}

#[test]
fn test_json_updates_carry_new_count() {
    let formatter = create_formatter("json", false);
    let feed = ProgramUpdates::new(seed::program_updates());
    let updates: Vec<&ProgramUpdate> = feed.all().iter().take(3).collect();
    let value: serde_json::Value =
        serde_json::from_str(&formatter.format_updates(&updates, feed.new_count())).unwrap();
    assert_eq!(value["result"]["new_count"], 2);
    assert_eq!(value["result"]["updates"][1]["type"], "reminder");
    assert!(value["result"]["updates"][2].get("program").is_none());
}

#[test]
fn test_table_empty_updates() {
    let formatter = create_formatter("table", false);
    assert_eq!(formatter.format_updates(&[], 0), "No program updates.");
}

#[test]
fn test_table_error_without_color() {
    let formatter = create_formatter("table", false);
    let err = AppError::InvalidInput("bad facet".to_string());
    assert_eq!(formatter.format_error(&err), "Error: Invalid input: bad facet");
}

#[test]
fn test_plain_queue_lines() {
    let formatter = create_formatter("plain", false);
    let output = formatter.format_queue(&queue());
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("1\t101\tserving\tMaria Santos"));
}

#[test]
fn test_plain_receipt() {
    let formatter = create_formatter("plain", false);
    assert_eq!(
        formatter.format_receipt(&receipt()),
        "TXN-2024-004\tescalate\tFLAG-008"
    );
}

#[test]
fn test_unknown_format_falls_back_to_table() {
    let formatter = create_formatter("yaml", false);
    assert!(formatter.format_queue(&queue()).contains("┌"));
}
