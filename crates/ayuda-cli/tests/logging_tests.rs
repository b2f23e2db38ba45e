// Rust guideline compliant 2026-02-06

//! Log file output. The global subscriber can be installed once per test
//! binary, so only one test here installs it.

use ayuda_cli::logging::init_tracing;
use tempfile::TempDir;

#[test]
fn test_log_file_receives_json_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ayuda.log");

    let guard = init_tracing("info", Some(&path)).unwrap();
    assert!(guard.is_some());

    tracing::info!(case_id = "FLAG-008", "case opened");
    tracing::debug!("below the configured level");
    drop(guard);

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let event: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["message"], "case opened");
    assert_eq!(event["fields"]["case_id"], "FLAG-008");
}

#[test]
fn test_unknown_level_is_rejected() {
    assert!(init_tracing("verbose", None).is_err());
}
