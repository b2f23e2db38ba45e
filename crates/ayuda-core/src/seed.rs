// Rust guideline compliant 2026-02-06

//! Demonstration data the portal starts with.

use crate::{
    Amount, ClaimRecord, ClaimStatus, FlaggedCase, ProgramUpdate, QueueEntry, QueueStatus,
    ScanResult, ScanStatus, Severity, Transaction, TransactionStatus, UpdateKind,
};
use chrono::{NaiveDate, NaiveDateTime};

// Seed dates are fixed calendar constants; the fallbacks never trigger.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hh, mm, ss).unwrap_or_default()
}

fn queue_entry(
    id: &str,
    number: u32,
    name: &str,
    program: &str,
    status: QueueStatus,
    wait_minutes: u32,
    pesos: u64,
) -> QueueEntry {
    QueueEntry {
        id: id.to_string(),
        display_number: number,
        name: name.to_string(),
        program: program.to_string(),
        status,
        wait_minutes,
        amount: Amount::from_pesos(pesos),
    }
}

/// Queue at the start of the day: ticket 101 at the counter, four waiting.
#[must_use]
pub fn queue_entries() -> Vec<QueueEntry> {
    vec![
        queue_entry("1", 101, "Maria Santos", "AKAP", QueueStatus::Serving, 5, 3_000),
        queue_entry("2", 102, "Juan Cruz", "Scholarship", QueueStatus::Waiting, 12, 10_000),
        queue_entry("3", 103, "Ana Garcia", "TUPAD", QueueStatus::Waiting, 18, 6_000),
        queue_entry("4", 104, "Pedro Reyes", "AKAP", QueueStatus::Waiting, 24, 3_000),
        queue_entry(
            "5",
            105,
            "Rosa Mendoza",
            "Senior Citizen Aid",
            QueueStatus::Waiting,
            30,
            5_000,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn flagged(
    id: &str,
    beneficiary_id: &str,
    name: &str,
    program: &str,
    pesos: u64,
    reason: &str,
    flagged_at: NaiveDateTime,
    history: u32,
    last_claim: Option<NaiveDate>,
    address: &str,
    phone: &str,
    severity: Severity,
) -> FlaggedCase {
    FlaggedCase {
        id: id.to_string(),
        beneficiary_id: beneficiary_id.to_string(),
        beneficiary_name: name.to_string(),
        program: program.to_string(),
        amount: Amount::from_pesos(pesos),
        flag_reason: reason.to_string(),
        flagged_at,
        severity,
        claim_history_count: history,
        last_claim_date: last_claim,
        address: address.to_string(),
        phone: phone.to_string(),
    }
}

/// Cases awaiting supervisor review.
#[must_use]
pub fn flagged_cases() -> Vec<FlaggedCase> {
    vec![
        flagged(
            "FLAG-001",
            "BEN-2024-9012",
            "Pedro Santos",
            "AKAP",
            3_000,
            "Exceeded maximum claim limit (3 claims in 30 days)",
            at(2024, 11, 11, 13, 55, 20),
            4,
            Some(date(2024, 11, 5)),
            "Brgy. Commonwealth, Quezon City",
            "0919-345-6789",
            Severity::High,
        ),
        flagged(
            "FLAG-002",
            "BEN-2024-4567",
            "Carmen Lopez",
            "TUPAD",
            6_000,
            "Duplicate registration detected",
            at(2024, 11, 11, 12, 30, 15),
            2,
            Some(date(2024, 10, 28)),
            "Brgy. Batasan Hills, Quezon City",
            "0920-456-7890",
            Severity::High,
        ),
        flagged(
            "FLAG-003",
            "BEN-2024-7891",
            "Miguel Ramos",
            "Educational Scholarship",
            10_000,
            "Documentation verification needed",
            at(2024, 11, 11, 11, 45, 30),
            1,
            Some(date(2024, 9, 15)),
            "Brgy. Holy Spirit, Quezon City",
            "0921-567-8901",
            Severity::Medium,
        ),
        flagged(
            "FLAG-004",
            "BEN-2024-1357",
            "Elena Cruz",
            "Senior Citizen Aid",
            5_000,
            "Age verification required",
            at(2024, 11, 11, 10, 20, 45),
            0,
            None,
            "Brgy. Fairview, Quezon City",
            "0922-678-9012",
            Severity::Low,
        ),
        flagged(
            "FLAG-005",
            "BEN-2024-2468",
            "Roberto Aquino",
            "AKAP",
            3_000,
            "Address mismatch with government records",
            at(2024, 11, 10, 16, 35, 20),
            1,
            Some(date(2024, 10, 12)),
            "Brgy. Payatas, Quezon City",
            "0923-789-0123",
            Severity::Medium,
        ),
        flagged(
            "FLAG-006",
            "BEN-2024-3579",
            "Sandra Reyes",
            "TUPAD",
            6_000,
            "Multiple accounts detected under same household",
            at(2024, 11, 10, 14, 15, 10),
            2,
            Some(date(2024, 11, 1)),
            "Brgy. Bagong Silangan, Quezon City",
            "0924-890-1234",
            Severity::High,
        ),
        flagged(
            "FLAG-007",
            "BEN-2024-4680",
            "Antonio Gonzales",
            "Educational Scholarship",
            10_000,
            "Income bracket verification needed",
            at(2024, 11, 10, 13, 5, 55),
            1,
            Some(date(2024, 8, 20)),
            "Brgy. Greater Lagro, Quezon City",
            "0925-901-2345",
            Severity::Low,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn txn(
    id: &str,
    beneficiary_id: &str,
    name: &str,
    program: &str,
    pesos: u64,
    status: TransactionStatus,
    timestamp: NaiveDateTime,
    processed_by: &str,
    notes: Option<&str>,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        beneficiary_id: beneficiary_id.to_string(),
        beneficiary_name: name.to_string(),
        program: program.to_string(),
        amount: Amount::from_pesos(pesos),
        status,
        timestamp,
        processed_by: processed_by.to_string(),
        notes: notes.map(str::to_string),
    }
}

/// Transactions processed so far today, newest first.
#[must_use]
pub fn transactions() -> Vec<Transaction> {
    use TransactionStatus::{Approved, Flagged, Rejected};

    vec![
        txn("TXN-2024-001", "BEN-2024-1234", "Maria Reyes", "AKAP", 3_000, Approved,
            at(2024, 11, 11, 14, 23, 45), "Maria Santos", None),
        txn("TXN-2024-002", "BEN-2024-5678", "Jose Garcia", "Educational Scholarship", 10_000,
            Approved, at(2024, 11, 11, 14, 18, 32), "Maria Santos", None),
        txn("TXN-2024-003", "BEN-2024-9012", "Ana Cruz", "TUPAD", 6_000, Approved,
            at(2024, 11, 11, 14, 10, 15), "Juan Dela Cruz", None),
        txn("TXN-2024-004", "BEN-2024-3456", "Pedro Santos", "AKAP", 3_000, Flagged,
            at(2024, 11, 11, 13, 55, 20), "Maria Santos",
            Some("Exceeded claim limit - requires supervisor review")),
        txn("TXN-2024-005", "BEN-2024-7890", "Rosa Mendoza", "Senior Citizen Aid", 5_000,
            Rejected, at(2024, 11, 11, 13, 42, 10), "Juan Dela Cruz",
            Some("Invalid documentation")),
        txn("TXN-2024-006", "BEN-2024-2345", "Carlos Ramos", "AKAP", 3_000, Approved,
            at(2024, 11, 11, 13, 30, 45), "Maria Santos", None),
        txn("TXN-2024-007", "BEN-2024-6789", "Linda Torres", "TUPAD", 6_000, Approved,
            at(2024, 11, 11, 13, 15, 22), "Juan Dela Cruz", None),
        txn("TXN-2024-008", "BEN-2024-8901", "Roberto Cruz", "Educational Scholarship", 10_000,
            Approved, at(2024, 11, 11, 12, 58, 30), "Maria Santos", None),
    ]
}

/// Beneficiaries a simulated scan can resolve to.
#[must_use]
pub fn scan_pool() -> Vec<ScanResult> {
    vec![
        ScanResult {
            beneficiary_id: "BEN-2024-1234".to_string(),
            name: "Maria Reyes".to_string(),
            program: "AKAP (Ayuda sa Kapos ang Kita Program)".to_string(),
            amount: Amount::from_pesos(3_000),
            status: ScanStatus::Verified,
            address: "Brgy. San Roque, Quezon City".to_string(),
            phone: "0917-123-4567".to_string(),
            registered_date: date(2024, 10, 15),
            claim_count: 0,
            last_claim_date: None,
        },
        ScanResult {
            beneficiary_id: "BEN-2024-5678".to_string(),
            name: "Jose Garcia".to_string(),
            program: "Educational Scholarship Program".to_string(),
            amount: Amount::from_pesos(10_000),
            status: ScanStatus::Verified,
            address: "Brgy. Matandang Balara, Quezon City".to_string(),
            phone: "0918-234-5678".to_string(),
            registered_date: date(2024, 9, 20),
            claim_count: 1,
            last_claim_date: Some(date(2024, 8, 15)),
        },
        ScanResult {
            beneficiary_id: "BEN-2024-9012".to_string(),
            name: "Pedro Santos".to_string(),
            program: "TUPAD (Tulong Panghanapbuhay)".to_string(),
            amount: Amount::from_pesos(6_000),
            status: ScanStatus::Flagged,
            address: "Brgy. Commonwealth, Quezon City".to_string(),
            phone: "0919-345-6789".to_string(),
            registered_date: date(2024, 11, 1),
            claim_count: 3,
            last_claim_date: Some(date(2024, 11, 5)),
        },
    ]
}

fn claim(
    id: &str,
    program: &str,
    pesos: u64,
    status: ClaimStatus,
    filed: NaiveDate,
    claimed: Option<NaiveDate>,
    notes: Option<&str>,
) -> ClaimRecord {
    ClaimRecord {
        id: id.to_string(),
        program: program.to_string(),
        amount: Amount::from_pesos(pesos),
        status,
        filed_date: filed,
        claim_date: claimed,
        notes: notes.map(str::to_string),
    }
}

/// Claim history of the signed-in beneficiary, newest first.
#[must_use]
pub fn claim_history() -> Vec<ClaimRecord> {
    vec![
        claim(
            "CLM-2024-001",
            "AKAP (Ayuda sa Kapos ang Kita)",
            3_000,
            ClaimStatus::Pending,
            date(2024, 11, 11),
            None,
            Some("Ready for claiming. Visit LGU office with your QR code."),
        ),
        claim(
            "CLM-2024-002",
            "Educational Scholarship Program",
            10_000,
            ClaimStatus::Processing,
            date(2024, 11, 8),
            None,
            Some("Document verification in progress. Expected completion: Nov 25, 2024"),
        ),
        claim(
            "CLM-2024-003",
            "AKAP (Ayuda sa Kapos ang Kita)",
            3_000,
            ClaimStatus::Completed,
            date(2024, 10, 15),
            Some(date(2024, 10, 18)),
            None,
        ),
        claim(
            "CLM-2024-004",
            "TUPAD (Tulong Panghanapbuhay)",
            6_000,
            ClaimStatus::Completed,
            date(2024, 9, 20),
            Some(date(2024, 9, 25)),
            None,
        ),
        claim(
            "CLM-2024-005",
            "AKAP (Ayuda sa Kapos ang Kita)",
            3_000,
            ClaimStatus::Completed,
            date(2024, 8, 10),
            Some(date(2024, 8, 12)),
            None,
        ),
        claim(
            "CLM-2024-006",
            "Educational Scholarship Program",
            10_000,
            ClaimStatus::Rejected,
            date(2024, 7, 5),
            None,
            Some("Incomplete documentation. Please resubmit with all required documents."),
        ),
    ]
}

fn update(
    id: &str,
    title: &str,
    message: &str,
    kind: UpdateKind,
    posted_at: NaiveDateTime,
    is_new: bool,
    program: Option<&str>,
) -> ProgramUpdate {
    ProgramUpdate {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        kind,
        posted_at,
        is_new,
        program: program.map(str::to_string),
    }
}

/// Program updates shown on the beneficiary dashboard, newest first.
#[must_use]
pub fn program_updates() -> Vec<ProgramUpdate> {
    use UpdateKind::{Alert, Announcement, Reminder};

    vec![
        update(
            "UPD-001",
            "AKAP Claiming Schedule",
            "The LGU office will be open for AKAP claims on November 15-16, 2024. Please bring \
             your valid ID and QR code. Office hours: 8:00 AM - 5:00 PM.",
            Announcement,
            at(2024, 11, 11, 14, 30, 0),
            true,
            Some("AKAP"),
        ),
        update(
            "UPD-002",
            "Scholarship Document Submission",
            "Reminder: Educational Scholarship applicants must submit proof of enrollment by \
             November 20, 2024. Late submissions may delay your claim processing.",
            Reminder,
            at(2024, 11, 10, 10, 15, 0),
            true,
            Some("Scholarship"),
        ),
        update(
            "UPD-003",
            "Holiday Office Closure",
            "The LGU office will be closed on November 30, 2024 (Bonifacio Day). Please plan \
             your visits accordingly. Regular operations resume December 2.",
            Alert,
            at(2024, 11, 9, 9, 0, 0),
            false,
            None,
        ),
        update(
            "UPD-004",
            "New TUPAD Program Opening",
            "Registration for the next TUPAD batch is now open! Visit the LGU office or check \
             our website for application requirements. Limited slots available.",
            Announcement,
            at(2024, 11, 8, 13, 45, 0),
            false,
            Some("TUPAD"),
        ),
        update(
            "UPD-005",
            "Mobile Claiming Station",
            "A mobile claiming station will be set up at Barangay San Roque on November 18, \
             2024 from 9:00 AM - 3:00 PM for the convenience of beneficiaries.",
            Announcement,
            at(2024, 11, 7, 15, 20, 0),
            false,
            None,
        ),
        update(
            "UPD-006",
            "System Maintenance Notice",
            "The online portal will undergo maintenance on November 13, 2024 from 12:00 AM - \
             6:00 AM. Services will be temporarily unavailable.",
            Alert,
            at(2024, 11, 6, 16, 0, 0),
            false,
            None,
        ),
        update(
            "UPD-007",
            "Senior Citizen Aid Distribution",
            "Senior Citizen Aid for Q4 2024 is now ready for claiming. Eligible seniors may \
             visit the office starting November 12, 2024. Bring your Senior Citizen ID and QR \
             code.",
            Announcement,
            at(2024, 11, 5, 11, 30, 0),
            false,
            Some("Senior Aid"),
        ),
        update(
            "UPD-008",
            "Anti-Fraud Reminder",
            "Important: LGU staff will never ask for payment or fees to process your claims. \
             Report any suspicious activity to our hotline immediately.",
            Alert,
            at(2024, 11, 4, 8, 45, 0),
            false,
            None,
        ),
    ]
}

