// Rust guideline compliant 2026-02-06

//! Output formatting module for the Ayuda CLI.
//!
//! This module renders portal data in the three output formats (JSON,
//! table, plain text).

use ayuda_app::{AppError, ErrorEnvelope, ScanReceipt, SuccessEnvelope};
use ayuda_core::{
    CaseDecision, CaseLifecycle, ClaimRecord, ClaimSummary, FlaggedCase, ProgramUpdate,
    QueueEntry, QueueStore, ReviewRecord, ScanResult, ScanStatus, SeverityCounts, Transaction,
    TransactionSummary, UpdateKind,
};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::terminal::wrap_text;

/// Output formatter trait.
///
/// Defines the interface for rendering portal data in different output
/// formats.
pub trait OutputFormatter {
    /// Formats the live queue with its counters.
    fn format_queue(&self, queue: &QueueStore) -> String;

    /// Formats a queue entry touched by a staff action.
    fn format_queue_entry(&self, action: &str, entry: &QueueEntry) -> String;

    /// Formats the active flagged cases with severity counts.
    fn format_cases(&self, cases: &[&FlaggedCase], counts: SeverityCounts) -> String;

    /// Formats one case with its lifecycle.
    fn format_case(&self, record: &ReviewRecord) -> String;

    /// Formats a recorded case decision.
    fn format_decision(&self, decision: &CaseDecision) -> String;

    /// Formats filtered transactions with the log summary.
    fn format_transactions(&self, transactions: &[Transaction], summary: &TransactionSummary)
        -> String;

    /// Formats the beneficiary on screen after a scan.
    fn format_scan(&self, result: &ScanResult) -> String;

    /// Formats a resolved scan.
    fn format_receipt(&self, receipt: &ScanReceipt) -> String;

    /// Formats the claim history with its summary.
    fn format_claims(&self, claims: &[ClaimRecord], summary: &ClaimSummary) -> String;

    /// Formats program updates, with the number of unseen ones.
    fn format_updates(&self, updates: &[&ProgramUpdate], new_count: usize) -> String;

    /// Formats a short informational message.
    fn format_message(&self, message: &str) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &AppError) -> String;
}

fn to_json<T: Serialize>(value: T) -> String {
    serde_json::to_string_pretty(&SuccessEnvelope::new(value))
        .unwrap_or_else(|_| json!({ "status": "error", "message": "Failed to serialize output" }).to_string())
}

fn optional_date<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// JSON output formatter.
///
/// Wraps every payload in a success envelope for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_queue(&self, queue: &QueueStore) -> String {
        to_json(json!({
            "entries": queue.visible(),
            "waiting": queue.waiting_count(),
            "serving": queue.serving_count(),
            "average_wait_minutes": queue.average_wait_minutes(),
            "completed": queue.completed().len(),
        }))
    }

    fn format_queue_entry(&self, action: &str, entry: &QueueEntry) -> String {
        to_json(json!({ "action": action, "entry": entry }))
    }

    fn format_cases(&self, cases: &[&FlaggedCase], counts: SeverityCounts) -> String {
        to_json(json!({
            "cases": cases,
            "total": cases.len(),
            "severity": counts,
        }))
    }

    fn format_case(&self, record: &ReviewRecord) -> String {
        to_json(record)
    }

    fn format_decision(&self, decision: &CaseDecision) -> String {
        to_json(decision)
    }

    fn format_transactions(
        &self,
        transactions: &[Transaction],
        summary: &TransactionSummary,
    ) -> String {
        to_json(json!({
            "transactions": transactions,
            "matched": transactions.len(),
            "summary": summary,
        }))
    }

    fn format_scan(&self, result: &ScanResult) -> String {
        to_json(result)
    }

    fn format_receipt(&self, receipt: &ScanReceipt) -> String {
        to_json(receipt)
    }

    fn format_claims(&self, claims: &[ClaimRecord], summary: &ClaimSummary) -> String {
        to_json(json!({ "claims": claims, "summary": summary }))
    }

    fn format_updates(&self, updates: &[&ProgramUpdate], new_count: usize) -> String {
        to_json(json!({ "updates": updates, "new_count": new_count }))
    }

    fn format_message(&self, message: &str) -> String {
        to_json(json!({ "message": message }))
    }

    fn format_error(&self, error: &AppError) -> String {
        serde_json::to_string_pretty(&ErrorEnvelope::from_error(error))
            .unwrap_or_else(|_| json!({ "status": "error", "message": error.to_string() }).to_string())
    }
}

/// Table output formatter.
///
/// Renders lists as tables and single records as aligned fields.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
        let _ = write!(buffer, "{}", text);
        let _ = buffer.reset();
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }

    fn scan_status(&self, status: ScanStatus) -> String {
        let color = match status {
            ScanStatus::Verified => Color::Green,
            ScanStatus::Pending => Color::Yellow,
            ScanStatus::Flagged => Color::Red,
        };
        self.paint(status.as_str(), color, true)
    }

    fn update_kind(&self, kind: UpdateKind) -> String {
        let color = match kind {
            UpdateKind::Announcement => Color::Blue,
            UpdateKind::Alert => Color::Red,
            UpdateKind::Reminder => Color::Yellow,
        };
        self.paint(kind.as_str(), color, true)
    }
}

fn table(header: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(header.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row);
    }
    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

impl OutputFormatter for TableFormatter {
    fn format_queue(&self, queue: &QueueStore) -> String {
        if queue.visible().is_empty() {
            return "Queue is empty.".to_string();
        }

        let rows = queue
            .visible()
            .iter()
            .map(|e| {
                vec![
                    e.id.clone(),
                    format!("#{}", e.display_number),
                    e.name.clone(),
                    e.program.clone(),
                    e.status.to_string(),
                    format!("{} min", e.wait_minutes),
                    e.amount.to_string(),
                ]
            })
            .collect();
        let mut output = table(
            &["ID", "No.", "Name", "Program", "Status", "Wait", "Amount"],
            rows,
        );

        let serving = queue.serving().map_or_else(
            || "nobody".to_string(),
            |e| format!("#{} {}", e.display_number, e.name),
        );
        output.push_str(&format!(
            "\nServing: {}   Waiting: {}   Avg wait: {}   Completed today: {}",
            serving,
            queue.waiting_count(),
            queue
                .average_wait_minutes()
                .map_or_else(|| "-".to_string(), |m| format!("{} min", m)),
            queue.completed().len()
        ));
        output
    }

    fn format_queue_entry(&self, action: &str, entry: &QueueEntry) -> String {
        format!(
            "{} #{} {} ({}, {})",
            self.paint(action, Color::Green, true),
            entry.display_number,
            entry.name,
            entry.program,
            entry.status
        )
    }

    fn format_cases(&self, cases: &[&FlaggedCase], counts: SeverityCounts) -> String {
        if cases.is_empty() {
            return "No flagged cases awaiting review.".to_string();
        }

        let rows = cases
            .iter()
            .map(|c| {
                vec![
                    c.id.clone(),
                    c.severity.to_string(),
                    c.beneficiary_name.clone(),
                    c.program.clone(),
                    c.amount.to_string(),
                    c.flag_reason.clone(),
                ]
            })
            .collect();
        let mut output = table(
            &["ID", "Severity", "Beneficiary", "Program", "Amount", "Reason"],
            rows,
        );
        output.push_str(&format!(
            "\nHigh: {}   Medium: {}   Low: {}",
            self.paint(&counts.high.to_string(), Color::Red, true),
            self.paint(&counts.medium.to_string(), Color::Yellow, true),
            counts.low
        ));
        output
    }

    fn format_case(&self, record: &ReviewRecord) -> String {
        let case = &record.case;
        let mut output = String::new();

        output.push_str(&format!("Case:          {}\n", case.id));
        output.push_str(&format!("Severity:      {}\n", case.severity));
        output.push_str(&format!(
            "Beneficiary:   {} ({})\n",
            case.beneficiary_name, case.beneficiary_id
        ));
        output.push_str(&format!("Program:       {}\n", case.program));
        output.push_str(&format!("Amount:        {}\n", case.amount));
        output.push_str(&format!("Reason:        {}\n", wrap_text(&case.flag_reason, 15)));
        output.push_str(&format!("Flagged at:    {}\n", case.flagged_at));
        output.push_str(&format!("Prior claims:  {}\n", case.claim_history_count));
        output.push_str(&format!(
            "Last claim:    {}\n",
            optional_date(case.last_claim_date)
        ));
        output.push_str(&format!("Address:       {}\n", case.address));
        output.push_str(&format!("Phone:         {}\n", case.phone));

        match &record.lifecycle {
            CaseLifecycle::Active => {
                output.push_str(&format!("State:         {}\n", self.paint("active", Color::Yellow, true)));
            }
            CaseLifecycle::Decided(decision) => {
                output.push_str(&format!(
                    "State:         {} by {} at {}\n",
                    decision.outcome, decision.reviewer, decision.decided_at
                ));
                output.push_str(&format!("Notes:         {}\n", wrap_text(&decision.notes, 15)));
            }
        }

        output
    }

    fn format_decision(&self, decision: &CaseDecision) -> String {
        format!(
            "{} {} ({}): {}",
            self.paint("Decided", Color::Green, true),
            decision.case_id,
            decision.outcome,
            decision.notes
        )
    }

    fn format_transactions(
        &self,
        transactions: &[Transaction],
        summary: &TransactionSummary,
    ) -> String {
        let mut output = if transactions.is_empty() {
            "No matching transactions.".to_string()
        } else {
            let rows = transactions
                .iter()
                .map(|t| {
                    vec![
                        t.id.clone(),
                        t.beneficiary_name.clone(),
                        t.beneficiary_id.clone(),
                        t.program.clone(),
                        t.amount.to_string(),
                        t.status.to_string(),
                        t.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                        t.processed_by.clone(),
                    ]
                })
                .collect();
            table(
                &[
                    "ID",
                    "Beneficiary",
                    "Beneficiary ID",
                    "Program",
                    "Amount",
                    "Status",
                    "Time",
                    "Processed by",
                ],
                rows,
            )
        };
        output.push_str(&format!(
            "\nShowing {} of {}   Approved: {}   Rejected: {}   Flagged: {}   Disbursed: {}",
            transactions.len(),
            summary.total,
            summary.approved,
            summary.rejected,
            summary.flagged,
            summary.disbursed
        ));
        output
    }

    fn format_scan(&self, result: &ScanResult) -> String {
        let mut output = String::new();
        output.push_str(&format!("Beneficiary:   {} ({})\n", result.name, result.beneficiary_id));
        output.push_str(&format!("Status:        {}\n", self.scan_status(result.status)));
        output.push_str(&format!("Program:       {}\n", result.program));
        output.push_str(&format!("Amount:        {}\n", result.amount));
        output.push_str(&format!("Address:       {}\n", result.address));
        output.push_str(&format!("Phone:         {}\n", result.phone));
        output.push_str(&format!("Registered:    {}\n", result.registered_date));
        output.push_str(&format!("Prior claims:  {}\n", result.claim_count));
        output.push_str(&format!(
            "Last claim:    {}\n",
            optional_date(result.last_claim_date)
        ));
        if result.status == ScanStatus::Flagged {
            output.push_str(&self.paint(
                "Flagged beneficiary: approval is blocked, escalate or reject.\n",
                Color::Red,
                false,
            ));
        }
        output
    }

    fn format_receipt(&self, receipt: &ScanReceipt) -> String {
        let mut output = format!(
            "{} {} for {}: {} {}",
            self.paint("Recorded", Color::Green, true),
            receipt.transaction.id,
            receipt.beneficiary.name,
            receipt.transaction.status,
            receipt.transaction.amount
        );
        if let Some(case_id) = &receipt.case_id {
            output.push_str(&format!("\nOpened case {} for supervisor review", case_id));
        }
        output
    }

    fn format_claims(&self, claims: &[ClaimRecord], summary: &ClaimSummary) -> String {
        let mut output = if claims.is_empty() {
            "No claims on record.".to_string()
        } else {
            let rows = claims
                .iter()
                .map(|c| {
                    vec![
                        c.id.clone(),
                        c.program.clone(),
                        c.amount.to_string(),
                        c.status.to_string(),
                        c.filed_date.to_string(),
                        optional_date(c.claim_date),
                    ]
                })
                .collect();
            table(
                &["ID", "Program", "Amount", "Status", "Filed", "Claimed"],
                rows,
            )
        };
        output.push_str(&format!(
            "\nActive: {}   Completed: {}   Total received: {}",
            summary.active, summary.completed, summary.total_received
        ));
        output
    }

    fn format_updates(&self, updates: &[&ProgramUpdate], new_count: usize) -> String {
        if updates.is_empty() {
            return "No program updates.".to_string();
        }
        let mut output = format!("Program updates ({} new)\n", new_count);
        for u in updates {
            let marker = if u.is_new {
                self.paint(" NEW", Color::Green, true)
            } else {
                String::new()
            };
            output.push_str(&format!(
                "\n{} [{}]{}\n",
                self.paint(&u.title, Color::White, true),
                self.update_kind(u.kind),
                marker
            ));
            output.push_str(&format!(
                "{}  {}\n",
                u.id,
                u.posted_at.format("%b %-d, %Y %-I:%M %p")
            ));
            if let Some(program) = &u.program {
                output.push_str(&format!("Program: {}\n", program));
            }
            output.push_str(&format!("{}\n", wrap_text(&u.message, 0)));
        }
        output
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &AppError) -> String {
        format!("{}{}", self.paint("Error: ", Color::Red, true), error)
    }
}

/// Plain text output formatter.
///
/// One record per line, tab separated, without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_queue(&self, queue: &QueueStore) -> String {
        let mut output = String::new();
        for e in queue.visible() {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                e.id, e.display_number, e.status, e.name, e.program, e.amount
            ));
        }
        output
    }

    fn format_queue_entry(&self, action: &str, entry: &QueueEntry) -> String {
        format!("{}\t{}\t{}", action, entry.id, entry.status)
    }

    fn format_cases(&self, cases: &[&FlaggedCase], _counts: SeverityCounts) -> String {
        let mut output = String::new();
        for c in cases {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                c.id, c.severity, c.beneficiary_id, c.flag_reason
            ));
        }
        output
    }

    fn format_case(&self, record: &ReviewRecord) -> String {
        let state = match &record.lifecycle {
            CaseLifecycle::Active => "active".to_string(),
            CaseLifecycle::Decided(d) => d.outcome.to_string(),
        };
        format!(
            "{}\n{}\n{}\n{}\n{}\n",
            record.case.id, state, record.case.beneficiary_id, record.case.amount, record.case.flag_reason
        )
    }

    fn format_decision(&self, decision: &CaseDecision) -> String {
        format!("{}\t{}", decision.case_id, decision.outcome)
    }

    fn format_transactions(
        &self,
        transactions: &[Transaction],
        _summary: &TransactionSummary,
    ) -> String {
        let mut output = String::new();
        for t in transactions {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                t.id, t.status, t.beneficiary_id, t.beneficiary_name, t.amount
            ));
        }
        output
    }

    fn format_scan(&self, result: &ScanResult) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            result.beneficiary_id, result.status, result.name, result.amount
        )
    }

    fn format_receipt(&self, receipt: &ScanReceipt) -> String {
        match &receipt.case_id {
            Some(case_id) => format!("{}\t{}\t{}", receipt.transaction.id, receipt.action, case_id),
            None => format!("{}\t{}", receipt.transaction.id, receipt.action),
        }
    }

    fn format_claims(&self, claims: &[ClaimRecord], _summary: &ClaimSummary) -> String {
        let mut output = String::new();
        for c in claims {
            output.push_str(&format!("{}\t{}\t{}\t{}\n", c.id, c.status, c.amount, c.program));
        }
        output
    }

    fn format_updates(&self, updates: &[&ProgramUpdate], _new_count: usize) -> String {
        let mut output = String::new();
        for u in updates {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                u.id,
                u.kind,
                if u.is_new { "new" } else { "seen" },
                u.posted_at.format("%Y-%m-%d %H:%M"),
                u.title
            ));
        }
        output
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &AppError) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
