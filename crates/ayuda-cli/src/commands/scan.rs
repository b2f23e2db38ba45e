// Rust guideline compliant 2026-02-06

//! Implementation of the `ayuda scan` and `ayuda resolve` commands.

use crate::terminal::print_info;
use crate::OutputFormatter;
use ayuda_app::{parse_scan_action, Portal, Result};
use ayuda_core::ScanDecoder;
use tokio_util::sync::CancellationToken;

/// Scans a QR payload and optionally acts on the result.
///
/// Without a decision the beneficiary stays on screen for a later
/// `resolve`. With one, the decision is applied and only the receipt is
/// rendered.
///
/// # Errors
///
/// Returns an error if:
/// - The decision is not approve, reject, or escalate
/// - A scanned record is still awaiting a decision
/// - The scan is cancelled or the payload cannot be decoded
/// - The decision is refused (approving a flagged beneficiary)
pub async fn execute<D: ScanDecoder>(
    portal: &mut Portal<D>,
    payload: &[u8],
    decision: Option<&str>,
    notes: Option<&str>,
    formatter: &dyn OutputFormatter,
    token: &CancellationToken,
) -> Result<String> {
    let action = decision.map(parse_scan_action).transpose()?;

    print_info(&format!(
        "Scanning... ({} ms, Ctrl-C to cancel)",
        portal.config().scan_delay_ms
    ));
    let result = portal.scan(payload, token).await?;

    match action {
        Some(action) => {
            let receipt = portal.resolve_scan(action, notes)?;
            Ok(formatter.format_receipt(&receipt))
        }
        None => Ok(formatter.format_scan(&result)),
    }
}

/// Acts on the beneficiary left on screen by an earlier scan.
///
/// # Errors
///
/// Returns an error if the action is unknown, nothing is on screen, or the
/// portal refuses the action.
pub fn resolve<D: ScanDecoder>(
    portal: &mut Portal<D>,
    action: &str,
    notes: Option<&str>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let action = parse_scan_action(action)?;
    let receipt = portal.resolve_scan(action, notes)?;
    Ok(formatter.format_receipt(&receipt))
}
