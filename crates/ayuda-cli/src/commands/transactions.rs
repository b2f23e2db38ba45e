// Rust guideline compliant 2026-02-06

//! Implementation of the `ayuda transactions` command.

use crate::OutputFormatter;
use ayuda_app::{parse_status_filter, Portal, Result};
use ayuda_core::ScanDecoder;

/// Lists transactions matching a free-text query and status facet.
///
/// The summary line always covers the whole log.
///
/// # Errors
///
/// Returns an error if the status facet is unknown.
pub fn execute<D: ScanDecoder>(
    portal: &Portal<D>,
    query: &str,
    status: &str,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let status = parse_status_filter(status)?;
    let matched = portal.search_transactions(query, status);
    Ok(formatter.format_transactions(&matched, &portal.transactions().summary()))
}
