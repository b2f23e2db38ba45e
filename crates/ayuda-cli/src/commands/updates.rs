// Rust guideline compliant 2026-02-06

//! Implementation of the `ayuda updates` command.

use crate::OutputFormatter;
use ayuda_app::{parse_update_kind, Portal, Result};
use ayuda_core::{ProgramUpdate, ScanDecoder};

/// Renders program updates, optionally only those of one kind.
///
/// # Errors
///
/// Returns an error if `kind` is not a known update kind.
pub fn execute<D: ScanDecoder>(
    portal: &Portal<D>,
    kind: Option<&str>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let feed = portal.updates();
    let updates: Vec<&ProgramUpdate> = match kind {
        Some(kind) => feed.of_kind(parse_update_kind(kind)?).collect(),
        None => feed.all().iter().collect(),
    };
    Ok(formatter.format_updates(&updates, feed.new_count()))
}
