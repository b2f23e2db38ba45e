// Rust guideline compliant 2026-02-06

//! Implementation of the `ayuda claims` command.

use crate::OutputFormatter;
use ayuda_app::Portal;
use ayuda_core::ScanDecoder;

/// Renders the beneficiary claim history with its summary.
pub fn execute<D: ScanDecoder>(portal: &Portal<D>, formatter: &dyn OutputFormatter) -> String {
    let claims = portal.claims();
    formatter.format_claims(claims.all(), &claims.summary())
}
