// Rust guideline compliant 2026-02-06

//! Implementation of the `ayuda cases` commands.

use super::CaseAction;
use crate::OutputFormatter;
use ayuda_app::{parse_case_decision, Portal, Result};
use ayuda_core::{Error as CoreError, FlaggedCase, ScanDecoder};

/// Runs a case review action.
///
/// Decisions are recorded under the configured reviewer.
///
/// # Errors
///
/// Returns an error if:
/// - The case ID is unknown (or, for `decide`, already decided)
/// - The decision is not approve or reject
/// - The review notes are blank
pub fn execute<D: ScanDecoder>(
    portal: &mut Portal<D>,
    action: CaseAction,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    match action {
        CaseAction::List => {
            let cases: Vec<&FlaggedCase> = portal.cases().active().collect();
            Ok(formatter.format_cases(&cases, portal.cases().severity_counts()))
        }
        CaseAction::Show { id } => {
            let record = portal
                .cases()
                .get(&id)
                .ok_or_else(|| CoreError::NotFound(id.clone()))?;
            Ok(formatter.format_case(record))
        }
        CaseAction::Decide {
            id,
            decision,
            notes,
        } => {
            let decision = parse_case_decision(&decision)?;
            let decided = portal.decide_case(&id, decision, &notes)?;
            Ok(formatter.format_decision(&decided))
        }
    }
}
