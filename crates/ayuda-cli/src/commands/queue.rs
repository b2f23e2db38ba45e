// Rust guideline compliant 2026-02-06

//! Implementation of the `ayuda queue` commands.

use super::QueueAction;
use crate::OutputFormatter;
use ayuda_app::{parse_amount, Portal, Result};
use ayuda_core::ScanDecoder;

/// Runs a queue action.
///
/// # Errors
///
/// Returns an error if:
/// - The entry ID is not in the live queue
/// - A waiting entry is completed
/// - A new entry has a blank name or program, or a malformed amount
pub fn execute<D: ScanDecoder>(
    portal: &mut Portal<D>,
    action: QueueAction,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let queue = portal.queue_mut();
    let output = match action {
        QueueAction::List => formatter.format_queue(queue),
        QueueAction::Serve { id } => {
            queue.promote(&id)?;
            match queue.get(&id) {
                Some(entry) => formatter.format_queue_entry("Now serving", entry),
                None => formatter.format_message(&format!("Now serving {}", id)),
            }
        }
        QueueAction::Complete { id } => {
            let done = queue.complete(&id)?;
            formatter.format_queue_entry("Completed", &done.entry)
        }
        QueueAction::Remove { id } => {
            let removed = queue.remove(&id)?;
            formatter.format_queue_entry("Removed", &removed)
        }
        QueueAction::Add {
            name,
            program,
            amount,
        } => {
            let amount = parse_amount(&amount)?;
            let entry = queue.enqueue(&name, &program, amount)?;
            formatter.format_queue_entry("Queued", entry)
        }
        QueueAction::Next => match queue.call_next()? {
            Some(entry) => formatter.format_queue_entry("Now serving", entry),
            None => formatter.format_message("Nobody is waiting."),
        },
    };
    Ok(output)
}
