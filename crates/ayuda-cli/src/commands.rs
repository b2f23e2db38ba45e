// Rust guideline compliant 2026-02-06

//! Command implementations for the Ayuda CLI.
//!
//! Every command runs against a [`Portal`] and returns its rendered output,
//! so the same code serves one-shot invocations and the interactive
//! session.

pub mod cases;
pub mod claims;
pub mod queue;
pub mod scan;
pub mod session;
pub mod transactions;
pub mod updates;

use crate::OutputFormatter;
use ayuda_app::{Portal, Result};
use ayuda_core::ScanDecoder;
use clap::Subcommand;
use tokio_util::sync::CancellationToken;

/// Portal commands shared by the binary and the session prompt.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Manage the claiming-counter queue
    Queue {
        #[command(subcommand)]
        action: QueueAction,
    },

    /// Review flagged cases
    Cases {
        #[command(subcommand)]
        action: CaseAction,
    },

    /// Search processed transactions
    Transactions {
        /// Free-text search over name, beneficiary ID and transaction ID
        #[arg(long, short, default_value = "")]
        query: String,

        /// Status facet (all, approved, rejected, flagged)
        #[arg(long, default_value = "all")]
        status: String,
    },

    /// Scan a beneficiary QR code
    Scan {
        /// Raw QR payload handed to the decoder
        #[arg(long, default_value = "")]
        payload: String,

        /// Act on the result right away (approve, reject, escalate)
        #[arg(long)]
        decision: Option<String>,

        /// Notes for the transaction, or the flag reason when escalating
        #[arg(long)]
        notes: Option<String>,
    },

    /// Act on the beneficiary left on screen by the last scan
    Resolve {
        /// approve, reject, or escalate
        action: String,

        /// Notes for the transaction, or the flag reason when escalating
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show the beneficiary claim history
    Claims,

    /// Show program updates posted by the LGU office
    Updates {
        /// Only updates of this type (announcement, alert, reminder)
        #[arg(long = "type")]
        kind: Option<String>,
    },
}

/// Queue subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum QueueAction {
    /// List waiting and serving entries
    List,

    /// Call an entry to the counter
    Serve {
        /// Queue entry ID
        id: String,
    },

    /// Finish service for the entry at the counter
    Complete {
        /// Queue entry ID
        id: String,
    },

    /// Remove an entry from the queue
    Remove {
        /// Queue entry ID
        id: String,
    },

    /// Add a walk-in beneficiary to the end of the queue
    Add {
        /// Beneficiary name
        name: String,

        /// Aid program
        #[arg(long)]
        program: String,

        /// Amount to claim, e.g. 3000 or ₱3,000
        #[arg(long)]
        amount: String,
    },

    /// Call the first waiting entry
    Next,
}

/// Case review subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CaseAction {
    /// List active flagged cases
    List,

    /// Show one case, active or decided
    Show {
        /// Case ID
        id: String,
    },

    /// Approve or reject a case
    Decide {
        /// Case ID
        id: String,

        /// approve or reject
        decision: String,

        /// Review notes (required)
        #[arg(long, default_value = "")]
        notes: String,
    },
}

/// Runs one command and returns its rendered output.
///
/// # Arguments
///
/// * `portal` - Session state
/// * `command` - Command to run
/// * `formatter` - The output formatter to use
/// * `token` - Cancels a pending scan
///
/// # Errors
///
/// Returns the application error of the failed operation; the portal is
/// left as the failing store operation left it.
pub async fn execute<D: ScanDecoder>(
    portal: &mut Portal<D>,
    command: Command,
    formatter: &dyn OutputFormatter,
    token: &CancellationToken,
) -> Result<String> {
    match command {
        Command::Queue { action } => queue::execute(portal, action, formatter),
        Command::Cases { action } => cases::execute(portal, action, formatter),
        Command::Transactions { query, status } => {
            transactions::execute(portal, &query, &status, formatter)
        }
        Command::Scan {
            payload,
            decision,
            notes,
        } => {
            scan::execute(
                portal,
                payload.as_bytes(),
                decision.as_deref(),
                notes.as_deref(),
                formatter,
                token,
            )
            .await
        }
        Command::Resolve { action, notes } => {
            scan::resolve(portal, &action, notes.as_deref(), formatter)
        }
        Command::Claims => Ok(claims::execute(portal, formatter)),
        Command::Updates { kind } => updates::execute(portal, kind.as_deref(), formatter),
    }
}
