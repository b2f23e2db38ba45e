// Rust guideline compliant 2026-02-06

//! Finite State Machine module for queue and scan transitions.
//!
//! Queue entries follow these transitions:
//!
//! - Waiting → Serving
//! - Serving → Waiting (demoted when another entry is called)
//! - Serving → Completed
//!
//! Completed is terminal. The scan simulation follows
//! Idle → Scanning → Result → Idle, with Scanning → Idle on cancellation
//! or decode failure.

use crate::{Error, QueueStatus, Result, ScanPhase};

impl QueueStatus {
    /// Checks if a transition to the target status is valid.
    ///
    /// Staying in the same non-terminal status is allowed and is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTransition` if the transition is not in the
    /// valid transition set.
    pub fn can_transition_to(&self, target: QueueStatus) -> Result<()> {
        match (self, target) {
            (QueueStatus::Waiting, QueueStatus::Waiting)
            | (QueueStatus::Serving, QueueStatus::Serving)
            | (QueueStatus::Waiting, QueueStatus::Serving)
            | (QueueStatus::Serving, QueueStatus::Waiting)
            | (QueueStatus::Serving, QueueStatus::Completed) => Ok(()),
            (QueueStatus::Waiting, QueueStatus::Completed) => Err(Error::InvalidTransition(
                "Only the entry being served can be completed".to_string(),
            )),
            (QueueStatus::Completed, _) => Err(Error::InvalidTransition(format!(
                "Completed entries cannot move to {}",
                target
            ))),
        }
    }

    /// Returns the statuses reachable from the current one, excluding itself.
    #[must_use]
    pub fn valid_transitions(&self) -> Vec<QueueStatus> {
        match self {
            QueueStatus::Waiting => vec![QueueStatus::Serving],
            QueueStatus::Serving => vec![QueueStatus::Waiting, QueueStatus::Completed],
            QueueStatus::Completed => Vec::new(),
        }
    }

    /// Whether the entry is still shown in the live queue.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, QueueStatus::Completed)
    }
}

impl ScanPhase {
    /// Checks if the scanner may move from this phase to `target`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTransition` for any move outside
    /// Idle → Scanning → Result → Idle and Scanning → Idle.
    pub fn can_transition_to(&self, target: ScanPhase) -> Result<()> {
        match (self, target) {
            (ScanPhase::Idle, ScanPhase::Scanning)
            | (ScanPhase::Scanning, ScanPhase::Result)
            | (ScanPhase::Scanning, ScanPhase::Idle)
            | (ScanPhase::Result, ScanPhase::Idle) => Ok(()),
            (ScanPhase::Scanning, ScanPhase::Scanning) => Err(Error::InvalidTransition(
                "A scan is already in progress".to_string(),
            )),
            (ScanPhase::Result, ScanPhase::Scanning) => Err(Error::InvalidTransition(
                "Decide on the current scan before starting another".to_string(),
            )),
            _ => Err(Error::InvalidTransition(format!(
                "Cannot move scanner from {} to {}",
                self, target
            ))),
        }
    }
}
