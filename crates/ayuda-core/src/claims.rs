// Rust guideline compliant 2026-02-06

//! Beneficiary-side claim history.

use crate::{Amount, ClaimRecord, ClaimStatus};
use serde::Serialize;

/// Headline figures for a claim history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClaimSummary {
    /// Claims still pending or processing.
    pub active: usize,
    /// Claims released.
    pub completed: usize,
    /// Sum of completed claim amounts.
    pub total_received: Amount,
}

/// Read-only list of a beneficiary's claims.
#[derive(Debug, Clone, Default)]
pub struct ClaimHistory {
    claims: Vec<ClaimRecord>,
}

impl ClaimHistory {
    /// Wraps a list of claims, kept in the given order.
    #[must_use]
    pub fn new(claims: Vec<ClaimRecord>) -> Self {
        Self { claims }
    }

    /// All claims.
    #[must_use]
    pub fn all(&self) -> &[ClaimRecord] {
        &self.claims
    }

    /// Claims in the given status.
    pub fn with_status(&self, status: ClaimStatus) -> impl Iterator<Item = &ClaimRecord> {
        self.claims.iter().filter(move |c| c.status == status)
    }

    /// Computes the summary figures.
    #[must_use]
    pub fn summary(&self) -> ClaimSummary {
        ClaimSummary {
            active: self.claims.iter().filter(|c| c.status.is_active()).count(),
            completed: self.with_status(ClaimStatus::Completed).count(),
            total_received: self
                .with_status(ClaimStatus::Completed)
                .map(|c| c.amount)
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_over_seed_history() {
        let history = ClaimHistory::new(crate::seed::claim_history());
        let summary = history.summary();
        assert_eq!(summary.active, 2);
        assert_eq!(summary.completed, 3);
        assert_eq!(summary.total_received, Amount::from_pesos(12_000));
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(ClaimHistory::default().summary(), ClaimSummary::default());
    }
}
