// Rust guideline compliant 2026-02-06

//! Program updates posted to beneficiaries.

use crate::{ProgramUpdate, UpdateKind};

/// Read-only feed of program updates, newest first.
#[derive(Debug, Clone, Default)]
pub struct ProgramUpdates {
    updates: Vec<ProgramUpdate>,
}

impl ProgramUpdates {
    /// Wraps a list of updates, ordered newest first by posting time.
    #[must_use]
    pub fn new(mut updates: Vec<ProgramUpdate>) -> Self {
        updates.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        Self { updates }
    }

    /// All updates.
    #[must_use]
    pub fn all(&self) -> &[ProgramUpdate] {
        &self.updates
    }

    /// Updates of the given kind.
    pub fn of_kind(&self, kind: UpdateKind) -> impl Iterator<Item = &ProgramUpdate> {
        self.updates.iter().filter(move |u| u.kind == kind)
    }

    /// Number of updates the beneficiary has not seen yet.
    #[must_use]
    pub fn new_count(&self) -> usize {
        self.updates.iter().filter(|u| u.is_new).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_feed_counts() {
        let feed = ProgramUpdates::new(crate::seed::program_updates());
        assert_eq!(feed.all().len(), 8);
        assert_eq!(feed.new_count(), 2);
        assert_eq!(feed.of_kind(UpdateKind::Alert).count(), 3);
        assert_eq!(feed.of_kind(UpdateKind::Reminder).count(), 1);
        assert_eq!(feed.of_kind(UpdateKind::Announcement).count(), 4);
    }

    #[test]
    fn test_feed_is_newest_first() {
        let mut updates = crate::seed::program_updates();
        updates.reverse();
        let feed = ProgramUpdates::new(updates);
        assert_eq!(feed.all()[0].id, "UPD-001");
        assert_eq!(feed.all()[7].id, "UPD-008");
    }

    #[test]
    fn test_empty_feed() {
        let feed = ProgramUpdates::default();
        assert!(feed.all().is_empty());
        assert_eq!(feed.new_count(), 0);
    }
}
