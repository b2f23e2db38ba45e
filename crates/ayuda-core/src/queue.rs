// Rust guideline compliant 2026-02-06

//! Claiming-counter queue.
//!
//! The store keeps the live queue (waiting and serving entries) in ticket
//! order and moves completed entries to a separate list retained for audit.
//! At most one entry is `Serving` at any time.

use crate::{Amount, Error, QueueEntry, QueueStatus, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// A queue entry whose service finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedEntry {
    /// The entry as it was when completed.
    pub entry: QueueEntry,
    /// When the entry was completed.
    pub completed_at: DateTime<Utc>,
}

/// In-memory queue of beneficiaries waiting at the counter.
#[derive(Debug, Clone, Default)]
pub struct QueueStore {
    entries: Vec<QueueEntry>,
    completed: Vec<CompletedEntry>,
    next_number: u32,
}

impl QueueStore {
    /// Creates a store from seed entries, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValidationFailed` if:
    /// - Two entries share an ID
    /// - More than one entry is serving
    /// - An entry is already completed
    pub fn new(entries: Vec<QueueEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(Error::ValidationFailed(format!(
                    "Duplicate queue entry ID: {}",
                    entry.id
                )));
            }
            if entry.status == QueueStatus::Completed {
                return Err(Error::ValidationFailed(format!(
                    "Queue entry {} is already completed",
                    entry.id
                )));
            }
        }

        let serving = entries
            .iter()
            .filter(|e| e.status == QueueStatus::Serving)
            .count();
        if serving > 1 {
            return Err(Error::ValidationFailed(format!(
                "At most one entry can be serving, found {}",
                serving
            )));
        }

        let next_number = entries
            .iter()
            .map(|e| e.display_number)
            .max()
            .map_or(1, |n| n.saturating_add(1));

        Ok(Self {
            entries,
            completed: Vec::new(),
            next_number,
        })
    }

    /// Returns the live queue (waiting and serving entries) in ticket order.
    #[must_use]
    pub fn visible(&self) -> &[QueueEntry] {
        &self.entries
    }

    /// Returns completed entries, oldest first.
    #[must_use]
    pub fn completed(&self) -> &[CompletedEntry] {
        &self.completed
    }

    /// Looks up a live entry by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&QueueEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Returns the entry currently being served, if any.
    #[must_use]
    pub fn serving(&self) -> Option<&QueueEntry> {
        self.entries
            .iter()
            .find(|e| e.status == QueueStatus::Serving)
    }

    /// Number of entries waiting to be called.
    #[must_use]
    pub fn waiting_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == QueueStatus::Waiting)
            .count()
    }

    /// Number of entries being served (0 or 1).
    #[must_use]
    pub fn serving_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == QueueStatus::Serving)
            .count()
    }

    /// Average wait in minutes across waiting entries, rounded down.
    #[must_use]
    pub fn average_wait_minutes(&self) -> Option<u32> {
        let waits: Vec<u32> = self
            .entries
            .iter()
            .filter(|e| e.status == QueueStatus::Waiting)
            .map(|e| e.wait_minutes)
            .collect();
        if waits.is_empty() {
            return None;
        }
        let total: u64 = waits.iter().map(|w| u64::from(*w)).sum();
        Some((total / waits.len() as u64) as u32)
    }

    /// Calls an entry to the counter.
    ///
    /// Any other serving entry goes back to waiting. Promoting the entry
    /// already being served changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no live entry has the ID; the queue is
    /// left unchanged.
    pub fn promote(&mut self, id: &str) -> Result<()> {
        let Some(index) = self.position(id) else {
            debug!(id, "promote ignored: entry not in queue");
            return Err(Error::NotFound(id.to_string()));
        };

        let current = self.entries[index].status;
        current.can_transition_to(QueueStatus::Serving)?;
        if current == QueueStatus::Serving {
            return Ok(());
        }

        for entry in &mut self.entries {
            if entry.status == QueueStatus::Serving {
                entry.status = QueueStatus::Waiting;
                info!(id = %entry.id, "demoted to waiting");
            }
        }
        self.entries[index].status = QueueStatus::Serving;
        info!(id, number = self.entries[index].display_number, "now serving");

        Ok(())
    }

    /// Calls the first waiting entry in ticket order.
    ///
    /// Returns the promoted entry, or `None` when nobody is waiting.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`QueueStore::promote`].
    pub fn call_next(&mut self) -> Result<Option<&QueueEntry>> {
        let next_id = self
            .entries
            .iter()
            .find(|e| e.status == QueueStatus::Waiting)
            .map(|e| e.id.clone());

        match next_id {
            Some(id) => {
                self.promote(&id)?;
                Ok(self.get(&id))
            }
            None => {
                debug!("call_next ignored: nobody waiting");
                Ok(None)
            }
        }
    }

    /// Finishes service for the entry at the counter and moves it to the
    /// completed list.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No live entry has the ID (`Error::NotFound`)
    /// - The entry is waiting rather than serving (`Error::InvalidTransition`)
    pub fn complete(&mut self, id: &str) -> Result<&CompletedEntry> {
        let Some(index) = self.position(id) else {
            debug!(id, "complete ignored: entry not in queue");
            return Err(Error::NotFound(id.to_string()));
        };

        self.entries[index]
            .status
            .can_transition_to(QueueStatus::Completed)?;

        let mut entry = self.entries.remove(index);
        entry.status = QueueStatus::Completed;
        info!(id, number = entry.display_number, "service completed");

        let slot = self.completed.len();
        self.completed.push(CompletedEntry {
            entry,
            completed_at: Utc::now(),
        });
        Ok(&self.completed[slot])
    }

    /// Drops an entry from the live queue, e.g. when the beneficiary left.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no live entry has the ID.
    pub fn remove(&mut self, id: &str) -> Result<QueueEntry> {
        let Some(index) = self.position(id) else {
            debug!(id, "remove ignored: entry not in queue");
            return Err(Error::NotFound(id.to_string()));
        };
        let entry = self.entries.remove(index);
        info!(id, number = entry.display_number, "removed from queue");
        Ok(entry)
    }

    /// Appends a new waiting entry with the next ticket number.
    ///
    /// # Errors
    ///
    /// Returns `Error::ValidationFailed` if the name or program is blank.
    pub fn enqueue(&mut self, name: &str, program: &str, amount: Amount) -> Result<&QueueEntry> {
        let name = name.trim();
        let program = program.trim();
        if name.is_empty() {
            return Err(Error::ValidationFailed(
                "Beneficiary name cannot be empty".to_string(),
            ));
        }
        if program.is_empty() {
            return Err(Error::ValidationFailed(
                "Program cannot be empty".to_string(),
            ));
        }

        let number = self.next_number;
        self.next_number = self.next_number.saturating_add(1);

        let mut id = format!("Q-{}", number);
        while self.id_in_use(&id) {
            id.push('x');
        }

        info!(id = %id, number, name, "enqueued");
        self.entries.push(QueueEntry {
            id,
            display_number: number,
            name: name.to_string(),
            program: program.to_string(),
            status: QueueStatus::Waiting,
            wait_minutes: 0,
            amount,
        });

        let slot = self.entries.len() - 1;
        Ok(&self.entries[slot])
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn id_in_use(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
            || self.completed.iter().any(|c| c.entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, number: u32, status: QueueStatus) -> QueueEntry {
        QueueEntry {
            id: id.to_string(),
            display_number: number,
            name: format!("Beneficiary {}", id),
            program: "AKAP".to_string(),
            status,
            wait_minutes: number,
            amount: Amount::from_pesos(3_000),
        }
    }

    #[test]
    fn test_new_rejects_two_servers() {
        let result = QueueStore::new(vec![
            entry("1", 1, QueueStatus::Serving),
            entry("2", 2, QueueStatus::Serving),
        ]);
        assert!(matches!(result, Err(Error::ValidationFailed(_))));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = QueueStore::new(vec![
            entry("1", 1, QueueStatus::Waiting),
            entry("1", 2, QueueStatus::Waiting),
        ]);
        assert!(matches!(result, Err(Error::ValidationFailed(_))));
    }

    #[test]
    fn test_enqueue_assigns_next_number() {
        let mut store = QueueStore::new(vec![entry("1", 101, QueueStatus::Waiting)]).unwrap();
        let added = store
            .enqueue("Lito Bautista", "TUPAD", Amount::from_pesos(6_000))
            .unwrap();
        assert_eq!(added.display_number, 102);
        assert_eq!(added.status, QueueStatus::Waiting);
        assert_eq!(added.id, "Q-102");
    }

    #[test]
    fn test_enqueue_number_survives_removal() {
        let mut store = QueueStore::new(vec![entry("1", 101, QueueStatus::Waiting)]).unwrap();
        store.remove("1").unwrap();
        let added = store.enqueue("A", "AKAP", Amount::ZERO).unwrap();
        assert_eq!(added.display_number, 102);
    }

    #[test]
    fn test_enqueue_rejects_blank_name() {
        let mut store = QueueStore::default();
        assert!(store.enqueue("  ", "AKAP", Amount::ZERO).is_err());
        assert!(store.visible().is_empty());
    }

    #[test]
    fn test_average_wait() {
        let store = QueueStore::new(vec![
            entry("1", 5, QueueStatus::Serving),
            entry("2", 12, QueueStatus::Waiting),
            entry("3", 18, QueueStatus::Waiting),
        ])
        .unwrap();
        assert_eq!(store.average_wait_minutes(), Some(15));
        assert_eq!(QueueStore::default().average_wait_minutes(), None);
    }
}
