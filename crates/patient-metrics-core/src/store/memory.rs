//! In-memory record store.

use std::sync::Mutex;

use super::{RecordStore, Roster, StoreResult};

/// `RecordStore` held entirely in process memory.
///
/// Used by tests and anywhere the service runs without a backing file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    roster: Mutex<Roster>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `roster`.
    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster: Mutex::new(roster),
        }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> StoreResult<Roster> {
        let roster = self.roster.lock().unwrap_or_else(|e| e.into_inner());
        Ok(roster.clone())
    }

    fn save(&self, roster: &Roster) -> StoreResult<()> {
        let mut current = self.roster.lock().unwrap_or_else(|e| e.into_inner());
        *current = roster.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, PatientFields};

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_replaces_the_whole_roster() {
        let store = MemoryStore::new();

        let mut first = Roster::new();
        first.insert(
            "P001".into(),
            PatientFields {
                name: "Asha".into(),
                city: "Pune".into(),
                age: 30,
                gender: Gender::Female,
                height: 1.6,
                weight: 55.0,
            },
        );
        store.save(&first).unwrap();
        assert_eq!(store.load().unwrap(), first);

        let second = Roster::new();
        store.save(&second).unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
