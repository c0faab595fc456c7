//! # Session Repository
//!
//! Console snapshots saved with `save [key]` and restored with `load <key>`.
//! A session document holds every owner plus the names of the selected owner
//! and pet:
//!
//! ```json
//! { "owners": [ … ], "currentOwnerName": "Grace", "currentPetName": "Mochi" }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::domain::models::owner::Owner;
use crate::domain::tracker::{Selection, Tracker};
use crate::storage::traits::KeyValueStore;

pub const DEFAULT_SESSION_KEY: &str = "pet-data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDocument {
    pub owners: Vec<Owner>,
    #[serde(default)]
    pub current_owner_name: Option<String>,
    #[serde(default)]
    pub current_pet_name: Option<String>,
}

impl SessionDocument {
    pub fn from_tracker(tracker: &Tracker) -> Self {
        let selection = tracker.selection();
        Self {
            owners: tracker.owners().to_vec(),
            current_owner_name: selection.owner_name,
            current_pet_name: selection.pet_name,
        }
    }

    /// Replace the tracker's owners and restore the saved selection where the
    /// named owner and pet still exist
    pub fn restore_into(self, tracker: &mut Tracker) {
        let selection = Selection {
            owner_name: self.current_owner_name,
            pet_name: self.current_pet_name,
        };
        tracker.replace_owners(self.owners);
        tracker.restore_selection(&selection);
    }
}

#[derive(Clone)]
pub struct SessionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SessionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn save_session(&self, key: &str, document: &SessionDocument) -> Result<()> {
        let json = serde_json::to_string(document).context("Failed to serialize session")?;
        self.store
            .put_value(key, &json)
            .with_context(|| format!("Failed to store session {}", key))?;
        info!("Saved session {} with {} owner(s)", key, document.owners.len());
        Ok(())
    }

    /// `Ok(None)` when nothing is stored under `key`; an error when the stored
    /// document cannot be read or parsed
    pub fn load_session(&self, key: &str) -> Result<Option<SessionDocument>> {
        let Some(json) = self.store.get_value(key)? else {
            return Ok(None);
        };
        let document: SessionDocument = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse session {}", key))?;
        info!("Loaded session {} with {} owner(s)", key, document.owners.len());
        Ok(Some(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::pet::PetProfile;
    use crate::storage::memory::MemoryKeyValueStore;

    fn tracker() -> Tracker {
        let mut tracker = Tracker::new();
        let grace = tracker.create_owner("Grace", None).unwrap().id().to_string();
        tracker.create_pet(&grace, PetProfile::named("Mochi")).unwrap();
        tracker.create_pet(&grace, PetProfile::named("Biscuit")).unwrap();
        tracker.select_pet("Mochi").unwrap();
        tracker.create_owner("Alan", None).unwrap();
        tracker.select_owner("Grace").unwrap();
        tracker.select_pet("Mochi").unwrap();
        tracker
    }

    #[test]
    fn test_save_and_load_restores_owners_and_selection() {
        let repo = SessionRepository::new(Arc::new(MemoryKeyValueStore::new()));
        let original = tracker();
        repo.save_session("backup", &SessionDocument::from_tracker(&original))
            .unwrap();

        let mut restored = Tracker::new();
        restored.create_owner("Someone Else", None).unwrap();
        repo.load_session("backup")
            .unwrap()
            .unwrap()
            .restore_into(&mut restored);

        assert_eq!(restored.owners(), original.owners());
        assert_eq!(restored.current_owner().unwrap().name(), "Grace");
        assert_eq!(restored.current_pet().unwrap().name(), "Mochi");
    }

    #[test]
    fn test_document_uses_camel_case_selection_fields() {
        let document = SessionDocument::from_tracker(&tracker());
        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["currentOwnerName"], "Grace");
        assert_eq!(json["currentPetName"], "Mochi");
        assert_eq!(json["owners"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_and_malformed_sessions() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let repo = SessionRepository::new(store.clone());
        assert!(repo.load_session("nothing-here").unwrap().is_none());

        store.put_value("broken", "{\"owners\": 5}").unwrap();
        assert!(repo.load_session("broken").is_err());
    }

    #[test]
    fn test_null_selection_restores_nothing() {
        let store = Arc::new(MemoryKeyValueStore::new());
        store
            .put_value(
                "bare",
                r#"{"owners":[{"id":"o1","name":"Grace","pets":[]}],"currentOwnerName":null,"currentPetName":null}"#,
            )
            .unwrap();
        let repo = SessionRepository::new(store);

        let mut tracker = Tracker::new();
        repo.load_session("bare").unwrap().unwrap().restore_into(&mut tracker);
        assert_eq!(tracker.owners().len(), 1);
        assert!(tracker.current_owner().is_err());
    }
}
