//! # Owner Repository
//!
//! Persists the whole owner collection as one JSON array under the
//! `leanpawgress:owners` key. Every save replaces the previous document.
//!
//! ```json
//! [
//!   {
//!     "id": "…",
//!     "name": "Grace",
//!     "email": "g@example.com",
//!     "pets": [
//!       { "id": "…", "name": "Mochi", "weightLog": [ … ], "meals": [ … ], … }
//!     ]
//!   }
//! ]
//! ```

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::models::owner::Owner;
use crate::storage::traits::KeyValueStore;

pub const OWNERS_KEY: &str = "leanpawgress:owners";

#[derive(Clone)]
pub struct OwnerRepository {
    store: Arc<dyn KeyValueStore>,
}

impl OwnerRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Serialize and store every owner. Failures are returned, never swallowed.
    pub fn save_owners(&self, owners: &[Owner]) -> Result<()> {
        let json = serde_json::to_string(owners).context("Failed to serialize owners")?;
        self.store
            .put_value(OWNERS_KEY, &json)
            .context("Failed to store owners")?;
        info!("Saved {} owner(s)", owners.len());
        Ok(())
    }

    /// Load every owner. A missing key, an unreadable store or a malformed
    /// document all yield an empty collection.
    pub fn load_owners(&self) -> Vec<Owner> {
        match self.try_load_owners() {
            Ok(owners) => owners,
            Err(e) => {
                warn!("Could not load owners, starting empty: {:#}", e);
                Vec::new()
            }
        }
    }

    fn try_load_owners(&self) -> Result<Vec<Owner>> {
        let Some(json) = self.store.get_value(OWNERS_KEY)? else {
            info!("No saved owners found");
            return Ok(Vec::new());
        };
        let owners: Vec<Owner> =
            serde_json::from_str(&json).context("Failed to parse saved owners")?;
        info!("Loaded {} owner(s)", owners.len());
        Ok(owners)
    }
}
