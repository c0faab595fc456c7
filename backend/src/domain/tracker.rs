//! Application state shared by the console and the REST API.
//!
//! The tracker owns every `Owner` (and through them every `Pet`) together with
//! the current owner/pet selection. Owners are addressed by their stable id;
//! owner names are unique within a tracker.

use tracing::{debug, info};

use super::models::owner::{Owner, OwnerError};
use super::models::pet::{Pet, PetProfile, PetProfileUpdate, PetValidationError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackerError {
    #[error("Owner \"{0}\" already exists")]
    DuplicateOwnerName(String),
    #[error("Owner \"{0}\" not found")]
    OwnerNotFound(String),
    #[error("Pet \"{0}\" not found")]
    PetNotFound(String),
    #[error("No owner selected")]
    NoOwnerSelected,
    #[error("No pet selected")]
    NoPetSelected,
    #[error(transparent)]
    Owner(#[from] OwnerError),
    #[error(transparent)]
    Pet(#[from] PetValidationError),
}

impl TrackerError {
    /// True for lookups of ids or names that do not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TrackerError::OwnerNotFound(_)
                | TrackerError::PetNotFound(_)
                | TrackerError::Owner(OwnerError::PetNotFound(_))
        )
    }

    /// True for name collisions
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            TrackerError::DuplicateOwnerName(_)
                | TrackerError::Owner(OwnerError::DuplicatePetName(_))
        )
    }
}

/// Names of the selected owner and pet, as written into session documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub owner_name: Option<String>,
    pub pet_name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Tracker {
    owners: Vec<Owner>,
    current_owner_id: Option<String>,
    current_pet_id: Option<String>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owners in creation order
    pub fn owners(&self) -> &[Owner] {
        &self.owners
    }

    pub fn owner(&self, owner_id: &str) -> Option<&Owner> {
        self.owners.iter().find(|o| o.id() == owner_id)
    }

    pub fn owner_mut(&mut self, owner_id: &str) -> Option<&mut Owner> {
        self.owners.iter_mut().find(|o| o.id() == owner_id)
    }

    pub fn owner_by_name(&self, name: &str) -> Option<&Owner> {
        let name = name.trim();
        self.owners.iter().find(|o| o.name() == name)
    }

    /// Create an owner and make it the current one
    pub fn create_owner(
        &mut self,
        name: &str,
        email: Option<String>,
    ) -> Result<&Owner, TrackerError> {
        let owner = Owner::new(name, email)?;
        if self.owner_by_name(owner.name()).is_some() {
            return Err(TrackerError::DuplicateOwnerName(owner.name().to_string()));
        }

        info!("Created owner: {} with ID: {}", owner.name(), owner.id());
        self.current_owner_id = Some(owner.id().to_string());
        self.current_pet_id = None;
        self.owners.push(owner);
        let index = self.owners.len() - 1;
        Ok(&self.owners[index])
    }

    /// Select an owner by name. The pet selection is cleared.
    pub fn select_owner(&mut self, name: &str) -> Result<&Owner, TrackerError> {
        let owner_id = self
            .owner_by_name(name)
            .map(|o| o.id().to_string())
            .ok_or_else(|| TrackerError::OwnerNotFound(name.trim().to_string()))?;

        debug!("Selected owner {}", owner_id);
        self.current_owner_id = Some(owner_id.clone());
        self.current_pet_id = None;
        self.owner(&owner_id)
            .ok_or_else(|| TrackerError::OwnerNotFound(owner_id))
    }

    pub fn current_owner(&self) -> Result<&Owner, TrackerError> {
        self.current_owner_id
            .as_deref()
            .and_then(|id| self.owner(id))
            .ok_or(TrackerError::NoOwnerSelected)
    }

    pub fn current_owner_mut(&mut self) -> Result<&mut Owner, TrackerError> {
        let owner_id = self
            .current_owner_id
            .clone()
            .ok_or(TrackerError::NoOwnerSelected)?;
        self.owner_mut(&owner_id).ok_or(TrackerError::NoOwnerSelected)
    }

    /// Create a pet for an owner; both become the current selection
    pub fn create_pet(
        &mut self,
        owner_id: &str,
        profile: PetProfile,
    ) -> Result<&Pet, TrackerError> {
        let pet = Pet::new(profile)?;
        let owner = self
            .owner_mut(owner_id)
            .ok_or_else(|| TrackerError::OwnerNotFound(owner_id.to_string()))?;
        let pet_id = owner.add_pet(pet)?.id().to_string();

        info!("Created pet {} for owner {}", pet_id, owner_id);
        self.current_owner_id = Some(owner_id.to_string());
        self.current_pet_id = Some(pet_id.clone());
        self.pet(owner_id, &pet_id)
    }

    /// Select one of the current owner's pets by name
    pub fn select_pet(&mut self, name: &str) -> Result<&Pet, TrackerError> {
        let pet_id = self
            .current_owner()?
            .find_pet_by_name(name)
            .map(|p| p.id().to_string())
            .ok_or_else(|| TrackerError::PetNotFound(name.trim().to_string()))?;

        debug!("Selected pet {}", pet_id);
        self.current_pet_id = Some(pet_id);
        self.current_pet()
    }

    pub fn current_pet(&self) -> Result<&Pet, TrackerError> {
        let owner = self.current_owner().map_err(|_| TrackerError::NoPetSelected)?;
        self.current_pet_id
            .as_deref()
            .and_then(|id| owner.get_pet(id))
            .ok_or(TrackerError::NoPetSelected)
    }

    pub fn current_pet_mut(&mut self) -> Result<&mut Pet, TrackerError> {
        let pet_id = self.current_pet_id.clone().ok_or(TrackerError::NoPetSelected)?;
        let owner = self
            .current_owner_mut()
            .map_err(|_| TrackerError::NoPetSelected)?;
        owner.get_pet_mut(&pet_id).ok_or(TrackerError::NoPetSelected)
    }

    pub fn pet(&self, owner_id: &str, pet_id: &str) -> Result<&Pet, TrackerError> {
        self.owner(owner_id)
            .ok_or_else(|| TrackerError::OwnerNotFound(owner_id.to_string()))?
            .get_pet(pet_id)
            .ok_or_else(|| TrackerError::PetNotFound(pet_id.to_string()))
    }

    pub fn pet_mut(&mut self, owner_id: &str, pet_id: &str) -> Result<&mut Pet, TrackerError> {
        self.owner_mut(owner_id)
            .ok_or_else(|| TrackerError::OwnerNotFound(owner_id.to_string()))?
            .get_pet_mut(pet_id)
            .ok_or_else(|| TrackerError::PetNotFound(pet_id.to_string()))
    }

    /// Apply a profile update, checking the new name against the owner's other pets
    pub fn update_pet(
        &mut self,
        owner_id: &str,
        pet_id: &str,
        update: PetProfileUpdate,
    ) -> Result<&Pet, TrackerError> {
        let owner = self
            .owner_mut(owner_id)
            .ok_or_else(|| TrackerError::OwnerNotFound(owner_id.to_string()))?;
        Ok(owner.update_pet_profile(pet_id, update)?)
    }

    /// Remove a pet, clearing the pet selection if it pointed at it
    pub fn remove_pet(&mut self, owner_id: &str, pet_id: &str) -> Result<Pet, TrackerError> {
        let owner = self
            .owner_mut(owner_id)
            .ok_or_else(|| TrackerError::OwnerNotFound(owner_id.to_string()))?;
        let pet = owner
            .remove_pet(pet_id)
            .ok_or_else(|| TrackerError::PetNotFound(pet_id.to_string()))?;

        if self.current_pet_id.as_deref() == Some(pet_id) {
            self.current_pet_id = None;
        }
        info!("Removed pet {} from owner {}", pet_id, owner_id);
        Ok(pet)
    }

    /// Replace every owner (used on load). The selection is cleared.
    pub fn replace_owners(&mut self, owners: Vec<Owner>) {
        info!("Replacing tracker state with {} owner(s)", owners.len());
        self.owners = owners;
        self.current_owner_id = None;
        self.current_pet_id = None;
    }

    pub fn selection(&self) -> Selection {
        let owner = self.current_owner().ok();
        Selection {
            owner_name: owner.map(|o| o.name().to_string()),
            pet_name: self.current_pet().ok().map(|p| p.name().to_string()),
        }
    }

    /// Restore a selection by names. Names that no longer exist are skipped.
    pub fn restore_selection(&mut self, selection: &Selection) {
        self.current_owner_id = None;
        self.current_pet_id = None;

        let Some(owner) = selection
            .owner_name
            .as_deref()
            .and_then(|name| self.owner_by_name(name))
        else {
            return;
        };
        let owner_id = owner.id().to_string();
        let pet_id = selection
            .pet_name
            .as_deref()
            .and_then(|name| owner.find_pet_by_name(name))
            .map(|p| p.id().to_string());

        self.current_owner_id = Some(owner_id);
        self.current_pet_id = pet_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::entries::WeightOptions;

    fn tracker_with_grace() -> (Tracker, String) {
        let mut tracker = Tracker::new();
        let owner_id = tracker
            .create_owner("Grace", Some("g@example.com".to_string()))
            .unwrap()
            .id()
            .to_string();
        (tracker, owner_id)
    }

    #[test]
    fn test_create_owner_selects_it_and_rejects_duplicates() {
        let (mut tracker, owner_id) = tracker_with_grace();
        assert_eq!(tracker.current_owner().unwrap().id(), owner_id);

        assert_eq!(
            tracker.create_owner(" Grace ", None).unwrap_err(),
            TrackerError::DuplicateOwnerName("Grace".to_string())
        );
        assert!(matches!(
            tracker.create_owner("   ", None),
            Err(TrackerError::Owner(OwnerError::EmptyName))
        ));
        assert_eq!(tracker.owners().len(), 1);
    }

    #[test]
    fn test_select_owner_clears_pet_selection() {
        let (mut tracker, owner_id) = tracker_with_grace();
        tracker.create_pet(&owner_id, PetProfile::named("Mochi")).unwrap();
        tracker.create_owner("Alan", None).unwrap();
        assert_eq!(tracker.current_pet().unwrap_err(), TrackerError::NoPetSelected);

        tracker.select_owner("Grace").unwrap();
        assert_eq!(tracker.current_owner().unwrap().name(), "Grace");
        assert!(tracker.current_pet().is_err());

        assert_eq!(
            tracker.select_owner("Nobody").unwrap_err(),
            TrackerError::OwnerNotFound("Nobody".to_string())
        );
    }

    #[test]
    fn test_create_and_select_pets() {
        let (mut tracker, owner_id) = tracker_with_grace();
        tracker.create_pet(&owner_id, PetProfile::named("Mochi")).unwrap();
        tracker.create_pet(&owner_id, PetProfile::named("Biscuit")).unwrap();
        assert_eq!(tracker.current_pet().unwrap().name(), "Biscuit");

        tracker.select_pet("Mochi").unwrap();
        tracker
            .current_pet_mut()
            .unwrap()
            .add_weight(30.0, WeightOptions::default())
            .unwrap();
        assert_eq!(tracker.current_pet().unwrap().latest_weight(), Some(30.0));

        assert!(tracker.select_pet("Rex").unwrap_err().is_not_found());
        let duplicate = tracker
            .create_pet(&owner_id, PetProfile::named("Mochi"))
            .unwrap_err();
        assert!(duplicate.is_conflict());
    }

    #[test]
    fn test_pet_operations_require_selection() {
        let mut tracker = Tracker::new();
        assert_eq!(tracker.current_owner().unwrap_err(), TrackerError::NoOwnerSelected);
        assert_eq!(tracker.current_pet_mut().unwrap_err(), TrackerError::NoPetSelected);
        assert_eq!(tracker.select_pet("Mochi").unwrap_err(), TrackerError::NoOwnerSelected);
    }

    #[test]
    fn test_remove_pet_clears_selection() {
        let (mut tracker, owner_id) = tracker_with_grace();
        let pet_id = tracker
            .create_pet(&owner_id, PetProfile::named("Mochi"))
            .unwrap()
            .id()
            .to_string();

        let removed = tracker.remove_pet(&owner_id, &pet_id).unwrap();
        assert_eq!(removed.name(), "Mochi");
        assert!(tracker.current_pet().is_err());
        assert!(tracker.remove_pet(&owner_id, &pet_id).unwrap_err().is_not_found());
        assert!(tracker.remove_pet("nope", &pet_id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_pet_checks_names() {
        let (mut tracker, owner_id) = tracker_with_grace();
        let mochi = tracker
            .create_pet(&owner_id, PetProfile::named("Mochi"))
            .unwrap()
            .id()
            .to_string();
        tracker.create_pet(&owner_id, PetProfile::named("Biscuit")).unwrap();

        let err = tracker
            .update_pet(
                &owner_id,
                &mochi,
                PetProfileUpdate {
                    name: Some("Biscuit".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_conflict());

        let pet = tracker
            .update_pet(
                &owner_id,
                &mochi,
                PetProfileUpdate {
                    sex: Some("female".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(pet.sex(), "female");
    }

    #[test]
    fn test_selection_survives_replace_and_restore() {
        let (mut tracker, owner_id) = tracker_with_grace();
        tracker.create_pet(&owner_id, PetProfile::named("Mochi")).unwrap();
        let selection = tracker.selection();
        assert_eq!(
            selection,
            Selection {
                owner_name: Some("Grace".to_string()),
                pet_name: Some("Mochi".to_string()),
            }
        );

        let owners = tracker.owners().to_vec();
        let mut restored = Tracker::new();
        restored.replace_owners(owners);
        assert!(restored.current_owner().is_err());

        restored.restore_selection(&selection);
        assert_eq!(restored.current_pet().unwrap().name(), "Mochi");

        restored.restore_selection(&Selection {
            owner_name: Some("Grace".to_string()),
            pet_name: Some("Ghost".to_string()),
        });
        assert_eq!(restored.current_owner().unwrap().name(), "Grace");
        assert!(restored.current_pet().is_err());
    }
}
