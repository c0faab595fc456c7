//! Domain model for a pet owner.

use serde::{Deserialize, Serialize};

use super::ids::generate_id;
use super::pet::{Pet, PetProfileUpdate, PetValidationError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OwnerError {
    #[error("Owner name cannot be empty")]
    EmptyName,
    #[error("Pet \"{0}\" already exists for this owner")]
    DuplicatePetName(String),
    #[error("Pet not found: {0}")]
    PetNotFound(String),
    #[error(transparent)]
    Pet(#[from] PetValidationError),
}

/// A person holding one or more pets. Pets live exactly as long as their owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    id: String,
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    pets: Vec<Pet>,
}

impl Owner {
    pub fn new(name: impl Into<String>, email: Option<String>) -> Result<Self, OwnerError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(OwnerError::EmptyName);
        }

        Ok(Self {
            id: generate_id(),
            name,
            email: email
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
            pets: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Add a pet, rejecting a name already used by another of this owner's pets
    pub fn add_pet(&mut self, pet: Pet) -> Result<&mut Pet, OwnerError> {
        if self.find_pet_by_name(pet.name()).is_some() {
            return Err(OwnerError::DuplicatePetName(pet.name().to_string()));
        }
        self.pets.push(pet);
        let index = self.pets.len() - 1;
        Ok(&mut self.pets[index])
    }

    /// Remove a pet by id, returning it if it was present
    pub fn remove_pet(&mut self, pet_id: &str) -> Option<Pet> {
        let index = self.pets.iter().position(|p| p.id() == pet_id)?;
        Some(self.pets.remove(index))
    }

    pub fn get_pet(&self, pet_id: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id() == pet_id)
    }

    pub fn get_pet_mut(&mut self, pet_id: &str) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|p| p.id() == pet_id)
    }

    pub fn find_pet_by_name(&self, name: &str) -> Option<&Pet> {
        let name = name.trim();
        self.pets.iter().find(|p| p.name() == name)
    }

    /// Update a pet's profile. A new name must not collide with a different pet.
    pub fn update_pet_profile(
        &mut self,
        pet_id: &str,
        update: PetProfileUpdate,
    ) -> Result<&Pet, OwnerError> {
        if let Some(new_name) = update.name.as_deref() {
            let new_name = new_name.trim();
            let clash = self
                .pets
                .iter()
                .any(|p| p.name() == new_name && p.id() != pet_id);
            if clash {
                return Err(OwnerError::DuplicatePetName(new_name.to_string()));
            }
        }

        let pet = self
            .get_pet_mut(pet_id)
            .ok_or_else(|| OwnerError::PetNotFound(pet_id.to_string()))?;
        pet.update_profile(update)?;
        Ok(&*pet)
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}
