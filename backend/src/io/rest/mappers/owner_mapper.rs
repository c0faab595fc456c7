//! backend/src/io/rest/mappers/owner_mapper.rs

use crate::domain::models::owner::Owner;
use shared::{OwnerDetail, OwnerListResponse, OwnerSummary};

use super::PetMapper;

/// Mapper from domain owners to the owner DTOs
pub struct OwnerMapper;

impl OwnerMapper {
    pub fn to_summary(owner: &Owner) -> OwnerSummary {
        OwnerSummary {
            id: owner.id().to_string(),
            name: owner.name().to_string(),
            email: owner.email().map(str::to_string),
            pet_count: owner.pets().len(),
        }
    }

    pub fn to_detail(owner: &Owner) -> OwnerDetail {
        OwnerDetail {
            id: owner.id().to_string(),
            name: owner.name().to_string(),
            email: owner.email().map(str::to_string),
            pets: owner.pets().iter().map(PetMapper::to_summary).collect(),
        }
    }

    pub fn to_list_dto(owners: &[Owner]) -> OwnerListResponse {
        OwnerListResponse {
            owners: owners.iter().map(Self::to_summary).collect(),
        }
    }
}
