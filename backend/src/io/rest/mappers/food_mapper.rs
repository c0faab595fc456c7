//! backend/src/io/rest/mappers/food_mapper.rs

use crate::domain::models::food::Hazard;
use crate::domain::ListedFood;
use shared::{FoodDto, FoodListResponse, HazardCheckResponse, HazardDto};

/// Mapper from catalog records to the food and hazard DTOs
pub struct FoodMapper;

impl FoodMapper {
    pub fn to_dto(listed: ListedFood) -> FoodDto {
        FoodDto {
            id: listed.food.id,
            name: listed.food.name,
            calories_per_gram: listed.food.calories_per_gram,
            food_type: listed.food.food_type,
            description: listed.food.description,
            user_defined: listed.user_defined,
        }
    }

    pub fn to_list_dto(foods: Vec<ListedFood>) -> FoodListResponse {
        FoodListResponse {
            foods: foods.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_hazard_dto(hazard: &Hazard) -> HazardDto {
        HazardDto {
            names: hazard.names.clone(),
            species: hazard.species.clone(),
            severity: hazard.severity.clone(),
            toxins: hazard.toxins.clone(),
            symptoms: hazard.symptoms.clone(),
            dose_notes: hazard.dose_notes.clone(),
        }
    }

    pub fn to_check_dto(
        query: &str,
        species: &str,
        hazard: Option<&Hazard>,
    ) -> HazardCheckResponse {
        HazardCheckResponse {
            query: query.to_string(),
            species: species.to_string(),
            toxic: hazard.is_some(),
            hazard: hazard.map(Self::to_hazard_dto),
        }
    }
}
