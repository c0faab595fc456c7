//! Mappers between the public DTOs in `shared` and the domain models.

pub mod food_mapper;
pub mod owner_mapper;
pub mod pet_mapper;

pub use food_mapper::FoodMapper;
pub use owner_mapper::OwnerMapper;
pub use pet_mapper::PetMapper;
