pub mod static_repository;

pub use static_repository::StaticNutritionRepository;
