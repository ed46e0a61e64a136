use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::entities::{NamedNutritionEntry, NutritionEntry},
};

/// Read-only nutrition reference keyed by lower-cased food name.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionRepository: Send + Sync {
    /// Exact lookup on an already normalised name. No fuzzy matching.
    fn find_by_name(&self, name: &str) -> Option<NutritionEntry>;

    fn list(&self) -> Vec<NamedNutritionEntry>;
}

#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    fn get_nutrition_entries(&self) -> Vec<NamedNutritionEntry>;

    fn get_nutrition_entry(&self, name: String) -> Result<NamedNutritionEntry, CoreError>;
}
