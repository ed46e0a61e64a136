use crate::{
    domain::common::services::Service, infrastructure::nutrition::StaticNutritionRepository,
};

pub type MealcheckService = Service<StaticNutritionRepository>;

pub fn create_service() -> MealcheckService {
    Service::new(StaticNutritionRepository::new())
}
