use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    meal_plan::entities::PerMeal, nutrition::entities::MealProtein,
    quality_check::entities::check_status::CheckStatus,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealAssessment {
    pub status: CheckStatus,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProteinCheckResult {
    pub details: PerMeal<MealProtein>,
    pub assessments: PerMeal<MealAssessment>,
    pub assumptions: Vec<String>,
}
