use crate::domain::{
    meal_plan::entities::MealPlan,
    quality_check::entities::{FormattingCheckResult, PortionCheckResult, ProteinCheckResult},
};

/// Rule-based checks over a whole meal plan. Every method is pure.
#[cfg_attr(test, mockall::automock)]
pub trait QualityCheckService: Send + Sync {
    fn check_protein_content(&self, meal_plan: &MealPlan) -> ProteinCheckResult;

    fn check_portion_sizes(&self, meal_plan: &MealPlan) -> PortionCheckResult;

    fn check_formatting_and_typos(&self, meal_plan: &MealPlan) -> FormattingCheckResult;
}
