use crate::domain::{
    meal_plan::entities::{Client, MealPlan},
    plan_fit::entities::PlanFitAnalysis,
};

/// Heuristic fit of a meal plan against a client's condition and goals.
#[cfg_attr(test, mockall::automock)]
pub trait PlanFitService: Send + Sync {
    fn perform_ai_assisted_check(&self, client: &Client, meal_plan: &MealPlan) -> PlanFitAnalysis;
}
