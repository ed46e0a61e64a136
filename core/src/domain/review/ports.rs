use crate::domain::{
    meal_plan::entities::{Client, MealPlan},
    review::entities::MealPlanReview,
};

#[cfg_attr(test, mockall::automock)]
pub trait ReviewService: Send + Sync {
    fn review_meal_plan(&self, client: &Client, meal_plan: &MealPlan) -> MealPlanReview;
}
