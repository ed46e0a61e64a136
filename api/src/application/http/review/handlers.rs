pub mod check_formatting;
pub mod check_plan_fit;
pub mod check_portions;
pub mod check_protein;
pub mod review_meal_plan;
