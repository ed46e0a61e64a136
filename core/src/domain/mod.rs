pub mod common;
pub mod meal_plan;
pub mod nutrition;
pub mod plan_fit;
pub mod quality_check;
pub mod review;
