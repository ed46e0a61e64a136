use axum::extract::State;
use mealcheck_core::domain::{
    meal_plan::entities::{Client, MealPlan},
    review::{entities::MealPlanReview, ports::ReviewService},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::application::http::{
    review::validators::ReviewMealPlanRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewMealPlanResponse {
    pub data: MealPlanReview,
}

#[utoipa::path(
    post,
    path = "",
    tag = "reviews",
    summary = "Review a meal plan",
    description = "Runs the protein, portion, formatting and plan-fit checks against one client and meal plan",
    request_body = ReviewMealPlanRequest,
    responses(
        (status = 200, body = ReviewMealPlanResponse),
        (status = 422, description = "Malformed or invalid meal plan")
    )
)]
pub async fn review_meal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ReviewMealPlanRequest>,
) -> Result<Response<ReviewMealPlanResponse>, ApiError> {
    let client = Client::from(payload.client);
    let meal_plan = MealPlan::from(payload.meal_plan);

    info!(items = meal_plan.item_count(), "reviewing meal plan");

    let review = state.service.review_meal_plan(&client, &meal_plan);

    Ok(Response::OK(ReviewMealPlanResponse { data: review }))
}
