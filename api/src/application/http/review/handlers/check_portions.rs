use axum::extract::State;
use mealcheck_core::domain::{
    meal_plan::entities::MealPlan,
    quality_check::{entities::PortionCheckResult, ports::QualityCheckService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    review::validators::CheckMealPlanRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CheckPortionsResponse {
    pub data: PortionCheckResult,
}

#[utoipa::path(
    post,
    path = "/portions",
    tag = "reviews",
    summary = "Check that every item has a usable portion",
    request_body = CheckMealPlanRequest,
    responses(
        (status = 200, body = CheckPortionsResponse)
    )
)]
pub async fn check_portions(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CheckMealPlanRequest>,
) -> Result<Response<CheckPortionsResponse>, ApiError> {
    let meal_plan = MealPlan::from(payload.meal_plan);

    Ok(Response::OK(CheckPortionsResponse {
        data: state.service.check_portion_sizes(&meal_plan),
    }))
}
