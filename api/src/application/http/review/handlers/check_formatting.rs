use axum::extract::State;
use mealcheck_core::domain::{
    meal_plan::entities::MealPlan,
    quality_check::{entities::FormattingCheckResult, ports::QualityCheckService},
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
pub struct CheckFormattingResponse {
    pub data: FormattingCheckResult,
}

#[utoipa::path(
    post,
    path = "/formatting",
    tag = "reviews",
    summary = "Check capitalization and spacing",
    request_body = CheckMealPlanRequest,
    responses(
        (status = 200, body = CheckFormattingResponse)
    )
)]
pub async fn check_formatting(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CheckMealPlanRequest>,
) -> Result<Response<CheckFormattingResponse>, ApiError> {
    let meal_plan = MealPlan::from(payload.meal_plan);

    Ok(Response::OK(CheckFormattingResponse {
        data: state.service.check_formatting_and_typos(&meal_plan),
    }))
}
