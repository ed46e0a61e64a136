use axum::extract::State;
use mealcheck_core::domain::{
    meal_plan::entities::MealPlan,
    quality_check::{entities::ProteinCheckResult, ports::QualityCheckService},
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
pub struct CheckProteinResponse {
    pub data: ProteinCheckResult,
}

#[utoipa::path(
    post,
    path = "/protein",
    tag = "reviews",
    summary = "Check protein per meal",
    request_body = CheckMealPlanRequest,
    responses(
        (status = 200, body = CheckProteinResponse)
    )
)]
pub async fn check_protein(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CheckMealPlanRequest>,
) -> Result<Response<CheckProteinResponse>, ApiError> {
    let meal_plan = MealPlan::from(payload.meal_plan);

    Ok(Response::OK(CheckProteinResponse {
        data: state.service.check_protein_content(&meal_plan),
    }))
}
