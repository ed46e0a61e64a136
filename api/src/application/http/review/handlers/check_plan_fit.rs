use axum::extract::State;
use mealcheck_core::domain::{
    meal_plan::entities::{Client, MealPlan},
    plan_fit::{entities::PlanFitAnalysis, ports::PlanFitService},
};
use serde::{Deserialize, Serialize};
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
pub struct CheckPlanFitResponse {
    pub data: PlanFitAnalysis,
}

#[utoipa::path(
    post,
    path = "/plan-fit",
    tag = "reviews",
    summary = "Heuristic fit of the plan against the client profile",
    description = "Returns the rendered reviewer prompt, a fixed narrative and the rule-based concerns and confirmations. Nothing is sent to an external model.",
    request_body = ReviewMealPlanRequest,
    responses(
        (status = 200, body = CheckPlanFitResponse)
    )
)]
pub async fn check_plan_fit(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ReviewMealPlanRequest>,
) -> Result<Response<CheckPlanFitResponse>, ApiError> {
    let client = Client::from(payload.client);
    let meal_plan = MealPlan::from(payload.meal_plan);

    Ok(Response::OK(CheckPlanFitResponse {
        data: state.service.perform_ai_assisted_check(&client, &meal_plan),
    }))
}
