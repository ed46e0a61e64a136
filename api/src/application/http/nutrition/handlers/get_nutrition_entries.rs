use axum::extract::State;
use mealcheck_core::domain::nutrition::{entities::NamedNutritionEntry, ports::NutritionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetNutritionEntriesResponse {
    pub data: Vec<NamedNutritionEntry>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "nutrition",
    summary = "List the nutrition reference",
    description = "Every reference food with its protein per 100 g, sorted by name",
    responses(
        (status = 200, body = GetNutritionEntriesResponse)
    )
)]
pub async fn get_nutrition_entries(
    State(state): State<AppState>,
) -> Result<Response<GetNutritionEntriesResponse>, ApiError> {
    Ok(Response::OK(GetNutritionEntriesResponse {
        data: state.service.get_nutrition_entries(),
    }))
}
