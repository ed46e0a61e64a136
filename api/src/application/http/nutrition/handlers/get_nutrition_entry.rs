use axum::extract::{Path, State};
use mealcheck_core::domain::nutrition::{entities::NamedNutritionEntry, ports::NutritionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetNutritionEntryResponse {
    pub data: NamedNutritionEntry,
}

#[utoipa::path(
    get,
    path = "/{name}",
    tag = "nutrition",
    summary = "Get one nutrition reference entry",
    params(
        ("name" = String, Path, description = "Food name, matched case-insensitively"),
    ),
    responses(
        (status = 200, body = GetNutritionEntryResponse),
        (status = 404, description = "Food not in the reference")
    )
)]
pub async fn get_nutrition_entry(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetNutritionEntryResponse>, ApiError> {
    let entry = state
        .service
        .get_nutrition_entry(name.clone())
        .map_err(|e| {
            tracing::debug!("Nutrition lookup for '{}' failed: {}", name, e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(GetNutritionEntryResponse { data: entry }))
}
