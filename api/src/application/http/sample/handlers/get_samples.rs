use mealcheck_core::{
    domain::meal_plan::entities::{Client, MealPlan},
    infrastructure::samples::{sample_client, sample_meal_plan},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Sample {
    pub client: Client,
    pub meal_plan: MealPlan,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetSamplesResponse {
    pub data: Sample,
}

#[utoipa::path(
    get,
    path = "",
    tag = "samples",
    summary = "Reference client and meal plan",
    description = "A ready-made body for POST /reviews",
    responses(
        (status = 200, body = GetSamplesResponse)
    )
)]
pub async fn get_samples() -> Result<Response<GetSamplesResponse>, ApiError> {
    Ok(Response::OK(GetSamplesResponse {
        data: Sample {
            client: sample_client(),
            meal_plan: sample_meal_plan(),
        },
    }))
}
