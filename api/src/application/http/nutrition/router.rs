use super::handlers::{
    get_nutrition_entries::{__path_get_nutrition_entries, get_nutrition_entries},
    get_nutrition_entry::{__path_get_nutrition_entry, get_nutrition_entry},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_nutrition_entries, get_nutrition_entry))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/nutrition", state.args.server.root_path),
            get(get_nutrition_entries),
        )
        .route(
            &format!("{}/nutrition/{{name}}", state.args.server.root_path),
            get(get_nutrition_entry),
        )
}
