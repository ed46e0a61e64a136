use super::handlers::{
    check_formatting::{__path_check_formatting, check_formatting},
    check_plan_fit::{__path_check_plan_fit, check_plan_fit},
    check_portions::{__path_check_portions, check_portions},
    check_protein::{__path_check_protein, check_protein},
    review_meal_plan::{__path_review_meal_plan, review_meal_plan},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    review_meal_plan,
    check_protein,
    check_portions,
    check_formatting,
    check_plan_fit
))]
pub struct ReviewApiDoc;

pub fn review_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/reviews", state.args.server.root_path),
            post(review_meal_plan),
        )
        .route(
            &format!("{}/reviews/protein", state.args.server.root_path),
            post(check_protein),
        )
        .route(
            &format!("{}/reviews/portions", state.args.server.root_path),
            post(check_portions),
        )
        .route(
            &format!("{}/reviews/formatting", state.args.server.root_path),
            post(check_formatting),
        )
        .route(
            &format!("{}/reviews/plan-fit", state.args.server.root_path),
            post(check_plan_fit),
        )
}
