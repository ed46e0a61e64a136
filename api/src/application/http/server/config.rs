use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Config {
    pub app_version: String,
    pub root_path: String,
}

pub async fn get_config(State(state): State<AppState>) -> Json<Config> {
    Json(Config {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: state.args.server.root_path.clone(),
    })
}
