use std::sync::Arc;

use mealcheck_core::application::MealcheckService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MealcheckService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MealcheckService) -> Self {
        Self { args, service }
    }
}
