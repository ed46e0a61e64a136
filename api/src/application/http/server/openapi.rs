use crate::application::http::{
    health::HealthApiDoc, nutrition::router::NutritionApiDoc, review::router::ReviewApiDoc,
    sample::router::SampleApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mealcheck API",
        description = "Quality checks and client-fit analysis for meal plans"
    ),
    nest(
        (path = "/reviews", api = ReviewApiDoc),
        (path = "/nutrition", api = NutritionApiDoc),
        (path = "/samples", api = SampleApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
