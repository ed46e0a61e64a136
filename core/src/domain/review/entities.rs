use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    plan_fit::entities::PlanFitAnalysis,
    quality_check::entities::{FormattingCheckResult, PortionCheckResult, ProteinCheckResult},
};

/// Every check run against one client and plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlanReview {
    pub protein: ProteinCheckResult,
    pub portions: PortionCheckResult,
    pub formatting: FormattingCheckResult,
    pub plan_fit: PlanFitAnalysis,
}
