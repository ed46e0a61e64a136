use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    meal_plan::entities::MealSlot, quality_check::entities::check_status::CheckStatus,
};

/// An item with no portion at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PortionIssue {
    pub meal: MealSlot,
    pub item: String,
    pub issue: String,
}

/// An item whose portion is present but not in a recognised unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PortionWarning {
    pub meal: MealSlot,
    pub item: String,
    pub portion: String,
    pub issue: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PortionCheckResult {
    pub status: CheckStatus,
    pub message: String,
    pub issues: Vec<PortionIssue>,
    pub warnings: Vec<PortionWarning>,
    pub assumptions: Vec<String>,
}
