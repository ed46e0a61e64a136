use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FitFinding {
    pub area: String,
    pub detail: String,
}

impl FitFinding {
    pub fn new(area: &str, detail: &str) -> Self {
        Self {
            area: area.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Outcome of one plan-fit rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Concern(FitFinding),
    Confirmation(FitFinding),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanFitAnalysis {
    /// Prompt rendered for audit and display. It is never sent anywhere.
    pub prompt: String,
    pub raw_ai_output: String,
    pub interpretation: String,
    pub concerns: Vec<FitFinding>,
    pub confirmations: Vec<FitFinding>,
}
