use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    meal_plan::entities::MealSlot, quality_check::entities::check_status::CheckStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FormattingIssueKind {
    Capitalization,
    ItemSpacing,
    PortionSpacing,
}

impl FormattingIssueKind {
    pub fn description(&self) -> &'static str {
        match self {
            FormattingIssueKind::Capitalization => "Item name should start with capital letter",
            FormattingIssueKind::ItemSpacing => "Contains multiple consecutive spaces",
            FormattingIssueKind::PortionSpacing => "Portion contains multiple consecutive spaces",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormattingIssue {
    pub meal: MealSlot,
    pub item: String,
    pub kind: FormattingIssueKind,
    pub issue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl FormattingIssue {
    pub fn new(meal: MealSlot, item: &str, kind: FormattingIssueKind) -> Self {
        Self {
            meal,
            item: item.to_string(),
            kind,
            issue: kind.description().to_string(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormattingCheckResult {
    pub status: CheckStatus,
    pub message: String,
    pub issues: Vec<FormattingIssue>,
    pub assumptions: Vec<String>,
}
