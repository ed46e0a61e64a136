use tracing::debug;

use crate::domain::{
    meal_plan::entities::MealPlan,
    quality_check::entities::{
        CheckStatus, FormattingCheckResult, FormattingIssue, FormattingIssueKind,
    },
};

const DOUBLE_SPACE: &str = "  ";

const FORMATTING_ASSUMPTIONS: [&str; 2] = [
    "Food item names should start with capital letters for professional appearance",
    "No multiple consecutive spaces should be present",
];

/// Returns the name with its first character upper-cased, or `None` when it
/// already starts with an upper-case (or caseless) character.
pub fn capitalization_suggestion(item: &str) -> Option<String> {
    let mut chars = item.chars();
    let first = chars.next()?;

    let upper: String = first.to_uppercase().collect();
    if upper.chars().eq(std::iter::once(first)) {
        return None;
    }

    Some(upper + chars.as_str())
}

/// Checks capitalization and spacing. Findings are independent: one item can
/// produce several.
pub fn check_formatting_and_typos(meal_plan: &MealPlan) -> FormattingCheckResult {
    let mut issues = Vec::new();

    for (meal, food) in meal_plan.iter_items() {
        if let Some(suggestion) = capitalization_suggestion(&food.item) {
            issues.push(
                FormattingIssue::new(meal, &food.item, FormattingIssueKind::Capitalization)
                    .with_suggestion(suggestion),
            );
        }

        if food.item.contains(DOUBLE_SPACE) {
            issues.push(FormattingIssue::new(
                meal,
                &food.item,
                FormattingIssueKind::ItemSpacing,
            ));
        }

        if food
            .portion
            .as_deref()
            .is_some_and(|portion| portion.contains(DOUBLE_SPACE))
        {
            issues.push(FormattingIssue::new(
                meal,
                &food.item,
                FormattingIssueKind::PortionSpacing,
            ));
        }
    }

    let (status, message) = if issues.is_empty() {
        (
            CheckStatus::Ok,
            "All items are properly formatted with consistent capitalization.".to_string(),
        )
    } else {
        (
            CheckStatus::NeedsImprovement,
            format!(
                "Found {} formatting issue(s). Consistent formatting improves readability for clients.",
                issues.len()
            ),
        )
    };

    debug!(issues = issues.len(), %status, "checked formatting");

    FormattingCheckResult {
        status,
        message,
        issues,
        assumptions: FORMATTING_ASSUMPTIONS
            .iter()
            .map(|a| a.to_string())
            .collect(),
    }
}
