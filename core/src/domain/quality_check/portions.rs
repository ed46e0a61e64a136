use tracing::debug;

use crate::domain::{
    meal_plan::{entities::MealPlan, portion::parse_portion},
    quality_check::entities::{CheckStatus, PortionCheckResult, PortionIssue, PortionWarning},
};

const MISSING_PORTION: &str = "Missing portion size";
const UNCLEAR_PORTION: &str = "Portion format unclear or non-standard";

const PORTION_ASSUMPTIONS: [&str; 2] = [
    "All food items should have measurable portions (grams, bowls, cups, pieces)",
    "Standard conversions used for common measurements",
];

/// Sorts every item into missing, unclear, or fine. An item lands in at most
/// one of the two finding lists.
pub fn check_portion_sizes(meal_plan: &MealPlan) -> PortionCheckResult {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    for (meal, food) in meal_plan.iter_items() {
        if food.has_missing_portion() {
            issues.push(PortionIssue {
                meal,
                item: food.item.clone(),
                issue: MISSING_PORTION.to_string(),
            });
            continue;
        }

        if let Some(portion) = food.portion.as_deref()
            && parse_portion(Some(portion)).is_none()
        {
            warnings.push(PortionWarning {
                meal,
                item: food.item.clone(),
                portion: portion.to_string(),
                issue: UNCLEAR_PORTION.to_string(),
            });
        }
    }

    let (status, message) = if !issues.is_empty() {
        (
            CheckStatus::NeedsImprovement,
            format!(
                "{} item(s) missing portion sizes. Portions are essential for accurate nutrition tracking.",
                issues.len()
            ),
        )
    } else if !warnings.is_empty() {
        (
            CheckStatus::Warning,
            format!(
                "{} item(s) have unclear portion formats. Consider standardizing (e.g., \"100g\", \"1 bowl\").",
                warnings.len()
            ),
        )
    } else {
        (
            CheckStatus::Ok,
            "All food items have clearly defined portions.".to_string(),
        )
    };

    debug!(
        issues = issues.len(),
        warnings = warnings.len(),
        %status,
        "checked portion sizes"
    );

    PortionCheckResult {
        status,
        message,
        issues,
        warnings,
        assumptions: PORTION_ASSUMPTIONS.iter().map(|a| a.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meal_plan::entities::{FoodItem, MealSlot};

    #[test]
    fn test_all_portions_clear() {
        let meal_plan = MealPlan {
            breakfast: vec![FoodItem::new("Oats porridge", Some("1 bowl"))],
            lunch: vec![FoodItem::new("Curd", Some("100g"))],
            dinner: vec![FoodItem::new("Roti (whole wheat)", Some("2 medium"))],
        };

        let result = check_portion_sizes(&meal_plan);

        assert_eq!(result.status, CheckStatus::Ok);
        assert_eq!(result.message, "All food items have clearly defined portions.");
        assert!(result.issues.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.assumptions.len(), 2);
    }

    #[test]
    fn test_absent_and_blank_portions_are_issues() {
        let meal_plan = MealPlan {
            breakfast: vec![FoodItem::new("Banana", Some("  "))],
            lunch: vec![FoodItem::new("Curd", Some(""))],
            dinner: vec![FoodItem::new("Salad", None)],
        };

        let result = check_portion_sizes(&meal_plan);

        assert_eq!(result.status, CheckStatus::NeedsImprovement);
        assert_eq!(result.issues.len(), 3);
        assert!(result.warnings.is_empty());
        assert_eq!(
            result.issues[2],
            PortionIssue {
                meal: MealSlot::Dinner,
                item: "Salad".to_string(),
                issue: "Missing portion size".to_string(),
            }
        );
        assert!(result.message.starts_with("3 item(s) missing portion sizes."));
    }

    #[test]
    fn test_unparseable_portion_is_warning() {
        let meal_plan = MealPlan {
            breakfast: vec![FoodItem::new("Almonds", Some("a handful"))],
            lunch: vec![FoodItem::new("Curd", Some("100g"))],
            dinner: vec![],
        };

        let result = check_portion_sizes(&meal_plan);

        assert_eq!(result.status, CheckStatus::Warning);
        assert!(result.issues.is_empty());
        assert_eq!(
            result.warnings,
            vec![PortionWarning {
                meal: MealSlot::Breakfast,
                item: "Almonds".to_string(),
                portion: "a handful".to_string(),
                issue: "Portion format unclear or non-standard".to_string(),
            }]
        );
        assert!(result.message.starts_with("1 item(s) have unclear portion formats."));
    }

    #[test]
    fn test_issues_outrank_warnings() {
        let meal_plan = MealPlan {
            breakfast: vec![FoodItem::new("Almonds", Some("a handful"))],
            lunch: vec![FoodItem::new("Curd", None)],
            dinner: vec![],
        };

        let result = check_portion_sizes(&meal_plan);

        assert_eq!(result.status, CheckStatus::NeedsImprovement);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.message.starts_with("1 item(s) missing portion sizes."));
    }

    #[test]
    fn test_no_item_is_both_issue_and_warning() {
        let portions = [None, Some(""), Some(" "), Some("Salad"), Some("1 bowl"), Some("??")];
        let meal_plan = MealPlan {
            breakfast: portions
                .iter()
                .enumerate()
                .map(|(i, portion)| FoodItem::new(format!("Item {i}"), *portion))
                .collect(),
            lunch: vec![],
            dinner: vec![],
        };

        let result = check_portion_sizes(&meal_plan);

        for issue in &result.issues {
            assert!(result.warnings.iter().all(|w| w.item != issue.item));
        }
        assert_eq!(result.issues.len(), 3);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_empty_plan_is_ok() {
        let result = check_portion_sizes(&MealPlan::default());
        assert_eq!(result.status, CheckStatus::Ok);
    }
}
