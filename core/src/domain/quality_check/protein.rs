use tracing::debug;

use crate::domain::{
    meal_plan::entities::{MealPlan, MealSlot, PerMeal},
    nutrition::{estimator::meal_protein, ports::NutritionRepository},
    quality_check::entities::{CheckStatus, MealAssessment, ProteinCheckResult},
};

pub const PROTEIN_TARGET: &str = "10-14g";

const PROTEIN_ASSUMPTIONS: [&str; 3] = [
    "Protein target: 10-14g per meal (standard recommendation for balanced meals)",
    "Protein values estimated from standard nutrition databases",
    "Portion conversions: 1 bowl ≈ 150g, 1 cup ≈ 200g, 1 medium item ≈ 100g",
];

/// Classifies one meal's protein total.
///
/// Bands: `[10, 20]` is good, `[8, 10)` slightly low, below 8 low, and
/// anything else (above 20) high.
pub fn assess_meal_protein(total: f64) -> MealAssessment {
    let (status, message) = if (10.0..=20.0).contains(&total) {
        (
            CheckStatus::Ok,
            format!("Good protein content: {total:.1}g (target: {PROTEIN_TARGET})"),
        )
    } else if (8.0..10.0).contains(&total) {
        (
            CheckStatus::Warning,
            format!(
                "Slightly low protein: {total:.1}g (target: {PROTEIN_TARGET}). Consider adding protein-rich foods."
            ),
        )
    } else if total < 8.0 {
        (
            CheckStatus::NeedsImprovement,
            format!(
                "Low protein content: {total:.1}g (target: {PROTEIN_TARGET}). Add legumes, dairy, or nuts."
            ),
        )
    } else {
        (
            CheckStatus::Warning,
            format!(
                "High protein content: {total:.1}g (target: {PROTEIN_TARGET}). This may be acceptable depending on goals."
            ),
        )
    };

    MealAssessment { status, message }
}

pub fn check_protein_content<N>(reference: &N, meal_plan: &MealPlan) -> ProteinCheckResult
where
    N: NutritionRepository + ?Sized,
{
    let details = PerMeal::from_fn(|slot| meal_protein(reference, meal_plan.slot(slot)));
    let assessments = PerMeal::from_fn(|slot| assess_meal_protein(details.get(slot).total));

    for slot in MealSlot::ALL {
        debug!(
            meal = slot.as_str(),
            total = details.get(slot).total,
            status = %assessments.get(slot).status,
            "assessed meal protein"
        );
    }

    ProteinCheckResult {
        details,
        assessments,
        assumptions: PROTEIN_ASSUMPTIONS.iter().map(|a| a.to_string()).collect(),
    }
}
