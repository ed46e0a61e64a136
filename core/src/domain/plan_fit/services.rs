use crate::domain::{
    common::services::Service,
    meal_plan::entities::{Client, MealPlan},
    nutrition::ports::NutritionRepository,
    plan_fit::{
        entities::PlanFitAnalysis,
        ports::PlanFitService,
        prompt::{RAW_ANALYSIS, build_review_prompt},
        rules::{evaluate_rules, interpret},
    },
};

/// Builds the full plan-fit analysis: rendered prompt, fixed narrative and the
/// rule findings.
pub fn analyze_plan_fit(client: &Client, meal_plan: &MealPlan) -> PlanFitAnalysis {
    let (concerns, confirmations) = evaluate_rules(meal_plan);

    PlanFitAnalysis {
        prompt: build_review_prompt(client, meal_plan),
        raw_ai_output: RAW_ANALYSIS.to_string(),
        interpretation: interpret(&concerns).to_string(),
        concerns,
        confirmations,
    }
}

impl<N> PlanFitService for Service<N>
where
    N: NutritionRepository,
{
    fn perform_ai_assisted_check(&self, client: &Client, meal_plan: &MealPlan) -> PlanFitAnalysis {
        analyze_plan_fit(client, meal_plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        meal_plan::entities::FoodItem,
        nutrition::ports::MockNutritionRepository,
        plan_fit::rules::{ROOM_TO_OPTIMIZE, STRONG_ALIGNMENT},
    };

    fn client() -> Client {
        Client {
            age: 31,
            condition: "PCOS".to_string(),
            ..Client::default()
        }
    }

    #[test]
    fn test_no_concerns_reads_as_strong_alignment() {
        let service = Service::new(MockNutritionRepository::new());
        let meal_plan = MealPlan {
            breakfast: vec![FoodItem::new("Oats porridge", Some("1 bowl"))],
            lunch: vec![],
            dinner: vec![FoodItem::new("Paneer curry", Some("80g"))],
        };

        let analysis = service.perform_ai_assisted_check(&client(), &meal_plan);

        assert!(analysis.concerns.is_empty());
        assert_eq!(analysis.confirmations.len(), 2);
        assert_eq!(analysis.interpretation, STRONG_ALIGNMENT);
    }

    #[test]
    fn test_concerns_change_interpretation_but_not_narrative() {
        let service = Service::new(MockNutritionRepository::new());
        let calm = service.perform_ai_assisted_check(&client(), &MealPlan::default());
        let busy = service.perform_ai_assisted_check(
            &client(),
            &MealPlan {
                breakfast: vec![FoodItem::new("Banana", Some("1 medium"))],
                lunch: vec![],
                dinner: vec![],
            },
        );

        assert_eq!(busy.interpretation, ROOM_TO_OPTIMIZE);
        assert_eq!(calm.raw_ai_output, busy.raw_ai_output);
        assert_eq!(calm.raw_ai_output, RAW_ANALYSIS);
    }
}
