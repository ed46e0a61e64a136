use crate::domain::{
    common::services::Service,
    meal_plan::entities::MealPlan,
    nutrition::ports::NutritionRepository,
    quality_check::{
        entities::{FormattingCheckResult, PortionCheckResult, ProteinCheckResult},
        formatting::check_formatting_and_typos,
        portions::check_portion_sizes,
        ports::QualityCheckService,
        protein::check_protein_content,
    },
};

impl<N> QualityCheckService for Service<N>
where
    N: NutritionRepository,
{
    fn check_protein_content(&self, meal_plan: &MealPlan) -> ProteinCheckResult {
        check_protein_content(self.nutrition_repository.as_ref(), meal_plan)
    }

    fn check_portion_sizes(&self, meal_plan: &MealPlan) -> PortionCheckResult {
        check_portion_sizes(meal_plan)
    }

    fn check_formatting_and_typos(&self, meal_plan: &MealPlan) -> FormattingCheckResult {
        check_formatting_and_typos(meal_plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        meal_plan::entities::FoodItem,
        nutrition::{
            entities::{FoodCategory, NutritionEntry},
            ports::MockNutritionRepository,
        },
        quality_check::entities::CheckStatus,
    };

    #[test]
    fn test_protein_check_uses_repository() {
        let mut repository = MockNutritionRepository::new();
        repository
            .expect_find_by_name()
            .times(3)
            .returning(|_| Some(NutritionEntry::new(10.0, FoodCategory::Legume)));
        let service = Service::new(repository);

        let meal_plan = MealPlan {
            breakfast: vec![FoodItem::new("Lentil soup", Some("100g"))],
            lunch: vec![FoodItem::new("Lentil soup", Some("1 bowl"))],
            dinner: vec![FoodItem::new("Lentil soup", Some("1kg"))],
        };

        let result = service.check_protein_content(&meal_plan);

        assert_eq!(result.details.breakfast.total, 10.0);
        assert_eq!(result.assessments.breakfast.status, CheckStatus::Ok);
        assert_eq!(result.details.lunch.total, 15.0);
        assert_eq!(result.details.dinner.total, 100.0);
        assert_eq!(result.assessments.dinner.status, CheckStatus::Warning);
    }

    #[test]
    fn test_portion_and_formatting_checks_never_touch_repository() {
        let repository = MockNutritionRepository::new();
        let service = Service::new(repository);

        let meal_plan = MealPlan {
            breakfast: vec![FoodItem::new("banana", None)],
            lunch: vec![],
            dinner: vec![],
        };

        assert_eq!(
            service.check_portion_sizes(&meal_plan).status,
            CheckStatus::NeedsImprovement
        );
        assert_eq!(
            service.check_formatting_and_typos(&meal_plan).status,
            CheckStatus::NeedsImprovement
        );
    }
}
