use tracing::info;

use crate::domain::{
    common::services::Service,
    meal_plan::entities::{Client, MealPlan},
    nutrition::ports::NutritionRepository,
    plan_fit::ports::PlanFitService,
    quality_check::ports::QualityCheckService,
    review::{entities::MealPlanReview, ports::ReviewService},
};

impl<N> ReviewService for Service<N>
where
    N: NutritionRepository,
{
    fn review_meal_plan(&self, client: &Client, meal_plan: &MealPlan) -> MealPlanReview {
        let review = MealPlanReview {
            protein: self.check_protein_content(meal_plan),
            portions: self.check_portion_sizes(meal_plan),
            formatting: self.check_formatting_and_typos(meal_plan),
            plan_fit: self.perform_ai_assisted_check(client, meal_plan),
        };

        info!(
            items = meal_plan.item_count(),
            portions = %review.portions.status,
            formatting = %review.formatting.status,
            concerns = review.plan_fit.concerns.len(),
            "reviewed meal plan"
        );

        review
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::quality_check::entities::CheckStatus,
        infrastructure::{
            nutrition::StaticNutritionRepository,
            samples::{sample_client, sample_meal_plan},
        },
    };

    fn service() -> Service<StaticNutritionRepository> {
        Service::new(StaticNutritionRepository::new())
    }

    #[test]
    fn test_sample_plan_review() {
        let review = service().review_meal_plan(&sample_client(), &sample_meal_plan());

        let protein = &review.protein;
        assert!((protein.details.breakfast.total - 44.375).abs() < 1e-9);
        assert_eq!(protein.details.breakfast.items.len(), 4);
        assert_eq!(protein.assessments.breakfast.status, CheckStatus::Warning);
        assert!(
            protein
                .assessments
                .breakfast
                .message
                .starts_with("High protein content: 44.4g")
        );
        assert!((protein.details.lunch.total - 48.225).abs() < 1e-9);
        assert!((protein.details.dinner.total - 34.85).abs() < 1e-9);
        assert_eq!(protein.details.dinner.items.len(), 3);

        assert_eq!(review.portions.status, CheckStatus::NeedsImprovement);
        assert_eq!(review.portions.issues.len(), 1);
        assert_eq!(review.portions.issues[0].item, "Salad");
        assert!(review.portions.warnings.is_empty());

        assert_eq!(review.formatting.status, CheckStatus::NeedsImprovement);
        assert_eq!(review.formatting.issues.len(), 1);
        assert_eq!(
            review.formatting.issues[0].suggestion.as_deref(),
            Some("Chia seeds")
        );

        assert_eq!(review.plan_fit.concerns.len(), 2);
        assert_eq!(review.plan_fit.confirmations.len(), 3);
    }

    #[test]
    fn test_review_is_idempotent() {
        let service = service();
        let client = sample_client();
        let meal_plan = sample_meal_plan();

        let first = serde_json::to_string(&service.review_meal_plan(&client, &meal_plan)).unwrap();
        let second = serde_json::to_string(&service.review_meal_plan(&client, &meal_plan)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_review_does_not_mutate_inputs() {
        let client = sample_client();
        let meal_plan = sample_meal_plan();

        service().review_meal_plan(&client, &meal_plan);

        assert_eq!(client, sample_client());
        assert_eq!(meal_plan, sample_meal_plan());
    }

    #[test]
    fn test_shared_service_reviews_concurrently() {
        let service = service();
        let client = sample_client();
        let meal_plan = sample_meal_plan();
        let expected =
            serde_json::to_string(&service.review_meal_plan(&client, &meal_plan)).unwrap();

        let reviews: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let service = service.clone();
                    let client = &client;
                    let meal_plan = &meal_plan;
                    scope.spawn(move || {
                        serde_json::to_string(&service.review_meal_plan(client, meal_plan))
                            .unwrap()
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(reviews.len(), 8);
        assert!(reviews.iter().all(|review| *review == expected));
    }
}
