use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    nutrition::{
        entities::NamedNutritionEntry,
        estimator::normalize_food_name,
        ports::{NutritionRepository, NutritionService},
    },
};

impl<N> NutritionService for Service<N>
where
    N: NutritionRepository,
{
    fn get_nutrition_entries(&self) -> Vec<NamedNutritionEntry> {
        let mut entries = self.nutrition_repository.list();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    fn get_nutrition_entry(&self, name: String) -> Result<NamedNutritionEntry, CoreError> {
        let name = normalize_food_name(&name);
        if name.is_empty() {
            return Err(CoreError::Invalid("food name must not be blank".to_string()));
        }

        let entry = self
            .nutrition_repository
            .find_by_name(&name)
            .ok_or(CoreError::NotFound)?;

        Ok(NamedNutritionEntry { name, entry })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nutrition::{
        entities::{FoodCategory, NutritionEntry},
        ports::MockNutritionRepository,
    };

    fn named(name: &str, protein: f64, category: FoodCategory) -> NamedNutritionEntry {
        NamedNutritionEntry {
            name: name.to_string(),
            entry: NutritionEntry::new(protein, category),
        }
    }

    #[test]
    fn test_entries_are_sorted_by_name() {
        let mut repository = MockNutritionRepository::new();
        repository.expect_list().returning(|| {
            vec![
                named("salad", 1.0, FoodCategory::Vegetable),
                named("almonds", 21.0, FoodCategory::Nuts),
                named("curd", 3.5, FoodCategory::Dairy),
            ]
        });
        let service = Service::new(repository);

        let names: Vec<String> = service
            .get_nutrition_entries()
            .into_iter()
            .map(|entry| entry.name)
            .collect();

        assert_eq!(names, vec!["almonds", "curd", "salad"]);
    }

    #[test]
    fn test_get_entry_normalises_name() {
        let mut repository = MockNutritionRepository::new();
        repository.expect_find_by_name().returning(|name| {
            (name == "paneer curry").then(|| NutritionEntry::new(18.0, FoodCategory::Dairy))
        });
        let service = Service::new(repository);

        let entry = service.get_nutrition_entry(" Paneer Curry ".to_string());
        assert_eq!(entry, Ok(named("paneer curry", 18.0, FoodCategory::Dairy)));
    }

    #[test]
    fn test_get_entry_unknown_is_not_found() {
        let mut repository = MockNutritionRepository::new();
        repository.expect_find_by_name().returning(|_| None);
        let service = Service::new(repository);

        assert_eq!(
            service.get_nutrition_entry("Quinoa".to_string()),
            Err(CoreError::NotFound)
        );
    }

    #[test]
    fn test_get_entry_rejects_blank_name() {
        let repository = MockNutritionRepository::new();
        let service = Service::new(repository);

        assert!(matches!(
            service.get_nutrition_entry("   ".to_string()),
            Err(CoreError::Invalid(_))
        ));
    }
}
