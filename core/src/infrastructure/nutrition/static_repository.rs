use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::nutrition::{
    entities::{FoodCategory, NamedNutritionEntry, NutritionEntry},
    ports::NutritionRepository,
};

/// Reference values per 100 g, keyed by lower-cased food name.
static NUTRITION_TABLE: LazyLock<HashMap<&'static str, NutritionEntry>> = LazyLock::new(|| {
    HashMap::from([
        ("oats porridge", NutritionEntry::new(13.2, FoodCategory::Grain)),
        ("almonds", NutritionEntry::new(21.0, FoodCategory::Nuts)),
        ("chia seeds", NutritionEntry::new(16.5, FoodCategory::Seeds)),
        ("banana", NutritionEntry::new(1.1, FoodCategory::Fruit)),
        ("brown rice", NutritionEntry::new(2.6, FoodCategory::Grain)),
        ("dal (moong)", NutritionEntry::new(24.0, FoodCategory::Legume)),
        (
            "mixed vegetable curry",
            NutritionEntry::new(2.0, FoodCategory::Vegetable),
        ),
        ("cucumber salad", NutritionEntry::new(0.7, FoodCategory::Vegetable)),
        ("curd", NutritionEntry::new(3.5, FoodCategory::Dairy)),
        ("roti (whole wheat)", NutritionEntry::new(3.5, FoodCategory::Grain)),
        ("paneer curry", NutritionEntry::new(18.0, FoodCategory::Dairy)),
        ("spinach sabzi", NutritionEntry::new(2.9, FoodCategory::Vegetable)),
        ("salad", NutritionEntry::new(1.0, FoodCategory::Vegetable)),
    ])
});

/// In-memory nutrition reference backed by the built-in table.
#[derive(Debug, Clone, Default)]
pub struct StaticNutritionRepository;

impl StaticNutritionRepository {
    pub fn new() -> Self {
        Self
    }
}

impl NutritionRepository for StaticNutritionRepository {
    fn find_by_name(&self, name: &str) -> Option<NutritionEntry> {
        NUTRITION_TABLE.get(name).copied()
    }

    fn list(&self) -> Vec<NamedNutritionEntry> {
        NUTRITION_TABLE
            .iter()
            .map(|(name, entry)| NamedNutritionEntry {
                name: name.to_string(),
                entry: *entry,
            })
            .collect()
    }
}
