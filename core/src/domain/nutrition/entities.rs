use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Grain,
    Nuts,
    Seeds,
    Fruit,
    Legume,
    Vegetable,
    Dairy,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionEntry {
    pub protein_per_100g: f64,
    pub category: FoodCategory,
}

impl NutritionEntry {
    pub const fn new(protein_per_100g: f64, category: FoodCategory) -> Self {
        Self {
            protein_per_100g,
            category,
        }
    }
}

/// A reference entry together with its lookup key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NamedNutritionEntry {
    pub name: String,
    #[serde(flatten)]
    pub entry: NutritionEntry,
}

/// Protein contributed by one recognised item of a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemProtein {
    pub item: String,
    pub protein: f64,
}

/// Protein summed over the recognised items of one meal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealProtein {
    pub total: f64,
    pub items: Vec<ItemProtein>,
}
