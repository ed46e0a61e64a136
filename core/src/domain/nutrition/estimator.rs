use crate::domain::{
    meal_plan::{entities::FoodItem, portion::parse_portion},
    nutrition::{
        entities::{ItemProtein, MealProtein},
        ports::NutritionRepository,
    },
};

pub fn normalize_food_name(item: &str) -> String {
    item.trim().to_lowercase()
}

/// Grams of protein one item contributes.
///
/// `None` means unknown: either the food has no reference entry or its
/// portion cannot be parsed. Unknown is never reported as zero.
pub fn estimate_protein<N>(reference: &N, item: &str, portion: Option<&str>) -> Option<f64>
where
    N: NutritionRepository + ?Sized,
{
    let entry = reference.find_by_name(&normalize_food_name(item))?;
    let grams = parse_portion(portion)?;

    Some(entry.protein_per_100g * grams / 100.0)
}

/// Sums the known protein of a meal. Unknown items are left out of both the
/// total and the breakdown.
pub fn meal_protein<N>(reference: &N, foods: &[FoodItem]) -> MealProtein
where
    N: NutritionRepository + ?Sized,
{
    foods
        .iter()
        .filter_map(|food| {
            estimate_protein(reference, &food.item, food.portion.as_deref()).map(|protein| {
                ItemProtein {
                    item: food.item.clone(),
                    protein,
                }
            })
        })
        .fold(MealProtein::default(), |mut meal, item| {
            meal.total += item.protein;
            meal.items.push(item);
            meal
        })
}
