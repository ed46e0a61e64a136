use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One line of a meal: a food name and an optional free-text portion.
///
/// `portion: None` and `portion: Some("")` are both "no portion provided"
/// for the checks, but they are kept apart so the caller's input
/// round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portion: Option<String>,
}

impl FoodItem {
    pub fn new(item: impl Into<String>, portion: Option<&str>) -> Self {
        Self {
            item: item.into(),
            portion: portion.map(str::to_string),
        }
    }

    /// True when the portion is absent or blank after trimming.
    pub fn has_missing_portion(&self) -> bool {
        self.portion
            .as_deref()
            .is_none_or(|portion| portion.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub breakfast: Vec<FoodItem>,
    pub lunch: Vec<FoodItem>,
    pub dinner: Vec<FoodItem>,
}

impl MealPlan {
    pub fn slot(&self, slot: MealSlot) -> &[FoodItem] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Every item paired with its slot, breakfast first.
    pub fn iter_items(&self) -> impl Iterator<Item = (MealSlot, &FoodItem)> {
        MealSlot::ALL
            .into_iter()
            .flat_map(move |slot| self.slot(slot).iter().map(move |food| (slot, food)))
    }

    pub fn item_count(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len()
    }
}

/// One value per meal slot, serialized as `{ breakfast, lunch, dinner }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PerMeal<T> {
    pub breakfast: T,
    pub lunch: T,
    pub dinner: T,
}

impl<T> PerMeal<T> {
    pub fn from_fn(mut f: impl FnMut(MealSlot) -> T) -> Self {
        Self {
            breakfast: f(MealSlot::Breakfast),
            lunch: f(MealSlot::Lunch),
            dinner: f(MealSlot::Dinner),
        }
    }

    pub fn get(&self, slot: MealSlot) -> &T {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }
}

/// Client profile the plan is reviewed against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Client {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub age: u32,
    pub condition: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_symptoms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concerns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_portion_covers_absent_and_blank() {
        assert!(FoodItem::new("Salad", None).has_missing_portion());
        assert!(FoodItem::new("Salad", Some("")).has_missing_portion());
        assert!(FoodItem::new("Salad", Some("   ")).has_missing_portion());
        assert!(!FoodItem::new("Salad", Some("1 bowl")).has_missing_portion());
    }

    #[test]
    fn test_iter_items_follows_slot_order() {
        let plan = MealPlan {
            breakfast: vec![FoodItem::new("Oats porridge", Some("1 bowl"))],
            lunch: vec![
                FoodItem::new("Brown rice", Some("1 cup")),
                FoodItem::new("Curd", Some("100g")),
            ],
            dinner: vec![FoodItem::new("Salad", None)],
        };

        let visited: Vec<(MealSlot, &str)> = plan
            .iter_items()
            .map(|(slot, food)| (slot, food.item.as_str()))
            .collect();

        assert_eq!(
            visited,
            vec![
                (MealSlot::Breakfast, "Oats porridge"),
                (MealSlot::Lunch, "Brown rice"),
                (MealSlot::Lunch, "Curd"),
                (MealSlot::Dinner, "Salad"),
            ]
        );
        assert_eq!(plan.item_count(), 4);
    }

    #[test]
    fn test_absent_portion_is_not_serialized() {
        let json = serde_json::to_string(&FoodItem::new("Salad", None)).unwrap();
        assert_eq!(json, r#"{"item":"Salad"}"#);

        let food: FoodItem = serde_json::from_str(r#"{"item":"Salad","portion":""}"#).unwrap();
        assert_eq!(food.portion.as_deref(), Some(""));
    }

    #[test]
    fn test_meal_plan_requires_every_slot() {
        let result: Result<MealPlan, _> =
            serde_json::from_str(r#"{"breakfast":[],"lunch":[]}"#);
        assert!(result.is_err());
    }
}
