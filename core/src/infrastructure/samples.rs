//! The reference client profile and meal plan used for demos.

use crate::domain::meal_plan::entities::{Client, FoodItem, MealPlan};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn sample_client() -> Client {
    Client {
        name: Some("Client Profile".to_string()),
        age: 31,
        condition: "PCOS".to_string(),
        symptoms: strings(&["Hormonal acne", "Weight gain issues", "Over 3 years duration"]),
        goals: strings(&[
            "Regulate menstrual cycle",
            "Improve energy levels",
            "Weight management",
            "Reduce hormonal acne",
        ]),
        weight: Some("91.5 kg".to_string()),
        height: Some("165 cm".to_string()),
        primary_symptoms: Some("PCOS, Hormonal acne, weight gain issues".to_string()),
        concerns: Some(
            "Fatigue or low energy levels, Weight management difficulties, Digestive issues, Hairfall, PMS (Pre-menstrual syndrome), Menstrual Pain, Body image concerns"
                .to_string(),
        ),
        medical_notes: Some(
            "Hormonal Profile: FSH:FH - 1, Inflammation: tgd's - 205, uric acid- 8.3, testosterone- 103, tsh- 7.167. Medication: yes- contraceptives (prior), omega 3 nd multi vitamin"
                .to_string(),
        ),
    }
}

pub fn sample_meal_plan() -> MealPlan {
    MealPlan {
        breakfast: vec![
            FoodItem::new("Oats porridge", Some("1 bowl (50g dry oats)")),
            FoodItem::new("Almonds", Some("10 pieces")),
            FoodItem::new("chia seeds", Some("1 tbsp")),
            FoodItem::new("Banana", Some("1 medium")),
        ],
        lunch: vec![
            FoodItem::new("Brown rice", Some("1 cup cooked")),
            FoodItem::new("Dal (moong)", Some("1 bowl")),
            FoodItem::new("Mixed vegetable curry", Some("1 bowl")),
            FoodItem::new("Cucumber salad", Some("1 small bowl")),
            FoodItem::new("Curd", Some("100g")),
        ],
        dinner: vec![
            FoodItem::new("Roti (whole wheat)", Some("2 medium")),
            FoodItem::new("Paneer curry", Some("150g")),
            FoodItem::new("Spinach sabzi", Some("1 bowl")),
            FoodItem::new("Salad", None),
        ],
    }
}
