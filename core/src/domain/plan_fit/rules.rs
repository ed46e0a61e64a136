use tracing::debug;

use crate::domain::{
    meal_plan::{
        entities::{FoodItem, MealPlan},
        portion::parse_portion,
    },
    plan_fit::entities::{FitFinding, RuleOutcome},
};

pub const STRONG_ALIGNMENT: &str =
    "The meal plan shows strong alignment with the client's PCOS management needs and goals.";
pub const ROOM_TO_OPTIMIZE: &str = "The meal plan is generally well-structured but has a few areas that could be optimized based on the client's specific symptoms.";

/// Dinner dairy portions above this many grams raise a concern.
pub const DAIRY_PORTION_LIMIT_GRAMS: f64 = 100.0;

const REFINED_CARB_MARKERS: [&str; 3] = ["white bread", "sugar", "refined"];
const LEGUME_MARKERS: [&str; 2] = ["dal", "lentil"];
const DAIRY_MARKERS: [&str; 2] = ["paneer", "cheese"];
const ANTI_INFLAMMATORY_MARKERS: [&str; 5] = ["spinach", "turmeric", "ginger", "chia", "almond"];

type Rule = fn(&MealPlan) -> Option<RuleOutcome>;

/// Evaluated in order; each rule fires at most once.
const RULES: [Rule; 5] = [
    high_gi_breakfast_fruit,
    complex_carb_breakfast,
    legume_lunch,
    dinner_dairy_portion,
    anti_inflammatory_foods,
];

fn lowercase_names(foods: &[FoodItem]) -> Vec<String> {
    foods.iter().map(|food| food.item.to_lowercase()).collect()
}

fn contains_any(name: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| name.contains(marker))
}

fn high_gi_breakfast_fruit(meal_plan: &MealPlan) -> Option<RuleOutcome> {
    lowercase_names(&meal_plan.breakfast)
        .iter()
        .any(|name| name == "banana")
        .then(|| {
            RuleOutcome::Concern(FitFinding::new(
                "Breakfast - Glycemic Load",
                "Banana is high GI and may spike blood sugar. For PCOS, consider berries or apple instead to manage insulin resistance.",
            ))
        })
}

fn complex_carb_breakfast(meal_plan: &MealPlan) -> Option<RuleOutcome> {
    let names = lowercase_names(&meal_plan.breakfast);
    let has_refined_carbs = names
        .iter()
        .any(|name| contains_any(name, &REFINED_CARB_MARKERS));
    let has_oats = names.iter().any(|name| name.contains("oats"));

    (has_oats && !has_refined_carbs).then(|| {
        RuleOutcome::Confirmation(FitFinding::new(
            "Breakfast - Complex Carbs",
            "Oats provide slow-release energy, good for managing fatigue and stable blood sugar throughout the morning.",
        ))
    })
}

fn legume_lunch(meal_plan: &MealPlan) -> Option<RuleOutcome> {
    lowercase_names(&meal_plan.lunch)
        .iter()
        .any(|name| contains_any(name, &LEGUME_MARKERS))
        .then(|| {
            RuleOutcome::Confirmation(FitFinding::new(
                "Lunch - Protein & Fiber",
                "Dal provides plant protein and fiber, supporting satiety and reducing sugar cravings mentioned in symptoms.",
            ))
        })
}

// A dairy item with an absent or unparseable portion yields nothing.
fn dinner_dairy_portion(meal_plan: &MealPlan) -> Option<RuleOutcome> {
    let dairy = meal_plan
        .dinner
        .iter()
        .find(|food| contains_any(&food.item.to_lowercase(), &DAIRY_MARKERS))?;
    let grams = parse_portion(dairy.portion.as_deref())?;

    let outcome = if grams > DAIRY_PORTION_LIMIT_GRAMS {
        RuleOutcome::Concern(FitFinding::new(
            "Dinner - Dairy Portion",
            "Large dairy portions at dinner may contribute to bloating (logged symptom). Consider reducing to 100g or monitoring tolerance.",
        ))
    } else {
        RuleOutcome::Confirmation(FitFinding::new(
            "Dinner - Protein Source",
            "Paneer provides good protein for evening satiety, helping prevent late-night cravings.",
        ))
    };

    Some(outcome)
}

fn anti_inflammatory_foods(meal_plan: &MealPlan) -> Option<RuleOutcome> {
    meal_plan
        .iter_items()
        .any(|(_, food)| contains_any(&food.item.to_lowercase(), &ANTI_INFLAMMATORY_MARKERS))
        .then(|| {
            RuleOutcome::Confirmation(FitFinding::new(
                "Overall - Anti-inflammatory Foods",
                "Plan includes anti-inflammatory ingredients (spinach, chia, almonds) which support PCOS management.",
            ))
        })
}

/// Runs every rule and splits the outcomes into `(concerns, confirmations)`.
pub fn evaluate_rules(meal_plan: &MealPlan) -> (Vec<FitFinding>, Vec<FitFinding>) {
    let mut concerns = Vec::new();
    let mut confirmations = Vec::new();

    for outcome in RULES.iter().filter_map(|rule| rule(meal_plan)) {
        match outcome {
            RuleOutcome::Concern(finding) => concerns.push(finding),
            RuleOutcome::Confirmation(finding) => confirmations.push(finding),
        }
    }

    debug!(
        concerns = concerns.len(),
        confirmations = confirmations.len(),
        "evaluated plan-fit rules"
    );

    (concerns, confirmations)
}

pub fn interpret(concerns: &[FitFinding]) -> &'static str {
    if concerns.is_empty() {
        STRONG_ALIGNMENT
    } else {
        ROOM_TO_OPTIMIZE
    }
}
