use crate::domain::meal_plan::entities::{Client, FoodItem, MealPlan, MealSlot};

/// Narrative shown alongside every plan-fit analysis. It is the same text for
/// every input.
pub const RAW_ANALYSIS: &str = "ALIGNMENT ANALYSIS:
✓ Meal plan shows good alignment with PCOS management principles
✓ Focus on complex carbohydrates and whole grains
✓ Adequate protein distribution across meals
⚠ Some considerations needed for specific symptoms

SYMPTOM-PLAN CORRELATION:
- Fatigue: Complex carbs (oats, brown rice) provide sustained energy ✓
- Bloating: High dairy/legume content may need monitoring ⚠
- Sugar cravings: Good protein and fiber balance should help ✓

GOAL SUPPORT:
- Cycle regulation: Anti-inflammatory foods present ✓
- Energy improvement: Balanced macros with slow-release carbs ✓
- Bloating reduction: May need portion adjustment for dairy ⚠

KEY CONCERNS:
1. Monitor dairy portions at dinner due to bloating concerns
2. Consider lower GI fruit options for breakfast
3. Overall structure is sound and supportive of goals";

fn describe_food(food: &FoodItem) -> String {
    let portion = food
        .portion
        .as_deref()
        .filter(|portion| !portion.is_empty())
        .unwrap_or("no portion");
    format!("{} ({portion})", food.item)
}

fn describe_meal(foods: &[FoodItem]) -> String {
    foods
        .iter()
        .map(describe_food)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the reviewer prompt for a client and plan.
pub fn build_review_prompt(client: &Client, meal_plan: &MealPlan) -> String {
    let meals = MealSlot::ALL
        .iter()
        .map(|slot| format!("{}: {}", slot.label(), describe_meal(meal_plan.slot(*slot))))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a health coach assistant reviewing a meal plan for a client with the following profile:

CLIENT PROFILE:
- Age: {age}
- Condition: {condition}
- Symptoms: {symptoms}
- Goals: {goals}

MEAL PLAN:
{meals}

ANALYSIS QUESTIONS:
1. Does this meal plan align with PCOS management principles (low GI, anti-inflammatory, balanced macros)?
2. Are there any contradictions between the meal plan and the client's logged symptoms (fatigue, bloating, sugar cravings)?
3. Does the plan support the client's goals (cycle regulation, energy improvement, reduced bloating)?
4. What are 1-2 high-level concerns or confirmations?

Provide a structured assessment focusing on logical fit, not medical advice.",
        age = client.age,
        condition = client.condition,
        symptoms = client.symptoms.join(", "),
        goals = client.goals.join(", "),
    )
}
