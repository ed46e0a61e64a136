use mealcheck_core::domain::meal_plan::entities::{Client, FoodItem, MealPlan};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct FoodItemRequest {
    #[validate(length(max = 200, message = "item must be at most 200 characters"))]
    #[schema(example = "Oats porridge")]
    pub item: String,
    #[validate(length(max = 200, message = "portion must be at most 200 characters"))]
    #[schema(example = "1 bowl")]
    #[serde(default)]
    pub portion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct MealPlanRequest {
    #[validate(
        length(max = 50, message = "breakfast must have at most 50 items"),
        nested
    )]
    pub breakfast: Vec<FoodItemRequest>,
    #[validate(
        length(max = 50, message = "lunch must have at most 50 items"),
        nested
    )]
    pub lunch: Vec<FoodItemRequest>,
    #[validate(
        length(max = 50, message = "dinner must have at most 50 items"),
        nested
    )]
    pub dinner: Vec<FoodItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ClientRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[validate(range(max = 130, message = "age must be at most 130"))]
    #[schema(example = 31)]
    pub age: u32,
    #[validate(length(
        min = 1,
        max = 200,
        message = "condition must be between 1 and 200 characters"
    ))]
    #[schema(example = "PCOS")]
    pub condition: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub primary_symptoms: Option<String>,
    #[serde(default)]
    pub concerns: Option<String>,
    #[serde(default)]
    pub medical_notes: Option<String>,
}

/// Body of the endpoints that only look at the plan.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CheckMealPlanRequest {
    #[validate(nested)]
    pub meal_plan: MealPlanRequest,
}

/// Body of the endpoints that weigh the plan against a client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ReviewMealPlanRequest {
    #[validate(nested)]
    pub client: ClientRequest,
    #[validate(nested)]
    pub meal_plan: MealPlanRequest,
}

impl From<FoodItemRequest> for FoodItem {
    fn from(request: FoodItemRequest) -> Self {
        FoodItem {
            item: request.item,
            portion: request.portion,
        }
    }
}

impl From<MealPlanRequest> for MealPlan {
    fn from(request: MealPlanRequest) -> Self {
        let convert = |foods: Vec<FoodItemRequest>| foods.into_iter().map(FoodItem::from).collect();

        MealPlan {
            breakfast: convert(request.breakfast),
            lunch: convert(request.lunch),
            dinner: convert(request.dinner),
        }
    }
}

impl From<ClientRequest> for Client {
    fn from(request: ClientRequest) -> Self {
        Client {
            name: request.name,
            age: request.age,
            condition: request.condition,
            symptoms: request.symptoms,
            goals: request.goals,
            weight: request.weight,
            height: request.height,
            primary_symptoms: request.primary_symptoms,
            concerns: request.concerns,
            medical_notes: request.medical_notes,
        }
    }
}
