pub mod get_nutrition_entries;
pub mod get_nutrition_entry;
