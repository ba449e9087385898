// Database models - Recipe
use serde::{Deserialize, Serialize};

/// A recipe in the personal collection.
///
/// Recipes are immutable once created; there are no update or delete
/// operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// Lowercase category, e.g. "italian"
    pub cuisine: String,
    /// Lowercase category, e.g. "soup"
    pub meal_type: String,
    pub cook_time_minutes: u32,
    /// Human-readable ingredient lines, order is display-significant
    pub ingredients: Vec<String>,
    /// Coarse keywords derived from `ingredients`, one per line
    pub main_ingredients: Vec<String>,
    pub source: String,
    pub created_at: String,
}

impl Recipe {
    pub fn new(
        name: String,
        cuisine: String,
        meal_type: String,
        cook_time_minutes: u32,
        ingredients: Vec<String>,
        main_ingredients: Vec<String>,
        source: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            cuisine,
            meal_type,
            cook_time_minutes,
            ingredients,
            main_ingredients,
            source,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Raw user-entered fields for a new recipe, before validation.
///
/// Everything is a string exactly as typed; `ingredients` is one multiline
/// block with one ingredient per line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub cuisine: String,
    pub meal_type: String,
    pub cook_time: String,
    pub ingredients: String,
    pub source: String,
}
