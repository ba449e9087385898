// Recipe filtering for Recipe-Local

use serde::{Deserialize, Serialize};

use crate::database::models::Recipe;

/// Criteria for narrowing the recipe collection.
///
/// Absent or blank fields impose no constraint. Cuisine and meal type are
/// exact matches against the stored lowercase values; the ingredient
/// criterion is a case-insensitive substring match against any ingredient
/// line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub cuisine: Option<String>,
    pub meal_type: Option<String>,
    pub max_cook_time: Option<u32>,
    pub ingredient: Option<String>,
}

impl FilterCriteria {
    /// True when no constraint is active
    pub fn is_empty(&self) -> bool {
        active(&self.cuisine).is_none()
            && active(&self.meal_type).is_none()
            && self.max_cook_time.is_none()
            && active(&self.ingredient).is_none()
    }

    /// True when the recipe satisfies every active constraint
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(cuisine) = active(&self.cuisine) {
            if recipe.cuisine != cuisine {
                return false;
            }
        }

        if let Some(meal_type) = active(&self.meal_type) {
            if recipe.meal_type != meal_type {
                return false;
            }
        }

        if let Some(max) = self.max_cook_time {
            if recipe.cook_time_minutes > max {
                return false;
            }
        }

        if let Some(needle) = active(&self.ingredient) {
            let needle = needle.to_lowercase();
            let found = recipe
                .ingredients
                .iter()
                .any(|line| line.to_lowercase().contains(&needle));
            if !found {
                return false;
            }
        }

        true
    }
}

/// Treat blank criterion strings the same as absent ones
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Return the recipes satisfying all active constraints, preserving order.
///
/// Pure: no side effects, inputs untouched. An empty result is valid.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], criteria: &FilterCriteria) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| criteria.matches(r)).collect()
}
