// Add-recipe validation for Recipe-Local
// Turns raw form input into a well-formed Recipe, or reports every
// field-level problem at once

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::database::models::{Recipe, RecipeDraft};

/// Default attribution when the user leaves the source blank
const DEFAULT_SOURCE: &str = "Personal collection";

/// One or more fields of the draft are missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid recipe: {}", .issues.join("; "))]
pub struct ValidationError {
    /// Field-level problems, one human-readable sentence each
    pub issues: Vec<String>,
}

/// Leading run of letters and whitespace in an ingredient line
static ALPHA_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z\s]+").expect("valid regex")
});

/// Validate raw user input and build a well-formed Recipe.
///
/// All problems are collected and reported together so the user can fix
/// them in one pass. On success the cuisine and meal type are lowercased,
/// the ingredients block is split into one entry per non-blank line, and a
/// blank source defaults to "Personal collection". The returned recipe has
/// a fresh id and creation timestamp and is ready for persistence.
pub fn validate_draft(draft: &RecipeDraft) -> Result<Recipe, ValidationError> {
    let mut issues = Vec::new();

    if draft.name.trim().is_empty() {
        issues.push("name is required".to_string());
    }
    if draft.cuisine.trim().is_empty() {
        issues.push("cuisine is required".to_string());
    }
    if draft.meal_type.trim().is_empty() {
        issues.push("meal type is required".to_string());
    }

    let cook_time = draft.cook_time.trim();
    let mut cook_time_minutes = 0;
    if cook_time.is_empty() {
        issues.push("cook time is required".to_string());
    } else {
        match cook_time.parse::<u32>() {
            Ok(minutes) => cook_time_minutes = minutes,
            Err(_) => issues.push(format!(
                "cook time must be a non-negative whole number of minutes (got \"{cook_time}\")"
            )),
        }
    }

    let ingredients: Vec<String> = draft
        .ingredients
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if ingredients.is_empty() {
        issues.push("at least one ingredient line is required".to_string());
    }

    if !issues.is_empty() {
        return Err(ValidationError { issues });
    }

    let main_ingredients = ingredients.iter().map(|line| main_ingredient(line)).collect();

    let source = match draft.source.trim() {
        "" => DEFAULT_SOURCE.to_string(),
        other => other.to_string(),
    };

    Ok(Recipe::new(
        draft.name.trim().to_string(),
        draft.cuisine.trim().to_lowercase(),
        draft.meal_type.trim().to_lowercase(),
        cook_time_minutes,
        ingredients,
        main_ingredients,
        source,
    ))
}

/// Coarse keyword for an ingredient line: the first run of letters and
/// spaces, trimmed and lowercased ("2 cups kale" becomes "cups kale").
/// Falls back to the whole lowercased line when no such run exists.
fn main_ingredient(line: &str) -> String {
    match ALPHA_RUN.find(line) {
        Some(m) => m.as_str().trim().to_lowercase(),
        None => line.to_lowercase(),
    }
}
