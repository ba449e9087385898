// Shareable shopping-list text for Recipe-Local

use crate::database::models::Recipe;

/// Render the fixed share template for a picked recipe: headline, bulleted
/// shopping list in display order, cook time, cuisine, and source.
pub fn share_text(recipe: &Recipe) -> String {
    let shopping_list = recipe
        .ingredients
        .iter()
        .map(|line| format!("• {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🍽️ Tonight's Dinner: {}\n\n📋 Shopping List:\n{}\n\n⏱️ Cook Time: {} minutes\n🌍 Cuisine: {}\n📖 Source: {}",
        recipe.name,
        shopping_list,
        recipe.cook_time_minutes,
        recipe.cuisine,
        recipe.source,
    )
}
