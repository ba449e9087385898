// Command handlers for Recipe-Local
// Each handler runs one short synchronous operation over a fresh snapshot
// of the recipe collection

use crate::clipboard;
use crate::database::models::{Recipe, RecipeDraft};
use crate::database::DatabaseManager;
use crate::error::AppError;
use crate::picker::{filter_recipes, pick_recipe, share_text, validate_draft, FilterCriteria};

/// Pick a random recipe matching the criteria and remember it as the last
/// selection. `copy` also puts the share text on the clipboard.
pub fn pick(db: &DatabaseManager, criteria: &FilterCriteria, copy: bool) -> Result<(), AppError> {
    let recipes = db.get_all_recipes().map_err(AppError::StoreUnavailable)?;
    let candidates = filter_recipes(&recipes, criteria);

    let last = db
        .last_selected_recipe_id()
        .map_err(AppError::StoreUnavailable)?;

    let chosen = pick_recipe(&candidates, last.as_deref())?;

    db.set_last_selected_recipe_id(&chosen.id)
        .map_err(AppError::StoreUnavailable)?;
    log::info!("Picked recipe {} ({})", chosen.id, chosen.name);

    print_recipe(chosen);

    if copy {
        copy_share_text(chosen);
    }

    Ok(())
}

/// List the recipes matching the criteria, newest first
pub fn list(db: &DatabaseManager, criteria: &FilterCriteria) -> Result<(), AppError> {
    let recipes = db.get_all_recipes().map_err(AppError::StoreUnavailable)?;
    let matching = filter_recipes(&recipes, criteria);

    if matching.is_empty() {
        if criteria.is_empty() {
            println!("No recipes yet. Add one with `recipe-local add`.");
        } else {
            println!("No recipes match the current filters.");
        }
        return Ok(());
    }

    for recipe in &matching {
        println!(
            "{:<30} {:>4} min  {} / {}",
            recipe.name, recipe.cook_time_minutes, recipe.cuisine, recipe.meal_type
        );
    }

    if criteria.is_empty() {
        println!("\n{} recipe(s) in your collection", matching.len());
    } else {
        println!("\n{} of {} recipe(s) match", matching.len(), recipes.len());
    }

    Ok(())
}

/// Validate and store a new recipe, then report the refreshed collection size
pub fn add(db: &DatabaseManager, draft: RecipeDraft) -> Result<(), AppError> {
    let recipe = validate_draft(&draft)?;

    db.insert_recipe(&recipe).map_err(AppError::StoreUnavailable)?;
    log::info!("Added recipe {} ({})", recipe.id, recipe.name);

    let count = db.count_recipes().map_err(AppError::StoreUnavailable)?;
    println!(
        "Added \"{}\". You now have {} recipe(s) in your collection.",
        recipe.name, count
    );

    Ok(())
}

/// Copy the share text of the last picked recipe to the clipboard
pub fn share(db: &DatabaseManager) -> Result<(), AppError> {
    let last = db
        .last_selected_recipe_id()
        .map_err(AppError::StoreUnavailable)?;

    let Some(id) = last else {
        println!("Nothing picked yet. Run `recipe-local pick` first.");
        return Ok(());
    };

    match db.get_recipe(&id).map_err(AppError::StoreUnavailable)? {
        Some(recipe) => copy_share_text(&recipe),
        None => println!("The last picked recipe is no longer in the collection."),
    }

    Ok(())
}

/// Show the distinct cuisines and meal types in the collection
pub fn options(db: &DatabaseManager) -> Result<(), AppError> {
    let cuisines = db.distinct_cuisines().map_err(AppError::StoreUnavailable)?;
    let meal_types = db.distinct_meal_types().map_err(AppError::StoreUnavailable)?;

    println!("Cuisines:   {}", join_or_placeholder(&cuisines));
    println!("Meal types: {}", join_or_placeholder(&meal_types));

    Ok(())
}

fn join_or_placeholder(values: &[String]) -> String {
    if values.is_empty() {
        "(none yet)".to_string()
    } else {
        values.join(", ")
    }
}

fn print_recipe(recipe: &Recipe) {
    println!("\n{}", recipe.name);
    println!(
        "{} min  •  {}  •  {}",
        recipe.cook_time_minutes, recipe.cuisine, recipe.meal_type
    );

    println!("\nShopping list:");
    for line in &recipe.ingredients {
        println!("  • {line}");
    }

    println!("\nSource: {}", recipe.source);
}

fn copy_share_text(recipe: &Recipe) {
    let text = share_text(recipe);

    match clipboard::copy(&text) {
        Ok(()) => println!("\nCopied to clipboard, ready to share."),
        Err(e) => {
            log::warn!("Clipboard unavailable: {:#}", e);
            println!("\nClipboard unavailable, share text below:\n\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_test_db() -> DatabaseManager {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let manager = DatabaseManager::new(db_path).unwrap();
        // Keep the temp directory alive for the lifetime of the process so the
        // open connection's backing file is not deleted out from under it.
        std::mem::forget(dir);
        manager
    }

    fn draft(name: &str) -> RecipeDraft {
        RecipeDraft {
            name: name.to_string(),
            cuisine: "Indian".to_string(),
            meal_type: "Main".to_string(),
            cook_time: "25".to_string(),
            ingredients: "1 cup lentils\n2 tsp cumin".to_string(),
            source: String::new(),
        }
    }

    #[test]
    fn test_add_then_pick_remembers_selection() {
        let db = create_test_db();
        add(&db, draft("Dal")).unwrap();

        assert_eq!(db.last_selected_recipe_id().unwrap(), None);
        pick(&db, &FilterCriteria::default(), false).unwrap();

        let last = db.last_selected_recipe_id().unwrap().unwrap();
        let recipes = db.get_all_recipes().unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(last, recipes[0].id);
    }

    #[test]
    fn test_pick_with_no_matches_fails_without_side_effect() {
        let db = create_test_db();
        add(&db, draft("Dal")).unwrap();

        let criteria = FilterCriteria {
            cuisine: Some("thai".to_string()),
            ..Default::default()
        };

        let err = pick(&db, &criteria, false).unwrap_err();
        assert!(matches!(err, AppError::EmptySelection(_)));
        assert_eq!(db.last_selected_recipe_id().unwrap(), None);
    }

    #[test]
    fn test_add_rejects_invalid_draft() {
        let db = create_test_db();

        let err = add(&db, RecipeDraft::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(db.count_recipes().unwrap(), 0);
    }

    #[test]
    fn test_pick_respects_filters() {
        let db = create_test_db();
        add(&db, draft("Dal")).unwrap();

        let mut soup = draft("Minestrone");
        soup.cuisine = "Italian".to_string();
        soup.meal_type = "Soup".to_string();
        add(&db, soup).unwrap();

        let criteria = FilterCriteria {
            cuisine: Some("italian".to_string()),
            ..Default::default()
        };
        pick(&db, &criteria, false).unwrap();

        let last = db.last_selected_recipe_id().unwrap().unwrap();
        let picked = db.get_recipe(&last).unwrap().unwrap();
        assert_eq!(picked.name, "Minestrone");
    }
}
