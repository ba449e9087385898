// Recipes repository for Recipe-Local
// Handles create/read operations for the recipe collection

use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row};

use super::models::Recipe;
use super::DatabaseManager;

impl DatabaseManager {
    /// Insert a new recipe
    pub fn insert_recipe(&self, recipe: &Recipe) -> Result<String> {
        self.with_connection(|conn| {
            insert_recipe_impl(conn, recipe)
        })
    }

    /// Get a recipe by ID
    pub fn get_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        self.with_connection(|conn| {
            get_recipe_impl(conn, id)
        })
    }

    /// Get all recipes (most recently created first)
    pub fn get_all_recipes(&self) -> Result<Vec<Recipe>> {
        self.with_connection(get_all_recipes_impl)
    }

    /// Number of recipes in the collection
    pub fn count_recipes(&self) -> Result<i64> {
        self.with_connection(count_recipes_impl)
    }

    /// Distinct cuisine values present in the collection, sorted
    pub fn distinct_cuisines(&self) -> Result<Vec<String>> {
        self.with_connection(|conn| {
            distinct_values_impl(conn, "cuisine")
        })
    }

    /// Distinct meal type values present in the collection, sorted
    pub fn distinct_meal_types(&self) -> Result<Vec<String>> {
        self.with_connection(|conn| {
            distinct_values_impl(conn, "meal_type")
        })
    }
}

const RECIPE_COLUMNS: &str =
    "id, name, cuisine, meal_type, cook_time_minutes, ingredients, main_ingredients, source, created_at";

fn insert_recipe_impl(conn: &Connection, recipe: &Recipe) -> Result<String> {
    let ingredients_json = serde_json::to_string(&recipe.ingredients)
        .context("Failed to encode ingredients")?;
    let main_ingredients_json = serde_json::to_string(&recipe.main_ingredients)
        .context("Failed to encode main ingredients")?;

    conn.execute(
        r#"
        INSERT INTO recipes (
            id, name, cuisine, meal_type, cook_time_minutes,
            ingredients, main_ingredients, source, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
        params![
            recipe.id,
            recipe.name,
            recipe.cuisine,
            recipe.meal_type,
            recipe.cook_time_minutes,
            ingredients_json,
            main_ingredients_json,
            recipe.source,
            recipe.created_at,
        ],
    ).context("Failed to insert recipe")?;

    Ok(recipe.id.clone())
}

fn get_recipe_impl(conn: &Connection, id: &str) -> Result<Option<Recipe>> {
    let mut stmt = conn.prepare(
        &format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?")
    ).context("Failed to prepare get_recipe query")?;

    let result = stmt.query_row(params![id], row_to_recipe);

    match result {
        Ok(recipe) => Ok(Some(recipe)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e).context("Failed to get recipe"),
    }
}

fn get_all_recipes_impl(conn: &Connection) -> Result<Vec<Recipe>> {
    let mut stmt = conn.prepare(
        &format!("SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY created_at DESC")
    ).context("Failed to prepare get_all_recipes query")?;

    let recipes = stmt.query_map([], row_to_recipe)
        .context("Failed to query recipes")?;

    recipes.collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to collect recipes")
}

fn count_recipes_impl(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))
        .context("Failed to count recipes")
}

fn distinct_values_impl(conn: &Connection, column: &str) -> Result<Vec<String>> {
    // column is one of our own identifiers, never user input
    let mut stmt = conn.prepare(
        &format!("SELECT DISTINCT {column} FROM recipes ORDER BY {column}")
    ).context("Failed to prepare distinct values query")?;

    let values = stmt.query_map([], |row| row.get(0))
        .context("Failed to query distinct values")?;

    values.collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to collect distinct values")
}

fn row_to_recipe(row: &Row) -> rusqlite::Result<Recipe> {
    let ingredients_json: String = row.get(5)?;
    let main_ingredients_json: String = row.get(6)?;

    Ok(Recipe {
        id: row.get(0)?,
        name: row.get(1)?,
        cuisine: row.get(2)?,
        meal_type: row.get(3)?,
        cook_time_minutes: row.get(4)?,
        ingredients: decode_json_column(5, &ingredients_json)?,
        main_ingredients: decode_json_column(6, &main_ingredients_json)?,
        source: row.get(7)?,
        created_at: row.get(8)?,
    })
}

fn decode_json_column(index: usize, json: &str) -> rusqlite::Result<Vec<String>> {
    serde_json::from_str(json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            rusqlite::types::Type::Text,
            Box::new(e),
        )
    })
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

    fn sample_recipe(name: &str, created_at: &str) -> Recipe {
        Recipe {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            cuisine: "italian".to_string(),
            meal_type: "main".to_string(),
            cook_time_minutes: 30,
            ingredients: vec!["1 lb spaghetti".to_string(), "2 cups kale".to_string()],
            main_ingredients: vec!["lb spaghetti".to_string(), "cups kale".to_string()],
            source: "Personal collection".to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_insert_and_get_recipe() {
        let db = create_test_db();

        let recipe = sample_recipe("Cacio e Pepe", "2026-08-01T18:00:00+00:00");
        db.insert_recipe(&recipe).unwrap();

        let loaded = db.get_recipe(&recipe.id).unwrap().unwrap();
        assert_eq!(loaded.name, "Cacio e Pepe");
        assert_eq!(loaded.cuisine, "italian");
        assert_eq!(loaded.meal_type, "main");
        assert_eq!(loaded.cook_time_minutes, 30);
        assert_eq!(loaded.ingredients, recipe.ingredients);
        assert_eq!(loaded.main_ingredients, recipe.main_ingredients);
        assert_eq!(loaded.source, "Personal collection");
        assert_eq!(loaded.created_at, recipe.created_at);
    }

    #[test]
    fn test_get_recipe_missing() {
        let db = create_test_db();
        assert!(db.get_recipe("no-such-id").unwrap().is_none());
    }

    #[test]
    fn test_get_all_recipes_newest_first() {
        let db = create_test_db();

        db.insert_recipe(&sample_recipe("Oldest", "2026-08-01T08:00:00+00:00")).unwrap();
        db.insert_recipe(&sample_recipe("Newest", "2026-08-03T08:00:00+00:00")).unwrap();
        db.insert_recipe(&sample_recipe("Middle", "2026-08-02T08:00:00+00:00")).unwrap();

        let names: Vec<String> = db.get_all_recipes().unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
    }

    #[test]
    fn test_count_recipes() {
        let db = create_test_db();
        assert_eq!(db.count_recipes().unwrap(), 0);

        db.insert_recipe(&sample_recipe("One", "2026-08-01T08:00:00+00:00")).unwrap();
        db.insert_recipe(&sample_recipe("Two", "2026-08-02T08:00:00+00:00")).unwrap();
        assert_eq!(db.count_recipes().unwrap(), 2);
    }

    #[test]
    fn test_distinct_values_sorted_and_deduplicated() {
        let db = create_test_db();

        let mut soup = sample_recipe("Minestrone", "2026-08-01T08:00:00+00:00");
        soup.meal_type = "soup".to_string();
        db.insert_recipe(&soup).unwrap();

        let mut dal = sample_recipe("Dal", "2026-08-02T08:00:00+00:00");
        dal.cuisine = "indian".to_string();
        db.insert_recipe(&dal).unwrap();

        db.insert_recipe(&sample_recipe("Carbonara", "2026-08-03T08:00:00+00:00")).unwrap();

        assert_eq!(db.distinct_cuisines().unwrap(), vec!["indian", "italian"]);
        assert_eq!(db.distinct_meal_types().unwrap(), vec!["main", "soup"]);
    }
}
