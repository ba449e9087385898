// Settings repository for Recipe-Local
// Key-value store for client-local state, such as the last picked recipe

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::DatabaseManager;

/// Settings key holding the id of the most recently picked recipe
const LAST_SELECTED_KEY: &str = "last_selected_recipe_id";

impl DatabaseManager {
    /// Get a single setting by key
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.with_connection(|conn| {
            get_setting_impl(conn, key)
        })
    }

    /// Set a single setting
    pub fn set_setting(&self, key: &str, value: &str, value_type: &str) -> Result<()> {
        self.with_connection(|conn| {
            set_setting_impl(conn, key, value, value_type)
        })
    }

    /// Delete a setting by key
    pub fn delete_setting(&self, key: &str) -> Result<()> {
        self.with_connection(|conn| {
            delete_setting_impl(conn, key)
        })
    }

    /// Id of the most recently picked recipe, if any
    pub fn last_selected_recipe_id(&self) -> Result<Option<String>> {
        self.get_setting(LAST_SELECTED_KEY)
    }

    /// Remember the most recently picked recipe
    pub fn set_last_selected_recipe_id(&self, id: &str) -> Result<()> {
        self.set_setting(LAST_SELECTED_KEY, id, "string")
    }
}

fn get_setting_impl(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare(
        "SELECT value FROM settings WHERE key = ?"
    ).context("Failed to prepare get_setting query")?;

    let result = stmt.query_row(params![key], |row| row.get(0));

    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e).context("Failed to get setting"),
    }
}

fn set_setting_impl(conn: &Connection, key: &str, value: &str, value_type: &str) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO settings (key, value, value_type, updated_at)
        VALUES (?1, ?2, ?3, datetime('now'))
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            value_type = excluded.value_type,
            updated_at = datetime('now')
        "#,
        params![key, value, value_type],
    ).context("Failed to set setting")?;

    Ok(())
}

fn delete_setting_impl(conn: &Connection, key: &str) -> Result<()> {
    conn.execute(
        "DELETE FROM settings WHERE key = ?",
        params![key],
    ).context("Failed to delete setting")?;

    Ok(())
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

    #[test]
    fn test_set_and_get_setting() {
        let db = create_test_db();

        db.set_setting("test_key", "test_value", "string").unwrap();
        let value = db.get_setting("test_key").unwrap();
        assert_eq!(value, Some("test_value".to_string()));
    }

    #[test]
    fn test_set_setting_overwrites() {
        let db = create_test_db();

        db.set_setting("test_key", "first", "string").unwrap();
        db.set_setting("test_key", "second", "string").unwrap();
        assert_eq!(db.get_setting("test_key").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_delete_setting() {
        let db = create_test_db();

        db.set_setting("test_key", "test_value", "string").unwrap();
        db.delete_setting("test_key").unwrap();
        assert_eq!(db.get_setting("test_key").unwrap(), None);
    }

    #[test]
    fn test_last_selected_recipe_id_roundtrip() {
        let db = create_test_db();

        assert_eq!(db.last_selected_recipe_id().unwrap(), None);

        db.set_last_selected_recipe_id("recipe-123").unwrap();
        assert_eq!(
            db.last_selected_recipe_id().unwrap(),
            Some("recipe-123".to_string())
        );

        db.set_last_selected_recipe_id("recipe-456").unwrap();
        assert_eq!(
            db.last_selected_recipe_id().unwrap(),
            Some("recipe-456".to_string())
        );
    }
}
