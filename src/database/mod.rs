// Database module for Recipe-Local
// Provides SQLite persistence for the recipe collection and client-local state

pub mod manager;
pub mod migrations;
pub mod models;
pub mod recipes_repo;
pub mod settings_repo;

pub use manager::DatabaseManager;
pub use models::*;
