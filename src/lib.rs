// Recipe-Local - a local recipe picker that answers "what's for dinner"
//
// The app stores a personal recipe collection in SQLite, filters it by
// cuisine, meal type, cook time, and ingredient text, and picks one recipe
// at random without repeating the previous pick. The shopping list of a
// pick can be copied to the clipboard for sharing.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod database;
pub mod error;
pub mod picker;
