// Database models - Re-exports all domain-specific models
//
// - recipe.rs: The recipe collection and the raw add-recipe form input

mod recipe;

pub use recipe::{Recipe, RecipeDraft};
