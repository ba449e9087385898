// Picker module for Recipe-Local
// The core logic: filtering, random selection without immediate repeats,
// add-recipe validation, and the shareable shopping-list text

pub mod filter;
pub mod selector;
pub mod share;
pub mod validate;

pub use filter::{filter_recipes, FilterCriteria};
pub use selector::{pick_recipe, pick_recipe_with_rng, EmptySelection};
pub use share::share_text;
pub use validate::{validate_draft, ValidationError};
