// Command-line interface definitions for Recipe-Local

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::database::models::RecipeDraft;
use crate::picker::FilterCriteria;

#[derive(Parser)]
#[command(
    name = "recipe-local",
    about = "Answers \"what's for dinner\" from your own recipe collection"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the recipe database (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub db_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Pick a random recipe matching the filters, avoiding an immediate repeat
    Pick {
        #[command(flatten)]
        filters: FilterArgs,

        /// Also copy the shareable shopping list to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// List recipes matching the filters, newest first
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Add a new recipe to the collection
    Add(AddArgs),

    /// Copy the shopping list of the last picked recipe to the clipboard
    Share,

    /// Show the cuisines and meal types present in the collection
    Options,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Only recipes of this cuisine (e.g. "italian")
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Only recipes of this meal type (e.g. "soup")
    #[arg(long)]
    pub meal_type: Option<String>,

    /// Only recipes that cook in at most this many minutes
    #[arg(long)]
    pub max_cook_time: Option<u32>,

    /// Only recipes with an ingredient line containing this text
    #[arg(long)]
    pub ingredient: Option<String>,
}

impl FilterArgs {
    /// Build filter criteria, lowercasing the category flags so they line
    /// up with the stored values and dropping blank ones entirely.
    pub fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            cuisine: normalized(self.cuisine),
            meal_type: normalized(self.meal_type),
            max_cook_time: self.max_cook_time,
            ingredient: self.ingredient.filter(|v| !v.trim().is_empty()),
        }
    }
}

fn normalized(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

// All add fields default to empty so missing input is reported by recipe
// validation, field by field, rather than by the argument parser.
#[derive(Args)]
pub struct AddArgs {
    /// Recipe name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Cuisine (stored lowercase, e.g. "indian")
    #[arg(long, default_value = "")]
    pub cuisine: String,

    /// Meal type (stored lowercase, e.g. "main")
    #[arg(long, default_value = "")]
    pub meal_type: String,

    /// Cook time in minutes
    #[arg(long, default_value = "")]
    pub cook_time: String,

    /// Ingredients as one newline-separated block
    #[arg(long, default_value = "")]
    pub ingredients: String,

    /// A single ingredient line; repeat the flag for more
    #[arg(long = "ingredient", value_name = "LINE")]
    pub ingredient_lines: Vec<String>,

    /// Where the recipe came from
    #[arg(long, default_value = "")]
    pub source: String,
}

impl AddArgs {
    /// Assemble the raw form input, merging the block and repeated-flag
    /// styles of entering ingredients.
    pub fn into_draft(self) -> RecipeDraft {
        let mut ingredients = self.ingredients;
        for line in self.ingredient_lines {
            if !ingredients.is_empty() {
                ingredients.push('\n');
            }
            ingredients.push_str(&line);
        }

        RecipeDraft {
            name: self.name,
            cuisine: self.cuisine,
            meal_type: self.meal_type,
            cook_time: self.cook_time,
            ingredients,
            source: self.source,
        }
    }
}
