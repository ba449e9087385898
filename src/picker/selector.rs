// Random recipe selection for Recipe-Local

use rand::Rng;
use thiserror::Error;

use crate::database::models::Recipe;

/// No candidates remain after filtering; nothing can be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no recipes match the current filters")]
pub struct EmptySelection;

/// Pick one recipe uniformly at random, avoiding an immediate repeat.
///
/// The candidate whose id equals `last_selected` is excluded from the draw;
/// if that exclusion would leave nothing (the list is a singleton, or the
/// previous pick covers it entirely), the draw falls back to the full
/// candidate list. The fallback pool is always the same filtered candidate
/// list, never the whole collection.
///
/// Remembering the choice is the caller's job, not this function's.
pub fn pick_recipe<'a>(
    candidates: &[&'a Recipe],
    last_selected: Option<&str>,
) -> Result<&'a Recipe, EmptySelection> {
    pick_recipe_with_rng(candidates, last_selected, &mut rand::thread_rng())
}

/// Like [`pick_recipe`], with a caller-provided randomness source so tests
/// can drive a seeded generator.
pub fn pick_recipe_with_rng<'a, R: Rng>(
    candidates: &[&'a Recipe],
    last_selected: Option<&str>,
    rng: &mut R,
) -> Result<&'a Recipe, EmptySelection> {
    if candidates.is_empty() {
        return Err(EmptySelection);
    }

    let eligible: Vec<&'a Recipe> = match last_selected {
        Some(last) => candidates.iter().copied().filter(|r| r.id != last).collect(),
        None => candidates.to_vec(),
    };

    let pool: &[&'a Recipe] = if eligible.is_empty() {
        candidates
    } else {
        &eligible
    };

    Ok(pool[rng.gen_range(0..pool.len())])
}
