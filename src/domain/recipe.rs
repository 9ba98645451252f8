// ============================================================
// Layer 3 — Recipe Domain Type
// ============================================================
// A single record from the recipe dataset. Only the ordered
// ingredient list matters to the sampler; every other field
// in the source record (name, url, steps, ...) is ignored by
// serde because the struct does not name it.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// A recipe as loaded from disk. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Raw ingredient strings, verbatim and in recipe order
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Create a recipe from anything that yields string-like items.
    /// Production code only ever deserializes recipes.
    ///
    /// Example:
    ///   let r = Recipe::new(["1 cup Flour", "Salt"]);
    #[cfg(test)]
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of raw ingredient lines in this recipe
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }
}
