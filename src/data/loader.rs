// ============================================================
// Layer 4 — Recipe Loader
// ============================================================
// Loads the recipe dataset from a JSON file.
//
// Expected layout: a top-level array of records, each with an
// `ingredients` array of strings. Other fields are ignored.
//
//   [
//     { "name": "Pancakes", "ingredients": ["1 cup Flour", "2 Eggs"] },
//     { "name": "Brine",    "ingredients": ["Water", "Kosher salt"] }
//   ]
//
// The loader is given a path already resolved against the
// configured base directory; it never changes the process
// working directory.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json crate documentation

use std::{fs, path::PathBuf};

use crate::domain::error::SampleError;
use crate::domain::recipe::Recipe;
use crate::domain::traits::RecipeSource;

/// Loads every recipe from one JSON file.
/// Implements the RecipeSource trait from Layer 3.
pub struct JsonRecipeLoader {
    /// Full path to the recipes file
    path: PathBuf,
}

impl JsonRecipeLoader {
    /// Create a loader for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecipeSource for JsonRecipeLoader {
    fn load_all(&self) -> Result<Vec<Recipe>, SampleError> {
        let text = fs::read_to_string(&self.path).map_err(|source| {
            SampleError::InputUnreadable {
                path: self.path.clone(),
                source,
            }
        })?;

        // A missing `ingredients` field or a non-string entry surfaces
        // here with serde's line/column message.
        let recipes: Vec<Recipe> = serde_json::from_str(&text).map_err(|e| {
            SampleError::InvalidInputFormat {
                path:   self.path.clone(),
                reason: e.to_string(),
            }
        })?;

        tracing::info!(
            "Loaded {} recipes ({} ingredient lines) from '{}'",
            recipes.len(),
            recipes.iter().map(Recipe::ingredient_count).sum::<usize>(),
            self.path.display()
        );
        Ok(recipes)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_loads_recipes() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(
            &path,
            r#"[{"name": "a", "ingredients": ["Salt", "Black Pepper"]},
                {"ingredients": []}]"#,
        )
        .unwrap();

        let recipes = JsonRecipeLoader::new(&path).load_all().unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].ingredients, vec!["Salt", "Black Pepper"]);
        assert!(recipes[1].ingredients.is_empty());
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempdir().unwrap();
        let err = JsonRecipeLoader::new(dir.path().join("nope.json"))
            .load_all()
            .unwrap_err();
        assert!(matches!(err, SampleError::InputUnreadable { .. }));
    }

    #[test]
    fn test_missing_ingredients_field() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, r#"[{"name": "no ingredients here"}]"#).unwrap();

        let err = JsonRecipeLoader::new(&path).load_all().unwrap_err();
        match err {
            SampleError::InvalidInputFormat { reason, .. } => {
                assert!(reason.contains("ingredients"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_top_level_object_is_rejected() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, r#"{"ingredients": ["salt"]}"#).unwrap();

        let err = JsonRecipeLoader::new(&path).load_all().unwrap_err();
        assert!(matches!(err, SampleError::InvalidInputFormat { .. }));
    }
}
