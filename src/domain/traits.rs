// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to loaders and writers only
// through these traits:
//   - JsonRecipeLoader implements RecipeSource
//   - SampleStore      implements SampleSink
//
// Tests swap in in-memory implementations without touching
// the use cases.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::SampleError;
use crate::domain::recipe::Recipe;
use crate::domain::stratum::SampleManifest;

// ─── RecipeSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the full list of recipes.
pub trait RecipeSource {
    /// Load every recipe. Fails fast on unreadable or malformed input.
    fn load_all(&self) -> Result<Vec<Recipe>, SampleError>;
}

// ─── SampleSink ───────────────────────────────────────────────────────────────
/// Any component that can persist a finished validation sample.
pub trait SampleSink {
    /// Persist the sample together with the parameters of the run
    /// that produced it, replacing anything previously stored.
    /// On error nothing new is left behind.
    fn save(&self, sample: &[String], manifest: &SampleManifest) -> Result<(), SampleError>;
}
