// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the raw recipe file to the finished sample.
//
// The pipeline flows in this order:
//
//   recipes.json
//       │
//       ▼
//   JsonRecipeLoader  → reads records, keeps each ingredient list
//       │
//       ▼
//   Normalizer        → strips code points ≥ 126, lower-cases, dedupes
//       │
//       ▼
//   word_count        → stratum key of every distinct ingredient
//       │
//       ▼
//   Strata            → partition of the set by word count
//       │
//       ▼
//   StratifiedSampler → seeded proportional draw per stratum
//
// Each module is responsible for exactly one step and is
// tested on its own.

/// Loads the recipe dataset from JSON
pub mod loader;

/// Cleans and de-duplicates ingredient strings
pub mod normalizer;

/// Word-count stratum key
pub mod features;

/// Strata partition and the seeded proportional sampler
pub mod sampler;
