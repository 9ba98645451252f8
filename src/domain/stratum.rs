// ============================================================
// Layer 3 — Stratum Domain Types
// ============================================================
// A stratum is the set of normalized ingredients sharing one
// word count. The sampler owns the members themselves; these
// types carry what the rest of the program needs to know about
// a stratum (how big it is, how many items it contributes)
// and the parameters of a finished run.
//
// Example for a 2.5% run:
//   word_count  population  allocation
//            1         312           8
//            2        1204          30
//            3         980          24
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// Size and proportional allocation of one word-count stratum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StratumSummary {
    /// The stratum key: whitespace-delimited token count
    pub word_count: usize,

    /// Number of distinct normalized ingredients in the stratum
    pub population: usize,

    /// Number of those ingredients the sampler draws
    pub allocation: usize,
}

impl StratumSummary {
    pub fn new(word_count: usize, population: usize, allocation: usize) -> Self {
        Self { word_count, population, allocation }
    }

    /// Share of the whole working set held by this stratum, in [0, 1]
    pub fn share_of(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.population as f64 / total as f64
    }
}

/// Parameters and counts of a sampling run, saved next to the
/// sample so a reviewer can reproduce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleManifest {
    /// Input file the recipes were read from
    pub input: String,

    /// Sampling rate in (0, 1]
    pub fraction: f64,

    /// Seed the per-stratum draws were made with
    pub seed: u64,

    /// Recipes read from the input
    pub recipes: usize,

    /// Distinct normalized ingredients (the population)
    pub population: usize,

    /// Items in the persisted sample
    pub sampled: usize,

    /// Per-stratum breakdown, ascending by word count
    pub strata: Vec<StratumSummary>,
}
