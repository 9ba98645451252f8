// ============================================================
// Layer 2 — StrataUseCase
// ============================================================
// Exploratory view of a dataset before sampling it:
//   - how many distinct ingredients fall in each word count
//   - how many each stratum would contribute at a given rate
//   - which ingredients are the longest
//
// Nothing is written; the CLI layer prints the overview.

use std::path::PathBuf;

use anyhow::Result;

use crate::data::{
    features::word_count,
    loader::JsonRecipeLoader,
    normalizer::Normalizer,
    sampler::{Strata, StratifiedSampler},
};
use crate::domain::{stratum::StratumSummary, traits::RecipeSource};

#[derive(Debug, Clone)]
pub struct StrataConfig {
    pub input:    PathBuf,
    pub fraction: f64,
    /// How many of the longest ingredients to list
    pub longest:  usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrataOverview {
    pub recipes:    usize,
    pub population: usize,
    pub strata:     Vec<StratumSummary>,
    /// (ingredient, word count), longest first
    pub longest:    Vec<(String, usize)>,
}

impl StrataOverview {
    /// Total items a sample at the configured rate would hold
    pub fn expected_sample_size(&self) -> usize {
        self.strata.iter().map(|s| s.allocation).sum()
    }
}

pub struct StrataUseCase {
    config: StrataConfig,
}

impl StrataUseCase {
    pub fn new(config: StrataConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<StrataOverview> {
        self.run(&JsonRecipeLoader::new(&self.config.input))
    }

    pub fn run(&self, source: &dyn RecipeSource) -> Result<StrataOverview> {
        let sampler     = StratifiedSampler::new(self.config.fraction, 0)?;
        let recipes     = source.load_all()?;
        let ingredients = Normalizer::new().normalize_all(&recipes);
        let strata      = Strata::build(&ingredients);

        // Longest first; ties alphabetical so the listing is stable
        let mut longest: Vec<(String, usize)> = ingredients
            .iter()
            .map(|i| (i.clone(), word_count(i)))
            .collect();
        longest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        longest.truncate(self.config.longest);

        Ok(StrataOverview {
            recipes:    recipes.len(),
            population: ingredients.len(),
            strata:     strata.summaries(&sampler),
            longest,
        })
    }
}
