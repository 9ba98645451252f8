// ============================================================
// Layer 4 — Stratified Sampler
// ============================================================
// Draws a proportional stratified sample from the normalized
// ingredient set, keyed on word count.
//
//   distinct ingredients
//       │
//       ▼
//   Strata::build      → BTreeMap<word_count, sorted members>
//       │
//       ▼
//   for each stratum, ascending by word count:
//       k = round_half_to_even(fraction × n)
//       reseed StdRng from `seed`, draw k members without replacement
//       │
//       ▼
//   concatenated sample
//
// Rounding: half-to-even. At 2.5% a stratum of 40 gives 1,
// a stratum of 20 gives 0 (0.5 → 0) and 60 gives 2 (1.5 → 2).
// Strata smaller than 20 therefore contribute nothing.
//
// Every stratum draw starts from the same seed, so the picks in
// one stratum do not shift when another stratum grows or shrinks.
// Same seed + same set + same rand version ⇒ same sample.
//
// Reference: rand crate documentation (SeedableRng, SliceRandom)

use std::collections::{BTreeMap, BTreeSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::data::features::word_count;
use crate::domain::error::SampleError;
use crate::domain::stratum::StratumSummary;

/// Default sampling rate: 2.5% of every stratum
pub const DEFAULT_FRACTION: f64 = 0.025;

/// Default seed for the per-stratum draws
pub const DEFAULT_SEED: u64 = 1;

// ─── Strata ───────────────────────────────────────────────────────────────────
/// Partition of the ingredient set by word count.
/// Every ingredient lands in exactly one stratum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Strata {
    groups: BTreeMap<usize, Vec<String>>,
}

impl Strata {
    /// Group every ingredient under its word count.
    /// Members keep the set's sorted order.
    pub fn build(ingredients: &BTreeSet<String>) -> Self {
        let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for ingredient in ingredients {
            groups
                .entry(word_count(ingredient))
                .or_default()
                .push(ingredient.clone());
        }
        Self { groups }
    }

    /// Number of distinct strata
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of ingredients across all strata
    pub fn population(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// (word_count, members) pairs in ascending word-count order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.groups.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Population and allocation of every stratum under `sampler`
    pub fn summaries(&self, sampler: &StratifiedSampler) -> Vec<StratumSummary> {
        self.iter()
            .map(|(key, members)| {
                StratumSummary::new(key, members.len(), sampler.allocation(members.len()))
            })
            .collect()
    }
}

// ─── StratifiedSampler ────────────────────────────────────────────────────────
/// Proportional-allocation sampler with a fixed seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StratifiedSampler {
    fraction: f64,
    seed:     u64,
}

impl StratifiedSampler {
    /// Create a sampler. Fails if `fraction` is not in (0, 1].
    pub fn new(fraction: f64, seed: u64) -> Result<Self, SampleError> {
        // Written so NaN fails too
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(SampleError::InvalidSamplingRate(fraction));
        }
        Ok(Self { fraction, seed })
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// How many items a stratum of `population` contributes.
    /// round_half_to_even(fraction × population), never above population.
    pub fn allocation(&self, population: usize) -> usize {
        let k = (self.fraction * population as f64).round_ties_even() as usize;
        k.min(population)
    }

    /// Draw this stratum's allocation without replacement.
    /// An empty stratum or a zero allocation yields nothing.
    pub fn draw(&self, members: &[String]) -> Vec<String> {
        let k = self.allocation(members.len());
        if k == 0 {
            return Vec::new();
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        members.choose_multiple(&mut rng, k).cloned().collect()
    }

    /// Sample every stratum and concatenate the draws,
    /// ascending by word count.
    pub fn sample(&self, strata: &Strata) -> Vec<String> {
        if strata.is_empty() {
            tracing::warn!("No ingredients to sample, returning an empty sample");
            return Vec::new();
        }

        let mut sample = Vec::new();
        for (key, members) in strata.iter() {
            let drawn = self.draw(members);
            tracing::debug!(
                "Stratum {:>2} words: drew {} of {}",
                key,
                drawn.len(),
                members.len()
            );
            sample.extend(drawn);
        }

        tracing::info!(
            "Sampled {} of {} ingredients across {} strata ({:.1}% rate, seed {})",
            sample.len(),
            strata.population(),
            strata.len(),
            self.fraction * 100.0,
            self.seed
        );
        sample
    }
}

impl Default for StratifiedSampler {
    fn default() -> Self {
        Self { fraction: DEFAULT_FRACTION, seed: DEFAULT_SEED }
    }
}
