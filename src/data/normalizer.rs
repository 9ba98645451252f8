// ============================================================
// Layer 4 — Ingredient Normalizer
// ============================================================
// Turns raw ingredient lines into the de-duplicated working set.
//
// Cleaning steps (applied in order):
//   1. Keep only characters with code point < 126. This drops
//      every non-ASCII character plus `~` and DEL.
//   2. Lower-case what is left (plain ASCII, no locale rules).
//
// The set is a BTreeSet so later stages see the ingredients in
// a stable order; HashSet iteration order would make the seeded
// draw depend on the hasher.
//
// Lines that are empty or whitespace-only after cleaning are
// dropped, so every ingredient in the set has at least one word.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

use std::collections::BTreeSet;

use crate::domain::recipe::Recipe;

/// Characters at or above this code point are removed
const MAX_CODE_POINT: u32 = 126;

pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Clean a single raw ingredient line.
    /// Idempotent: normalize(normalize(s)) == normalize(s).
    pub fn normalize(&self, raw: &str) -> String {
        raw.chars()
            .filter(|c| (*c as u32) < MAX_CODE_POINT)
            .collect::<String>()
            .to_lowercase()
    }

    /// Flatten every recipe's ingredients into one cleaned, unique set.
    pub fn normalize_all<'a, I>(&self, recipes: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        let mut set   = BTreeSet::new();
        let mut raw   = 0usize;
        let mut blank = 0usize;

        for line in recipes.into_iter().flat_map(|r| r.ingredients.iter()) {
            raw += 1;
            let clean = self.normalize(line);
            if clean.trim().is_empty() {
                blank += 1;
                continue;
            }
            set.insert(clean);
        }

        tracing::debug!(
            "Normalized {} ingredient lines into {} distinct ingredients ({} blank dropped)",
            raw,
            set.len(),
            blank
        );
        set
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
