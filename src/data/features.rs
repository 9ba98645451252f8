// ============================================================
// Layer 4 — Feature Extractor
// ============================================================
// The stratum key of an ingredient is its word count: the
// number of whitespace-delimited tokens.
//
//   "salt"                   → 1
//   "black pepper"           → 2
//   "extra  virgin olive oil" → 4  (runs of spaces count once)
//   ""  or  "   "            → 0
//
// Reference: Rust Book §8 (Strings), str::split_whitespace

/// Number of whitespace-delimited tokens in `ingredient`.
/// Blank input yields 0.
pub fn word_count(ingredient: &str) -> usize {
    ingredient.split_whitespace().count()
}
