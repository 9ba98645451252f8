// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// sampler works with:
//
//   recipe.rs:  a recipe record as read from the dataset
//   stratum.rs: per-word-count summaries and the run manifest
//   traits.rs:  the seams the data and infra layers implement
//   error.rs:   the typed failure conditions of a run
//
// Rules for this layer:
//   - NO file I/O
//   - NO random number generation
//   - Only data and the contracts around it
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A recipe record and its raw ingredient strings
pub mod recipe;

// Stratum summaries and the persisted run manifest
pub mod stratum;

// Core abstractions (traits) that other layers implement
pub mod traits;

// Typed errors shared by every layer
pub mod error;
