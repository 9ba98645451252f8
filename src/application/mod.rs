// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data and infra layers for each command.
//
// Rules for this layer:
//   - No sampling math here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination and path resolution
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Build and persist a validation sample
pub mod sample_use_case;

// Inspect the word-count strata of a dataset without sampling
pub mod strata_use_case;
