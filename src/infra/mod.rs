// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Everything that touches the filesystem on the output side:
//
//   sample_store.rs:  Writes the validation sample as a JSON
//                     array plus a manifest recording the
//                     fraction, seed and per-stratum counts.
//                     Also reads them back for `show`.
//
//   strata_report.rs: CSV rendering of the per-stratum
//                     population and allocation.
//
//   staging.rs:       All-or-nothing batch of output files.
//
// Paths arrive already resolved against the configured base
// directory; nothing here changes the working directory.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// Validation sample and manifest persistence
pub mod sample_store;

/// Per-stratum CSV rendering
pub mod strata_report;

/// Temp-file-then-rename output batch
pub mod staging;
