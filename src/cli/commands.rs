// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands:
//   sample: build and save the validation sample
//   strata: print the word-count distribution of a dataset
//   show:   print a previously saved sample
//
// Defaults: 2.5% of every stratum,
// seed 1, recipes.json in, validation_set.json out.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::sample_use_case::SampleConfig;
use crate::data::sampler::{DEFAULT_FRACTION, DEFAULT_SEED};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw a word-count stratified sample of ingredients and save it
    Sample(SampleArgs),

    /// Show how ingredients spread across word counts
    Strata(StrataArgs),

    /// Print a saved validation sample
    Show(ShowArgs),
}

/// Arguments for the `sample` command.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Directory that input and output paths are resolved against
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    /// Recipe JSON file: an array of records with an `ingredients` list
    #[arg(long, default_value = "recipes.json")]
    pub input: PathBuf,

    /// Where the sample is written (overwritten if present)
    #[arg(long, default_value = "validation_set.json")]
    pub output: PathBuf,

    /// Share of every stratum to draw, in (0, 1]
    #[arg(long, default_value_t = DEFAULT_FRACTION)]
    pub fraction: f64,

    /// Seed for the per-stratum draws
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Also write the per-stratum breakdown as CSV to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Skip writing <output stem>.manifest.json
    #[arg(long)]
    pub no_manifest: bool,
}

/// Convert CLI SampleArgs into the application-layer SampleConfig.
/// The application layer never sees clap types.
impl From<SampleArgs> for SampleConfig {
    fn from(a: SampleArgs) -> Self {
        SampleConfig {
            base_dir:       a.base_dir,
            input:          a.input,
            output:         a.output,
            fraction:       a.fraction,
            seed:           a.seed,
            report:         a.report,
            write_manifest: !a.no_manifest,
        }
    }
}

/// Arguments for the `strata` command.
#[derive(Args, Debug)]
pub struct StrataArgs {
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    #[arg(long, default_value = "recipes.json")]
    pub input: PathBuf,

    /// Rate used to compute each stratum's allocation
    #[arg(long, default_value_t = DEFAULT_FRACTION)]
    pub fraction: f64,

    /// Number of longest ingredients to list
    #[arg(long, default_value_t = 10)]
    pub longest: usize,
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    #[arg(long, default_value = "validation_set.json")]
    pub output: PathBuf,
}
