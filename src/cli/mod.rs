// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, hands off to Layer 2 and prints
// the results. All pipeline logic lives in the application
// layer; this layer only routes and formats.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, SampleArgs, ShowArgs, StrataArgs};

use crate::application::strata_use_case::StrataOverview;
use crate::domain::stratum::{SampleManifest, StratumSummary};

/// Widest histogram bar, in characters
const BAR_WIDTH: usize = 50;

#[derive(Parser, Debug)]
#[command(
    name = "ingredient-sampler",
    version,
    about = "Build a word-count stratified validation sample of recipe ingredients."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Sample(args) => run_sample(args),
            Commands::Strata(args) => run_strata(args),
            Commands::Show(args)   => run_show(args),
        }
    }
}

fn run_sample(args: SampleArgs) -> Result<()> {
    use crate::application::sample_use_case::{SampleConfig, SampleUseCase};

    let config: SampleConfig = args.into();
    let output  = config.output_path();
    let outcome = SampleUseCase::new(config).execute()?;

    println!(
        "Sampled {} of {} distinct ingredients ({} strata) from {} recipes.",
        outcome.sample.len(),
        outcome.population,
        outcome.strata.len(),
        outcome.recipes
    );
    println!("Saved to {}", output.display());
    Ok(())
}

fn run_strata(args: StrataArgs) -> Result<()> {
    use crate::application::strata_use_case::{StrataConfig, StrataUseCase};

    let overview = StrataUseCase::new(StrataConfig {
        input:    args.base_dir.join(&args.input),
        fraction: args.fraction,
        longest:  args.longest,
    })
    .execute()?;

    print!("{}", render_overview(&overview, args.fraction));
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<()> {
    use crate::infra::sample_store::SampleStore;

    let store    = SampleStore::new(args.base_dir.join(&args.output));
    let sample   = store.load_sample()?;
    let manifest = store.load_manifest()?;

    print!("{}", render_sample(&sample, manifest.as_ref()));
    tracing::info!("{} ingredients in sample", sample.len());
    Ok(())
}

/// Text for the `show` command: how the sample was drawn, if the
/// manifest is present, then one ingredient per line
fn render_sample(sample: &[String], manifest: Option<&SampleManifest>) -> String {
    let mut out = String::new();
    if let Some(m) = manifest {
        out.push_str(&format!(
            "# {} of {} distinct ingredients from {} ({:.1}% per stratum, seed {})\n",
            m.sampled,
            m.population,
            m.input,
            m.fraction * 100.0,
            m.seed
        ));
    }
    for ingredient in sample {
        out.push_str(ingredient);
        out.push('\n');
    }
    out
}

/// Text report for the `strata` command
fn render_overview(o: &StrataOverview, fraction: f64) -> String {
    let mut out = format!(
        "{} recipes, {} distinct ingredients, {} strata\n\n",
        o.recipes,
        o.population,
        o.strata.len()
    );

    out.push_str(&format!(
        "{:>5}  {:>10}  {:>7}  {:>9}\n",
        "words", "population", "share", "sample"
    ));
    let widest = o.strata.iter().map(|s| s.population).max().unwrap_or(0);
    for s in &o.strata {
        out.push_str(&format!(
            "{:>5}  {:>10}  {:>6.1}%  {:>9}  {}\n",
            s.word_count,
            s.population,
            s.share_of(o.population) * 100.0,
            s.allocation,
            bar(s, widest)
        ));
    }
    out.push_str(&format!(
        "\nExpected sample at {:.1}%: {} ingredients\n",
        fraction * 100.0,
        o.expected_sample_size()
    ));

    if !o.longest.is_empty() {
        out.push_str("\nLongest ingredients:\n");
        for (ingredient, words) in &o.longest {
            out.push_str(&format!("{words:>5}  {ingredient}\n"));
        }
    }
    out
}

/// Histogram bar scaled against the largest stratum
fn bar(s: &StratumSummary, widest: usize) -> String {
    if widest == 0 {
        return String::new();
    }
    let len = (s.population * BAR_WIDTH).div_ceil(widest);
    "#".repeat(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_widest() {
        assert_eq!(bar(&StratumSummary::new(2, 100, 2), 100).len(), BAR_WIDTH);
        assert_eq!(bar(&StratumSummary::new(1, 1, 0), 100).len(), 1);
        assert_eq!(bar(&StratumSummary::new(1, 0, 0), 0), "");
    }

    #[test]
    fn test_render_overview() {
        let o = StrataOverview {
            recipes:    2,
            population: 50,
            strata:     vec![StratumSummary::new(1, 10, 0), StratumSummary::new(2, 40, 1)],
            longest:    vec![("black pepper".into(), 2)],
        };
        let text = render_overview(&o, 0.025);
        assert!(text.starts_with("2 recipes, 50 distinct ingredients, 2 strata"));
        assert!(text.contains("Expected sample at 2.5%: 1 ingredients"));
        assert!(text.contains("    2  black pepper"));
    }

    #[test]
    fn test_render_sample_without_manifest() {
        let sample = vec!["salt".to_string(), "black pepper".to_string()];
        assert_eq!(render_sample(&sample, None), "salt\nblack pepper\n");
        assert_eq!(render_sample(&[], None), "");
    }

    #[test]
    fn test_render_sample_with_manifest() {
        let manifest = SampleManifest {
            input:      "./recipes.json".into(),
            fraction:   0.025,
            seed:       1,
            recipes:    12,
            population: 40,
            sampled:    1,
            strata:     vec![StratumSummary::new(2, 40, 1)],
        };
        let text = render_sample(&["olive oil".to_string()], Some(&manifest));
        assert_eq!(
            text,
            "# 1 of 40 distinct ingredients from ./recipes.json (2.5% per stratum, seed 1)\n\
             olive oil\n"
        );
    }
}
