// ============================================================
// Layer 2 — SampleUseCase
// ============================================================
// Runs the full sampling pipeline in order:
//
//   Step 1: Validate fraction and seed    (Layer 4 - data)
//   Step 2: Load recipes                  (Layer 4 - data)
//   Step 3: Normalize and de-duplicate    (Layer 4 - data)
//   Step 4: Partition by word count       (Layer 4 - data)
//   Step 5: Draw the stratified sample    (Layer 4 - data)
//   Step 6: Save sample, manifest and CSV (Layer 5 - infra)
//
// Any error aborts the run. Parameter errors surface before
// the input is read. Output errors surface after sampling; the
// computed sample is discarded and no output file is changed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::JsonRecipeLoader,
    normalizer::Normalizer,
    sampler::{Strata, StratifiedSampler, DEFAULT_FRACTION, DEFAULT_SEED},
};
use crate::domain::{
    stratum::{SampleManifest, StratumSummary},
    traits::{RecipeSource, SampleSink},
};
use crate::infra::sample_store::SampleStore;

// ─── Sample Configuration ────────────────────────────────────────────────────
// Every path is relative to `base_dir` unless it is absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    pub base_dir:       PathBuf,
    pub input:          PathBuf,
    pub output:         PathBuf,
    pub fraction:       f64,
    pub seed:           u64,
    pub report:         Option<PathBuf>,
    pub write_manifest: bool,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            base_dir:       PathBuf::from("."),
            input:          PathBuf::from("recipes.json"),
            output:         PathBuf::from("validation_set.json"),
            fraction:       DEFAULT_FRACTION,
            seed:           DEFAULT_SEED,
            report:         None,
            write_manifest: true,
        }
    }
}

impl SampleConfig {
    /// Resolve `path` against the base directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }

    pub fn input_path(&self) -> PathBuf {
        self.resolve(&self.input)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output)
    }
}

/// What a finished run produced
#[derive(Debug, Clone, PartialEq)]
pub struct SampleOutcome {
    pub sample:     Vec<String>,
    pub recipes:    usize,
    pub population: usize,
    pub strata:     Vec<StratumSummary>,
}

// ─── SampleUseCase ────────────────────────────────────────────────────────────
pub struct SampleUseCase {
    config: SampleConfig,
}

impl SampleUseCase {
    pub fn new(config: SampleConfig) -> Self {
        Self { config }
    }

    /// Run against the JSON input and the on-disk store named by the config
    pub fn execute(&self) -> Result<SampleOutcome> {
        let loader = JsonRecipeLoader::new(self.config.input_path());
        let store  = SampleStore::new(self.config.output_path())
            .with_manifest(self.config.write_manifest)
            .with_report(self.config.report.as_deref().map(|r| self.config.resolve(r)));
        self.run(&loader, &store)
    }

    /// Run against any recipe source and sample sink
    pub fn run(&self, source: &dyn RecipeSource, sink: &dyn SampleSink) -> Result<SampleOutcome> {
        let cfg = &self.config;

        // ── Step 1: Reject a bad rate before touching the input ──────────────
        let sampler = StratifiedSampler::new(cfg.fraction, cfg.seed)?;

        // ── Step 2: Load ──────────────────────────────────────────────────────
        let recipes = source.load_all()?;

        // ── Step 3: Normalize ─────────────────────────────────────────────────
        let ingredients = Normalizer::new().normalize_all(&recipes);
        tracing::info!(
            "{} distinct ingredients after normalization",
            ingredients.len()
        );

        // ── Step 4: Partition ─────────────────────────────────────────────────
        let strata    = Strata::build(&ingredients);
        let summaries = strata.summaries(&sampler);

        // ── Step 5: Sample ────────────────────────────────────────────────────
        let sample = sampler.sample(&strata);

        // ── Step 6: Persist ───────────────────────────────────────────────────
        // All files are staged first; nothing is renamed into place
        // unless every one of them could be written.
        let manifest = SampleManifest {
            input:      cfg.input_path().display().to_string(),
            fraction:   sampler.fraction(),
            seed:       sampler.seed(),
            recipes:    recipes.len(),
            population: ingredients.len(),
            sampled:    sample.len(),
            strata:     summaries.clone(),
        };
        sink.save(&sample, &manifest)
            .context("Sample computed but could not be saved")?;

        Ok(SampleOutcome {
            sample,
            recipes:    recipes.len(),
            population: ingredients.len(),
            strata:     summaries,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;

    use crate::domain::{error::SampleError, recipe::Recipe};
    use tempfile::tempdir;

    struct InMemorySource(Vec<Recipe>);

    impl RecipeSource for InMemorySource {
        fn load_all(&self) -> Result<Vec<Recipe>, SampleError> {
            Ok(self.0.clone())
        }
    }

    /// Source that must never be reached
    struct PanickingSource;

    impl RecipeSource for PanickingSource {
        fn load_all(&self) -> Result<Vec<Recipe>, SampleError> {
            panic!("input read before the sampling rate was validated");
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        saved: RefCell<Option<(Vec<String>, SampleManifest)>>,
    }

    impl RecordingSink {
        fn sample(&self) -> Option<Vec<String>> {
            self.saved.borrow().as_ref().map(|(s, _)| s.clone())
        }

        fn manifest(&self) -> Option<SampleManifest> {
            self.saved.borrow().as_ref().map(|(_, m)| m.clone())
        }
    }

    impl SampleSink for RecordingSink {
        fn save(&self, sample: &[String], manifest: &SampleManifest) -> Result<(), SampleError> {
            *self.saved.borrow_mut() = Some((sample.to_vec(), manifest.clone()));
            Ok(())
        }
    }

    fn config(fraction: f64) -> SampleConfig {
        SampleConfig { fraction, ..SampleConfig::default() }
    }

    #[test]
    fn test_full_rate_keeps_every_distinct_ingredient() {
        let source = InMemorySource(vec![
            Recipe::new(["Salt", "Black Pepper"]),
            Recipe::new(["salt", "Extra Virgin Olive Oil"]),
        ]);
        let sink    = RecordingSink::default();
        let outcome = SampleUseCase::new(config(1.0)).run(&source, &sink).unwrap();

        let mut sample = outcome.sample.clone();
        sample.sort();
        assert_eq!(sample, vec!["black pepper", "extra virgin olive oil", "salt"]);
        assert_eq!(outcome.recipes, 2);
        assert_eq!(outcome.population, 3);
        assert_eq!(sink.sample(), Some(outcome.sample.clone()));

        let manifest = sink.manifest().unwrap();
        assert_eq!(manifest.sampled, 3);
        assert_eq!(manifest.seed, 1);
        assert_eq!(manifest.strata.len(), 3);
    }

    #[test]
    fn test_bad_rate_fails_before_loading() {
        let sink = RecordingSink::default();
        let err  = SampleUseCase::new(config(1.5))
            .run(&PanickingSource, &sink)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SampleError>(),
            Some(SampleError::InvalidSamplingRate(_))
        ));
        assert!(sink.sample().is_none());
    }

    #[test]
    fn test_empty_dataset_saves_empty_sample() {
        let sink    = RecordingSink::default();
        let outcome = SampleUseCase::new(SampleConfig::default())
            .run(&InMemorySource(Vec::new()), &sink)
            .unwrap();
        assert!(outcome.sample.is_empty());
        assert_eq!(sink.sample(), Some(Vec::new()));
    }

    #[test]
    fn test_execute_end_to_end_on_disk() {
        let dir = tempdir().unwrap();
        let ingredients: Vec<String> = (0..40).map(|i| format!("spice{i} blend")).collect();
        let recipes = serde_json::json!([
            { "name": "a", "ingredients": ingredients[..20].to_vec() },
            { "name": "b", "ingredients": ingredients[20..].to_vec() },
        ]);
        fs::write(dir.path().join("recipes.json"), recipes.to_string()).unwrap();

        let cfg = SampleConfig {
            base_dir: dir.path().to_path_buf(),
            report:   Some(PathBuf::from("strata.csv")),
            ..SampleConfig::default()
        };
        let first  = SampleUseCase::new(cfg.clone()).execute().unwrap();
        let second = SampleUseCase::new(cfg).execute().unwrap();

        assert_eq!(first.sample.len(), 1);
        assert_eq!(first.sample, second.sample);

        let store = SampleStore::new(dir.path().join("validation_set.json"));
        assert_eq!(store.load_sample().unwrap(), first.sample);
        assert_eq!(store.load_manifest().unwrap().unwrap().population, 40);

        let csv = fs::read_to_string(dir.path().join("strata.csv")).unwrap();
        assert!(csv.contains("2,40,1.000000,1"));
    }

    #[test]
    fn test_malformed_input_writes_nothing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("recipes.json"), r#"[{"title": "no list"}]"#).unwrap();

        let cfg = SampleConfig { base_dir: dir.path().to_path_buf(), ..SampleConfig::default() };
        let err = SampleUseCase::new(cfg).execute().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SampleError>(),
            Some(SampleError::InvalidInputFormat { .. })
        ));
        assert!(!dir.path().join("validation_set.json").exists());
    }

    #[test]
    fn test_unwritable_report_persists_nothing() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("recipes.json"),
            r#"[{"ingredients": ["Salt", "Black Pepper"]}]"#,
        )
        .unwrap();

        let cfg = SampleConfig {
            base_dir: dir.path().to_path_buf(),
            fraction: 1.0,
            report:   Some(PathBuf::from("missing_dir/strata.csv")),
            ..SampleConfig::default()
        };
        let err = SampleUseCase::new(cfg).execute().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SampleError>(),
            Some(SampleError::OutputUnwritable { .. })
        ));
        assert!(!dir.path().join("validation_set.json").exists());
        assert!(!dir.path().join("validation_set.manifest.json").exists());
        // only the input remains, no stray temp files
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
