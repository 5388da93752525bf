//! Evaluate command: accuracy of the classifier on a dataset bundle.

use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use locus_dataset::{DatasetBundle, LabelTable};
use locus_evaluate::{EvaluationOutput, evaluate};
use locus_knn::ClassifierConfig;

use crate::cli::EvaluateArgs;
use crate::config::LocusConfig;

/// Run the evaluation pipeline.
pub fn run(args: EvaluateArgs) -> Result<()> {
    let _cmd = info_span!("evaluate").entered();

    // 1. Load project TOML
    let toml_str = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: LocusConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Load the bundle
    let bundle_path = args.bundle.unwrap_or(config.dataset.bundle);
    let bundle = DatasetBundle::read(&bundle_path)
        .with_context(|| format!("failed to read bundle: {}", bundle_path.display()))?;
    info!(
        n_rooms = bundle.rooms().len(),
        n_train = bundle.train().len(),
        n_test = bundle.test().len(),
        "bundle loaded"
    );

    let max_k = args.max_k.unwrap_or(config.knn.max_k);
    let classifier = ClassifierConfig::new(max_k, bundle.rooms().len());

    // 3. Train set against itself, then the held-out test set
    let train_out = evaluate(bundle.train(), bundle.train(), &classifier)?;
    report("train", &train_out, bundle.rooms());

    let test_out = if bundle.test().is_empty() {
        None
    } else {
        let out = evaluate(bundle.train(), bundle.test(), &classifier)?;
        report("test", &out, bundle.rooms());
        Some(out)
    };

    // 4. Optional diagnostics JSON
    if let Some(path) = args.output {
        let diagnostics = serde_json::json!({
            "max_k": max_k,
            "train": train_out,
            "test": test_out,
        });
        fs::write(&path, serde_json::to_string_pretty(&diagnostics)?)
            .with_context(|| format!("failed to write diagnostics: {}", path.display()))?;
        info!(path = %path.display(), "diagnostics written");
    }

    Ok(())
}

/// Print one evaluation's summary and its misclassified points.
fn report(name: &str, output: &EvaluationOutput, rooms: &LabelTable) {
    println!(
        "{name}: {} samples, {} correct ({:.1}%), {} undetermined",
        output.total, output.correct, output.accuracy_pct, output.undetermined
    );
    for miss in &output.misclassified {
        let predicted = miss
            .predicted
            .and_then(|label| rooms.name(label))
            .unwrap_or("undetermined");
        let actual = rooms.name(miss.actual).unwrap_or("?");
        println!(
            "  sample {}: predicted {predicted}, actual {actual}",
            miss.index
        );
    }
}
