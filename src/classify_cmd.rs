//! Classify command: place recorded scans against a dataset bundle.

use std::fs;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use locus_dataset::{DatasetBundle, align};
use locus_knn::{ClassifierConfig, KnnScratch, classify_with_scratch};
use locus_scan::parse_dump;

use crate::cli::ClassifyArgs;
use crate::config::LocusConfig;

/// Run the classification pipeline over a recorded scan dump.
pub fn run(args: ClassifyArgs) -> Result<()> {
    let _cmd = info_span!("classify").entered();

    // 1. Load project TOML
    let toml_str = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: LocusConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Load the bundle
    let bundle_path = args.bundle.unwrap_or(config.dataset.bundle);
    let bundle = DatasetBundle::read(&bundle_path)
        .with_context(|| format!("failed to read bundle: {}", bundle_path.display()))?;

    let max_k = args.max_k.unwrap_or(config.knn.max_k);
    let classifier = ClassifierConfig::new(max_k, bundle.rooms().len());

    // 3. Parse the scans to place
    let text = fs::read_to_string(&args.scan)
        .with_context(|| format!("failed to read scan dump: {}", args.scan.display()))?;
    let observations =
        parse_dump(&text).with_context(|| format!("failed to parse scan dump: {}", args.scan.display()))?;
    if observations.is_empty() {
        bail!("no scans found in {}", args.scan.display());
    }
    info!(n_scans = observations.len(), "classifying recorded scans");

    // 4. Align and classify each scan against the train set
    let train = bundle.train();
    let mut scratch = KnnScratch::new(train.len());
    for (i, obs) in observations.iter().enumerate() {
        let query = align(bundle.layout(), obs, config.align.not_detected);
        let result = classify_with_scratch(
            train.features(),
            train.n_features(),
            train.labels(),
            &query,
            &classifier,
            &mut scratch,
        )?;

        match result.label().and_then(|label| bundle.rooms().name(label)) {
            Some(room) => println!(
                "scan {}: {room} (nearest neighbor at {:.1})",
                i + 1,
                result.nn_distances()[0]
            ),
            None => println!("scan {}: undetermined", i + 1),
        }
    }

    Ok(())
}
