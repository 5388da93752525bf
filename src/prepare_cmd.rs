//! Prepare command: build a dataset bundle from per-room scan dumps.

use std::fs;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use locus_dataset::{DatasetBundle, RoomSurvey, assemble, split};
use locus_scan::parse_dump;

use crate::cli::PrepareArgs;
use crate::config::LocusConfig;

/// Run the dataset preparation pipeline.
pub fn run(args: PrepareArgs) -> Result<()> {
    let _cmd = info_span!("prepare").entered();

    // 1. Load project TOML
    let toml_str = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: LocusConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    let data_dir = args.data_dir.unwrap_or(config.dataset.data_dir);
    let output = args.output.unwrap_or(config.dataset.bundle);
    let seed = args.seed.unwrap_or(config.split.seed);
    let suffix = &config.dataset.dump_suffix;

    // 2. Collect room dump files, sorted for a stable room order
    let mut dump_files = Vec::new();
    let entries = fs::read_dir(&data_dir)
        .with_context(|| format!("failed to read survey directory: {}", data_dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if path.is_file() && name.ends_with(suffix.as_str()) {
            let room = name[..name.len() - suffix.len()].to_string();
            dump_files.push((room, path));
        }
    }
    dump_files.sort();
    if dump_files.is_empty() {
        bail!(
            "no '*{suffix}' dump files found in {}",
            data_dir.display()
        );
    }

    // 3. Parse each room's dump
    let mut surveys = Vec::with_capacity(dump_files.len());
    for (room, path) in dump_files {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read dump: {}", path.display()))?;
        let observations = parse_dump(&text)
            .with_context(|| format!("failed to parse dump: {}", path.display()))?;
        info!(room, n_observations = observations.len(), "parsed room dump");
        surveys.push(RoomSurvey::new(room, observations));
    }

    // 4. Assemble and split
    let survey = assemble(&surveys, config.align.not_detected)?;
    info!(
        n_rooms = survey.rooms.len(),
        n_sources = survey.layout.len(),
        n_samples = survey.samples.len(),
        "assembled survey"
    );
    let (train, test) = split(&survey.samples, config.split.train_pct, seed)?;

    // 5. Write the bundle
    let bundle = DatasetBundle::new(survey.layout, survey.rooms, train, test)?;
    bundle.write(&output)?;
    info!(path = %output.display(), "bundle written");

    println!(
        "prepared {} rooms, {} sources, {} train / {} test samples -> {}",
        bundle.rooms().len(),
        bundle.layout().len(),
        bundle.train().len(),
        bundle.test().len(),
        output.display()
    );
    Ok(())
}
