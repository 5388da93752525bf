use std::path::PathBuf;

use serde::Deserialize;

use locus_dataset::NOT_DETECTED;
use locus_knn::DEFAULT_MAX_K;

/// Top-level Locus configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LocusConfig {
    /// Dataset locations.
    #[serde(default)]
    pub dataset: DatasetToml,

    /// Classifier settings.
    #[serde(default)]
    pub knn: KnnToml,

    /// Observation alignment settings.
    #[serde(default)]
    pub align: AlignToml,

    /// Train/test split settings.
    #[serde(default)]
    pub split: SplitToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetToml {
    /// Directory of per-room scan dump files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Dataset bundle path (written by `prepare`, read by the rest).
    #[serde(default = "default_bundle")]
    pub bundle: PathBuf,
    /// Filename suffix identifying room dump files.
    #[serde(default = "default_dump_suffix")]
    pub dump_suffix: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnnToml {
    /// Initial neighborhood size.
    #[serde(default = "default_max_k")]
    pub max_k: usize,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlignToml {
    /// Feature value for sources a scan did not see.
    #[serde(default = "default_not_detected")]
    pub not_detected: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitToml {
    /// Percentage of samples assigned to the train set.
    #[serde(default = "default_train_pct")]
    pub train_pct: f64,
    /// Shuffle seed.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data_files")
}
fn default_bundle() -> PathBuf {
    PathBuf::from("locus_dataset.json")
}
fn default_dump_suffix() -> String {
    "_data.dat".to_string()
}
fn default_max_k() -> usize {
    DEFAULT_MAX_K
}
fn default_not_detected() -> f64 {
    NOT_DETECTED
}
fn default_train_pct() -> f64 {
    70.0
}
fn default_seed() -> u64 {
    42
}

impl Default for DatasetToml {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            bundle: default_bundle(),
            dump_suffix: default_dump_suffix(),
        }
    }
}

impl Default for KnnToml {
    fn default() -> Self {
        Self {
            max_k: default_max_k(),
        }
    }
}

impl Default for AlignToml {
    fn default() -> Self {
        Self {
            not_detected: default_not_detected(),
        }
    }
}

impl Default for SplitToml {
    fn default() -> Self {
        Self {
            train_pct: default_train_pct(),
            seed: default_seed(),
        }
    }
}
