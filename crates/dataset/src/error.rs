//! Error types for the locus-dataset crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the locus-dataset crate.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Returned when the flat feature slice length is not divisible by n_features.
    #[error("feature length {len} is not divisible by n_features {n_features}")]
    ShapeMismatch {
        /// Length of the flat feature vector.
        len: usize,
        /// Expected number of features per sample.
        n_features: usize,
    },

    /// Returned when the label count does not match the sample count.
    #[error("label count {labels} does not match sample count {samples}")]
    LabelCountMismatch {
        /// Number of labels provided.
        labels: usize,
        /// Number of samples.
        samples: usize,
    },

    /// Returned when a pushed vector does not match the dataset width.
    #[error("vector length {vector} does not match n_features {n_features}")]
    VectorDimensionMismatch {
        /// Length of the pushed vector.
        vector: usize,
        /// Expected number of features.
        n_features: usize,
    },

    /// Returned when a label is outside the label table.
    #[error("label {label} at sample {sample} is out of range for {num_classes} classes")]
    LabelOutOfRange {
        /// The offending label value.
        label: usize,
        /// Index of the sample carrying it.
        sample: usize,
        /// Number of known classes.
        num_classes: usize,
    },

    /// Returned when a lookup table is not in sorted order.
    #[error("{table} table is not sorted/deduplicated")]
    UnsortedTable {
        /// Which table failed the check.
        table: &'static str,
    },

    /// Returned when assembly receives no rooms.
    #[error("no rooms to assemble")]
    NoRooms,

    /// Returned when a room contributes no observations.
    #[error("room '{room}' has no observations")]
    EmptyRoom {
        /// The offending room name.
        room: String,
    },

    /// Returned when two rooms share a name.
    #[error("duplicate room name '{room}'")]
    DuplicateRoom {
        /// The duplicated room name.
        room: String,
    },

    /// Returned when the train percentage is outside 0..=100.
    #[error("train_pct must be within 0..=100, got {train_pct}")]
    InvalidTrainPct {
        /// The invalid percentage.
        train_pct: f64,
    },

    /// Returned when reading or writing a bundle file fails.
    #[error("failed to access '{}'", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Returned when bundle JSON cannot be serialized or deserialized.
    #[error("bundle JSON error")]
    Json(#[from] serde_json::Error),
}
