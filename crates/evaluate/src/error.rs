//! Evaluation error types.

use locus_knn::KnnError;

/// Errors that can occur during evaluation.
#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    /// Returned when the evaluated dataset's width differs from the reference set's.
    #[error("dataset width {dataset} does not match reference width {reference}")]
    FeatureWidthMismatch {
        /// Feature count of the evaluated dataset.
        dataset: usize,
        /// Feature count of the reference set.
        reference: usize,
    },

    /// A classification call failed (empty reference set, invalid config, ...).
    #[error("classification failed")]
    Knn(#[from] KnnError),

    /// JSON serialization failed.
    #[error("serialization error")]
    Serialization(#[from] serde_json::Error),
}
