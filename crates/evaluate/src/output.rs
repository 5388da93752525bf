//! Evaluation output types.

use serde::Serialize;

use crate::error::EvaluateError;

/// One wrongly classified (or unclassifiable) sample.
#[derive(Debug, Clone, Serialize)]
pub struct Misclassification {
    /// Index of the sample within the evaluated dataset.
    pub index: usize,
    /// The sample's true label.
    pub actual: usize,
    /// The predicted label, or `None` for an undetermined vote.
    pub predicted: Option<usize>,
    /// The sample's feature values, for offline inspection.
    pub features: Vec<f64>,
}

/// Aggregate result of evaluating a dataset against a reference set.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationOutput {
    /// Number of samples evaluated.
    pub total: usize,
    /// Number classified as their true label.
    pub correct: usize,
    /// Number with an undetermined vote (counted in `total`, never in
    /// `correct`).
    pub undetermined: usize,
    /// `100 × correct / total`; `0.0` for an empty dataset.
    pub accuracy_pct: f64,
    /// Every sample that was not classified as its true label.
    pub misclassified: Vec<Misclassification>,
}

impl EvaluationOutput {
    /// Serializes to pretty JSON.
    pub fn to_json(&self) -> Result<String, EvaluateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
