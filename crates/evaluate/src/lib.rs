//! Locus evaluation: classify every sample of a dataset against a reference
//! set and tally accuracy.
//!
//! The evaluator drives the classifier once per sample, compares each
//! prediction to the sample's true label, and reports totals plus every
//! misclassified point. Undetermined votes count toward the denominator but
//! never the numerator, and are reported alongside real misclassifications.

mod error;
mod output;

use tracing::debug;

use locus_dataset::LabeledDataset;
use locus_knn::{ClassifierConfig, KnnScratch, classify_with_scratch};

pub use error::EvaluateError;
pub use output::{EvaluationOutput, Misclassification};

/// Evaluates `dataset` against `reference`.
///
/// Classifying a dataset against itself with `max_k = 1` yields 100%
/// accuracy (every query finds itself at distance zero), which makes a
/// useful sanity check on freshly prepared data.
///
/// # Errors
///
/// Returns [`EvaluateError::FeatureWidthMismatch`] if the two datasets
/// disagree on feature count, and [`EvaluateError::Knn`] if classification
/// fails (e.g. the reference set is empty while the dataset is not).
pub fn evaluate(
    reference: &LabeledDataset,
    dataset: &LabeledDataset,
    config: &ClassifierConfig,
) -> Result<EvaluationOutput, EvaluateError> {
    if dataset.n_features() != reference.n_features() {
        return Err(EvaluateError::FeatureWidthMismatch {
            dataset: dataset.n_features(),
            reference: reference.n_features(),
        });
    }

    let total = dataset.len();
    let mut correct = 0usize;
    let mut undetermined = 0usize;
    let mut misclassified = Vec::new();

    let mut scratch = KnnScratch::new(reference.len());
    for i in 0..total {
        let query = dataset.vector(i);
        let result = classify_with_scratch(
            reference.features(),
            reference.n_features(),
            reference.labels(),
            query,
            config,
            &mut scratch,
        )?;

        let actual = dataset.label(i);
        let predicted = result.label();
        if predicted == Some(actual) {
            correct += 1;
        } else {
            if predicted.is_none() {
                undetermined += 1;
            }
            debug!(sample = i, actual, predicted = ?predicted, "misclassified");
            misclassified.push(Misclassification {
                index: i,
                actual,
                predicted,
                features: query.to_vec(),
            });
        }
    }

    let accuracy_pct = if total == 0 {
        0.0
    } else {
        100.0 * correct as f64 / total as f64
    };

    Ok(EvaluationOutput {
        total,
        correct,
        undetermined,
        accuracy_pct,
        misclassified,
    })
}
