//! Classification entry points and scratch buffer management.

use crate::config::ClassifierConfig;
use crate::distance::sq_distances;
use crate::error::KnnError;
use crate::rank::rank_neighbors;
use crate::result::{Classification, Prediction};
use crate::vote::{VoteState, contract_vote};

/// Pre-allocated scratch buffers for classification.
///
/// Reuse across multiple calls to [`classify_with_scratch`] to avoid
/// repeated heap allocation in hot loops (e.g. evaluating every sample of a
/// dataset).
///
/// # Example
///
/// ```
/// use locus_knn::KnnScratch;
///
/// let mut scratch = KnnScratch::new(200);
/// // Use with classify_with_scratch() in a loop...
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnnScratch {
    /// Squared distances buffer.
    pub(crate) d_sq: Vec<f64>,
    /// (distance, index) pairs for sorting.
    pub(crate) pairs: Vec<(f64, usize)>,
    /// Indices of the ranked nearest neighbors.
    pub(crate) nn_indices: Vec<usize>,
    /// Euclidean distances of the ranked nearest neighbors.
    pub(crate) nn_dists: Vec<f64>,
    /// Labels of the ranked nearest neighbors.
    pub(crate) ranked_labels: Vec<usize>,
    /// Per-class vote histogram.
    pub(crate) counts: Vec<usize>,
}

impl KnnScratch {
    /// Creates a new scratch buffer with capacity for `max_samples` reference samples.
    pub fn new(max_samples: usize) -> Self {
        Self {
            d_sq: Vec::with_capacity(max_samples),
            pairs: Vec::with_capacity(max_samples),
            nn_indices: Vec::with_capacity(max_samples),
            nn_dists: Vec::with_capacity(max_samples),
            ranked_labels: Vec::with_capacity(max_samples),
            counts: Vec::new(),
        }
    }
}

/// Validates all inputs and returns the derived sample count.
fn validate_inputs(
    references: &[f64],
    n_features: usize,
    labels: &[usize],
    query: &[f64],
    config: &ClassifierConfig,
) -> Result<usize, KnnError> {
    // Config validation first
    config.validate()?;

    // n_features must be >= 1 to avoid division by zero
    if n_features == 0 {
        return Err(KnnError::ReferenceShapeMismatch {
            len: references.len(),
            n_features,
        });
    }

    if references.is_empty() {
        return Err(KnnError::EmptyReferenceSet);
    }
    if !references.len().is_multiple_of(n_features) {
        return Err(KnnError::ReferenceShapeMismatch {
            len: references.len(),
            n_features,
        });
    }

    let n_samples = references.len() / n_features;

    if labels.len() != n_samples {
        return Err(KnnError::LabelCountMismatch {
            labels: labels.len(),
            samples: n_samples,
        });
    }
    if query.len() != n_features {
        return Err(KnnError::QueryDimensionMismatch {
            query: query.len(),
            n_features,
        });
    }
    if query.iter().any(|v| !v.is_finite()) {
        return Err(KnnError::NonFiniteQuery);
    }
    for (sample, &label) in labels.iter().enumerate() {
        if label >= config.num_classes() {
            return Err(KnnError::LabelOutOfRange {
                label,
                sample,
                num_classes: config.num_classes(),
            });
        }
    }

    Ok(n_samples)
}

/// Internal implementation that assumes all inputs are validated.
fn classify_inner(
    references: &[f64],
    n_samples: usize,
    n_features: usize,
    labels: &[usize],
    query: &[f64],
    config: &ClassifierConfig,
    scratch: &mut KnnScratch,
) -> Classification {
    // Step 1: Cap the neighborhood at the reference set size
    let k_eff = config.max_k().min(n_samples);

    // Step 2: Squared distances to every reference sample
    scratch.d_sq.clear();
    scratch.d_sq.resize(n_samples, 0.0);
    sq_distances(references, n_features, query, &mut scratch.d_sq);

    // Step 3: Rank the k_eff nearest neighbors
    rank_neighbors(
        &scratch.d_sq,
        k_eff,
        &mut scratch.pairs,
        &mut scratch.nn_indices,
        &mut scratch.nn_dists,
    );

    // Step 4: Project neighbor indices onto their labels
    scratch.ranked_labels.clear();
    scratch
        .ranked_labels
        .extend(scratch.nn_indices.iter().map(|&i| labels[i]));

    // Step 5: Contracting majority vote
    let prediction = match contract_vote(
        &scratch.ranked_labels,
        config.num_classes(),
        &mut scratch.counts,
    ) {
        VoteState::Determined(label) => Prediction::Determined(label),
        VoteState::Voting(_) | VoteState::Undetermined => Prediction::Undetermined,
    };

    Classification::new(prediction, scratch.nn_dists.clone())
}

/// Classifies a query point, allocating scratch buffers internally.
///
/// This is the simple entry point. For hot loops, use
/// [`classify_with_scratch`] to reuse allocations.
///
/// # Arguments
///
/// * `references` — flat row-major reference matrix `[n_samples × n_features]`
/// * `n_features` — number of features per sample
/// * `labels` — class label of each reference sample `[n_samples]`
/// * `query` — query point `[n_features]`
/// * `config` — classifier configuration (max_k, num_classes)
///
/// # Errors
///
/// Returns [`KnnError`] if inputs are invalid (empty reference set, shape or
/// dimension mismatches, out-of-range labels, non-finite query, invalid
/// config).
pub fn classify(
    references: &[f64],
    n_features: usize,
    labels: &[usize],
    query: &[f64],
    config: &ClassifierConfig,
) -> Result<Classification, KnnError> {
    let n_samples = validate_inputs(references, n_features, labels, query, config)?;
    let mut scratch = KnnScratch::new(n_samples);
    Ok(classify_inner(
        references,
        n_samples,
        n_features,
        labels,
        query,
        config,
        &mut scratch,
    ))
}

/// Classifies a query point, reusing pre-allocated scratch buffers.
///
/// Identical to [`classify`] but avoids heap allocation by reusing
/// `scratch`. Buffers grow as needed and never shrink.
///
/// # Errors
///
/// Returns [`KnnError`] if inputs are invalid.
pub fn classify_with_scratch(
    references: &[f64],
    n_features: usize,
    labels: &[usize],
    query: &[f64],
    config: &ClassifierConfig,
    scratch: &mut KnnScratch,
) -> Result<Classification, KnnError> {
    let n_samples = validate_inputs(references, n_features, labels, query, config)?;
    Ok(classify_inner(
        references,
        n_samples,
        n_features,
        labels,
        query,
        config,
        scratch,
    ))
}
