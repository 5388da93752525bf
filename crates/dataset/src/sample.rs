//! Labeled sample storage.

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// A collection of labeled feature vectors.
///
/// Features are stored flat row-major (`n_samples × n_features` in one
/// `Vec<f64>`) with a parallel label vector, matching the layout the
/// classifier consumes without copying.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabeledDataset {
    n_features: usize,
    features: Vec<f64>,
    labels: Vec<usize>,
}

impl LabeledDataset {
    /// Creates a dataset from flat features and parallel labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature length is not divisible by
    /// `n_features` or the label count does not match the sample count.
    pub fn new(
        n_features: usize,
        features: Vec<f64>,
        labels: Vec<usize>,
    ) -> Result<Self, DatasetError> {
        let dataset = Self {
            n_features,
            features,
            labels,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Creates an empty dataset of the given width.
    pub fn empty(n_features: usize) -> Self {
        Self {
            n_features,
            features: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Appends one labeled sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector width does not match.
    pub fn push(&mut self, vector: &[f64], label: usize) -> Result<(), DatasetError> {
        if vector.len() != self.n_features {
            return Err(DatasetError::VectorDimensionMismatch {
                vector: vector.len(),
                n_features: self.n_features,
            });
        }
        self.features.extend_from_slice(vector);
        self.labels.push(label);
        Ok(())
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the dataset has no samples.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the feature vector width.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Returns the flat row-major feature matrix.
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Returns the labels, parallel to the feature rows.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Returns the feature vector of sample `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn vector(&self, i: usize) -> &[f64] {
        &self.features[i * self.n_features..(i + 1) * self.n_features]
    }

    /// Returns the label of sample `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn label(&self, i: usize) -> usize {
        self.labels[i]
    }

    /// Checks the shape invariants.
    ///
    /// Deserialized datasets can carry arbitrary contents; callers loading
    /// untrusted data should validate before use. An empty dataset with
    /// `n_features == 0` is valid; a non-empty one is not.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.n_features == 0 {
            if !self.features.is_empty() || !self.labels.is_empty() {
                return Err(DatasetError::ShapeMismatch {
                    len: self.features.len(),
                    n_features: 0,
                });
            }
            return Ok(());
        }
        if !self.features.len().is_multiple_of(self.n_features) {
            return Err(DatasetError::ShapeMismatch {
                len: self.features.len(),
                n_features: self.n_features,
            });
        }
        let samples = self.features.len() / self.n_features;
        if self.labels.len() != samples {
            return Err(DatasetError::LabelCountMismatch {
                labels: self.labels.len(),
                samples,
            });
        }
        Ok(())
    }

    /// Checks that every label is below `num_classes`.
    pub fn validate_labels(&self, num_classes: usize) -> Result<(), DatasetError> {
        for (sample, &label) in self.labels.iter().enumerate() {
            if label >= num_classes {
                return Err(DatasetError::LabelOutOfRange {
                    label,
                    sample,
                    num_classes,
                });
            }
        }
        Ok(())
    }
}
