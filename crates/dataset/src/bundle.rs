//! Dataset bundle persistence.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::labels::LabelTable;
use crate::layout::FeatureLayout;
use crate::sample::LabeledDataset;

/// Everything a deployment needs to classify: layout, room table, and the
/// train/test datasets, serialized as one JSON document.
///
/// This is an input format (the output of `prepare`), not a trained model:
/// the classifier has no fitted state beyond the reference samples
/// themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetBundle {
    layout: FeatureLayout,
    rooms: LabelTable,
    train: LabeledDataset,
    test: LabeledDataset,
}

impl DatasetBundle {
    /// Creates a bundle, validating cross-references.
    pub fn new(
        layout: FeatureLayout,
        rooms: LabelTable,
        train: LabeledDataset,
        test: LabeledDataset,
    ) -> Result<Self, DatasetError> {
        let bundle = Self {
            layout,
            rooms,
            train,
            test,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Returns the feature layout.
    pub fn layout(&self) -> &FeatureLayout {
        &self.layout
    }

    /// Returns the room table.
    pub fn rooms(&self) -> &LabelTable {
        &self.rooms
    }

    /// Returns the train dataset.
    pub fn train(&self) -> &LabeledDataset {
        &self.train
    }

    /// Returns the test dataset.
    pub fn test(&self) -> &LabeledDataset {
        &self.test
    }

    /// Checks every invariant a freshly deserialized bundle might violate:
    /// table ordering, dataset shapes, feature widths against the layout,
    /// and label ranges against the room table.
    pub fn validate(&self) -> Result<(), DatasetError> {
        self.layout.validate()?;
        self.rooms.validate()?;
        for dataset in [&self.train, &self.test] {
            dataset.validate()?;
            if dataset.n_features() != self.layout.len() {
                return Err(DatasetError::VectorDimensionMismatch {
                    vector: dataset.n_features(),
                    n_features: self.layout.len(),
                });
            }
            dataset.validate_labels(self.rooms.len())?;
        }
        Ok(())
    }

    /// Serializes to pretty JSON.
    pub fn to_json(&self) -> Result<String, DatasetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes from JSON and validates.
    pub fn from_json(text: &str) -> Result<Self, DatasetError> {
        let bundle: Self = serde_json::from_str(text)?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Reads and validates a bundle file.
    pub fn read(path: &Path) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Writes the bundle as pretty JSON.
    pub fn write(&self, path: &Path) -> Result<(), DatasetError> {
        let text = self.to_json()?;
        fs::write(path, text).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
