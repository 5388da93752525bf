//! Fixed feature layout: which source occupies which vector position.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// Ordered list of known source names.
///
/// Position *i* of every feature vector in the system holds the signal
/// strength of source *i*. Names are sorted and deduplicated at
/// construction, so the layout is identical no matter what order sources
/// were first seen in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureLayout {
    names: Vec<String>,
}

impl FeatureLayout {
    /// Builds a layout from source names (sorted, deduplicated).
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        Self {
            names: set.into_iter().collect(),
        }
    }

    /// Returns the vector position of a source, if known.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).ok()
    }

    /// Returns the source name at a position.
    pub fn name(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(String::as_str)
    }

    /// Returns the source names in layout order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the number of known sources (the feature vector length).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the layout is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Checks the sorted/deduplicated invariant.
    ///
    /// Deserialized layouts can carry arbitrary orderings; callers loading
    /// untrusted data should validate before use.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.names.windows(2).all(|w| w[0] < w[1]) {
            Ok(())
        } else {
            Err(DatasetError::UnsortedTable { table: "source" })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_deduplicated() {
        let layout = FeatureLayout::from_names(["zeta", "alpha", "mid", "alpha"]);
        let names: Vec<&str> = layout.names().collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
        assert_eq!(layout.len(), 3);
    }

    #[test]
    fn test_position_lookup() {
        let layout = FeatureLayout::from_names(["b", "a", "c"]);
        assert_eq!(layout.position("a"), Some(0));
        assert_eq!(layout.position("b"), Some(1));
        assert_eq!(layout.position("c"), Some(2));
        assert_eq!(layout.position("d"), None);
    }

    #[test]
    fn test_name_lookup() {
        let layout = FeatureLayout::from_names(["b", "a"]);
        assert_eq!(layout.name(0), Some("a"));
        assert_eq!(layout.name(1), Some("b"));
        assert_eq!(layout.name(2), None);
    }

    #[test]
    fn test_deterministic_across_input_order() {
        let a = FeatureLayout::from_names(["x", "y", "z"]);
        let b = FeatureLayout::from_names(["z", "x", "y"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_validate() {
        let good = FeatureLayout::from_names(["a", "b"]);
        assert!(good.validate().is_ok());

        let bad: FeatureLayout = serde_json::from_str(r#"["b","a"]"#).unwrap();
        assert!(matches!(
            bad.validate(),
            Err(DatasetError::UnsortedTable { table: "source" })
        ));
    }
}
