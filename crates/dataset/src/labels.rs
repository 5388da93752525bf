//! Label table: integer class label ↔ room name.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// Ordered list of room names; the integer label of a room is its position.
///
/// Names are sorted at construction so label integers are stable across
/// runs regardless of the order rooms were surveyed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTable {
    names: Vec<String>,
}

impl LabelTable {
    /// Builds a label table from room names (sorted, deduplicated).
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

    /// Returns the label of a room name, if known.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).ok()
    }

    /// Returns the room name for a label.
    pub fn name(&self, label: usize) -> Option<&str> {
        self.names.get(label).map(String::as_str)
    }

    /// Returns the room names in label order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the number of classes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Checks the sorted/deduplicated invariant.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.names.windows(2).all(|w| w[0] < w[1]) {
            Ok(())
        } else {
            Err(DatasetError::UnsortedTable { table: "room" })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_sorted_positions() {
        let table = LabelTable::from_names(["kitchen", "bedroom", "office"]);
        assert_eq!(table.index_of("bedroom"), Some(0));
        assert_eq!(table.index_of("kitchen"), Some(1));
        assert_eq!(table.index_of("office"), Some(2));
        assert_eq!(table.name(1), Some("kitchen"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_unknown_room() {
        let table = LabelTable::from_names(["a"]);
        assert_eq!(table.index_of("b"), None);
        assert_eq!(table.name(5), None);
    }

    #[test]
    fn test_stable_across_survey_order() {
        let a = LabelTable::from_names(["office", "kitchen"]);
        let b = LabelTable::from_names(["kitchen", "office"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_validate() {
        assert!(LabelTable::from_names(["a", "b"]).validate().is_ok());
        let bad: LabelTable = serde_json::from_str(r#"["b","a"]"#).unwrap();
        assert!(matches!(
            bad.validate(),
            Err(DatasetError::UnsortedTable { table: "room" })
        ));
    }
}
