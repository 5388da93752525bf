//! Error types for the locus-knn crate.

/// Error type for all fallible operations in the locus-knn crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KnnError {
    /// Returned when the reference set is empty.
    #[error("reference set is empty")]
    EmptyReferenceSet,

    /// Returned when max_k is zero.
    #[error("max_k must be >= 1, got {max_k}")]
    InvalidMaxK {
        /// The invalid max_k value.
        max_k: usize,
    },

    /// Returned when num_classes is zero.
    #[error("num_classes must be >= 1, got {num_classes}")]
    InvalidNumClasses {
        /// The invalid num_classes value.
        num_classes: usize,
    },

    /// Returned when the reference slice length is not divisible by n_features.
    #[error("reference length {len} is not divisible by n_features {n_features}")]
    ReferenceShapeMismatch {
        /// Length of the flat reference slice.
        len: usize,
        /// Expected number of features per sample.
        n_features: usize,
    },

    /// Returned when the query length does not match n_features.
    #[error("query length {query} does not match n_features {n_features}")]
    QueryDimensionMismatch {
        /// Length of the query slice.
        query: usize,
        /// Expected number of features.
        n_features: usize,
    },

    /// Returned when the label slice length does not match the sample count.
    #[error("label count {labels} does not match sample count {samples}")]
    LabelCountMismatch {
        /// Number of labels provided.
        labels: usize,
        /// Number of reference samples.
        samples: usize,
    },

    /// Returned when a reference label is outside `0..num_classes`.
    #[error("label {label} at sample {sample} is out of range for {num_classes} classes")]
    LabelOutOfRange {
        /// The offending label value.
        label: usize,
        /// Index of the sample carrying it.
        sample: usize,
        /// Number of known classes.
        num_classes: usize,
    },

    /// Returned when the query contains NaN or infinity.
    #[error("non-finite value in query")]
    NonFiniteQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_reference_set() {
        let e = KnnError::EmptyReferenceSet;
        assert_eq!(e.to_string(), "reference set is empty");
    }

    #[test]
    fn error_invalid_max_k() {
        let e = KnnError::InvalidMaxK { max_k: 0 };
        assert_eq!(e.to_string(), "max_k must be >= 1, got 0");
    }

    #[test]
    fn error_invalid_num_classes() {
        let e = KnnError::InvalidNumClasses { num_classes: 0 };
        assert_eq!(e.to_string(), "num_classes must be >= 1, got 0");
    }

    #[test]
    fn error_reference_shape_mismatch() {
        let e = KnnError::ReferenceShapeMismatch {
            len: 10,
            n_features: 3,
        };
        assert_eq!(
            e.to_string(),
            "reference length 10 is not divisible by n_features 3"
        );
    }

    #[test]
    fn error_query_dimension_mismatch() {
        let e = KnnError::QueryDimensionMismatch {
            query: 2,
            n_features: 5,
        };
        assert_eq!(e.to_string(), "query length 2 does not match n_features 5");
    }

    #[test]
    fn error_label_count_mismatch() {
        let e = KnnError::LabelCountMismatch {
            labels: 4,
            samples: 6,
        };
        assert_eq!(e.to_string(), "label count 4 does not match sample count 6");
    }

    #[test]
    fn error_label_out_of_range() {
        let e = KnnError::LabelOutOfRange {
            label: 7,
            sample: 2,
            num_classes: 4,
        };
        assert_eq!(
            e.to_string(),
            "label 7 at sample 2 is out of range for 4 classes"
        );
    }

    #[test]
    fn error_non_finite_query() {
        let e = KnnError::NonFiniteQuery;
        assert_eq!(e.to_string(), "non-finite value in query");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<KnnError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<KnnError>();
    }
}
