//! Error types for the locus-scan crate.

/// Error type for all fallible operations in the locus-scan crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScanError {
    /// Returned when a scan record line cannot be parsed.
    #[error("malformed scan record at line {line}: {text:?}")]
    MalformedLine {
        /// 1-based line number within the dump.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// Returned when a replay scanner has no observations left.
    #[error("replay scanner exhausted after {yielded} observation(s)")]
    Exhausted {
        /// Number of observations already yielded.
        yielded: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_malformed_line() {
        let e = ScanError::MalformedLine {
            line: 12,
            text: "3: broken".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "malformed scan record at line 12: \"3: broken\""
        );
    }

    #[test]
    fn error_exhausted() {
        let e = ScanError::Exhausted { yielded: 4 };
        assert_eq!(e.to_string(), "replay scanner exhausted after 4 observation(s)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ScanError>();
    }
}
