//! Nearest-neighbor classification with a contracting majority vote.
//!
//! This crate classifies a query feature vector against a labeled reference
//! set: exhaustive Euclidean distance scan, ascending neighbor ranking, then
//! a majority vote over the `max_k` nearest neighbors. A tied vote contracts
//! the neighborhood (`k - 1`, `k - 2`, …) until a unique majority emerges; a
//! single neighbor is structurally unique, so contraction always terminates.
//! This deliberately differs from textbook KNN tie-breaking: determinism via
//! neighborhood contraction, favoring the closest neighbors on ties.
//!
//! # Quick start
//!
//! ```
//! use locus_knn::{ClassifierConfig, classify};
//!
//! // Four 2-D reference samples with labels 0/1.
//! let references = vec![0.0, 0.0, 0.5, 0.0, 10.0, 10.0, 10.0, 10.5];
//! let labels = vec![0, 0, 1, 1];
//! let config = ClassifierConfig::new(3, 2);
//!
//! let result = classify(&references, 2, &labels, &[0.2, 0.1], &config).unwrap();
//! assert_eq!(result.label(), Some(0));
//! ```
//!
//! # Architecture
//!
//! ```text
//! classify()
//!   ├─ validate inputs
//!   ├─ sq_distances()      (distance.rs)
//!   ├─ rank_neighbors()    (rank.rs)
//!   └─ contract_vote()     (vote.rs)
//! ```
//!
//! For hot loops, use [`classify_with_scratch`] with a reusable
//! [`KnnScratch`] to avoid per-call heap allocation.

pub mod classify;
pub mod config;
pub mod error;
pub mod result;

pub(crate) mod distance;
pub(crate) mod rank;
pub(crate) mod vote;

pub use classify::{KnnScratch, classify, classify_with_scratch};
pub use config::{ClassifierConfig, DEFAULT_MAX_K};
pub use distance::euclidean;
pub use error::KnnError;
pub use result::{Classification, Prediction};
