//! Labeled signal-strength datasets for indoor localization.
//!
//! This crate owns everything between raw scan observations and the
//! classifier's inputs:
//!
//! - [`FeatureLayout`] / [`LabelTable`] — the immutable, sorted lookup
//!   tables that make feature positions and label integers stable across
//!   runs.
//! - [`align`] — projection of a sparse [`Observation`](locus_scan::Observation)
//!   onto the fixed layout, with [`NOT_DETECTED`] filling unseen positions.
//! - [`LabeledDataset`] — flat row-major feature storage with parallel
//!   labels, consumed by the classifier without copying.
//! - [`assemble`] / [`split`] — survey-to-dataset construction and the
//!   seeded train/test partition.
//! - [`DatasetBundle`] — JSON persistence of the whole thing.

pub mod align;
pub mod assemble;
pub mod bundle;
pub mod error;
pub mod labels;
pub mod layout;
pub mod sample;
pub mod split;

pub use align::{NOT_DETECTED, align};
pub use assemble::{RoomSurvey, SurveyDataset, assemble};
pub use bundle::DatasetBundle;
pub use error::DatasetError;
pub use labels::LabelTable;
pub use layout::FeatureLayout;
pub use sample::LabeledDataset;
pub use split::split;
