//! Assembly of a labeled dataset from per-room survey observations.

use tracing::debug;

use locus_scan::Observation;

use crate::align::align;
use crate::error::DatasetError;
use crate::labels::LabelTable;
use crate::layout::FeatureLayout;
use crate::sample::LabeledDataset;

/// All observations recorded in one room.
#[derive(Debug, Clone)]
pub struct RoomSurvey {
    /// Room name; becomes a class in the label table.
    pub room: String,
    /// Scans recorded while the device sat in this room.
    pub observations: Vec<Observation>,
}

impl RoomSurvey {
    /// Creates a room survey.
    pub fn new(room: impl Into<String>, observations: Vec<Observation>) -> Self {
        Self {
            room: room.into(),
            observations,
        }
    }
}

/// A survey assembled into classifier inputs.
#[derive(Debug, Clone)]
pub struct SurveyDataset {
    /// Fixed feature layout (sorted union of every source seen).
    pub layout: FeatureLayout,
    /// Room name table; labels index into it.
    pub rooms: LabelTable,
    /// Every observation aligned and labeled.
    pub samples: LabeledDataset,
}

/// Assembles per-room surveys into a labeled dataset.
///
/// The feature layout is the sorted union of all source names seen anywhere
/// in the survey; the label table is the sorted room names. Every
/// observation is aligned onto the layout with `not_detected` filling unseen
/// positions.
///
/// # Errors
///
/// Returns an error when no rooms are given, a room name repeats, or a room
/// has no observations.
pub fn assemble(surveys: &[RoomSurvey], not_detected: f64) -> Result<SurveyDataset, DatasetError> {
    if surveys.is_empty() {
        return Err(DatasetError::NoRooms);
    }
    for (i, survey) in surveys.iter().enumerate() {
        if survey.observations.is_empty() {
            return Err(DatasetError::EmptyRoom {
                room: survey.room.clone(),
            });
        }
        if surveys[..i].iter().any(|s| s.room == survey.room) {
            return Err(DatasetError::DuplicateRoom {
                room: survey.room.clone(),
            });
        }
    }

    let layout = FeatureLayout::from_names(
        surveys
            .iter()
            .flat_map(|s| s.observations.iter())
            .flat_map(|obs| obs.sources().map(str::to_string)),
    );
    let rooms = LabelTable::from_names(surveys.iter().map(|s| s.room.clone()));

    let mut samples = LabeledDataset::empty(layout.len());
    for survey in surveys {
        let label = rooms
            .index_of(&survey.room)
            .expect("room table built from these surveys");
        for obs in &survey.observations {
            samples.push(&align(&layout, obs, not_detected), label)?;
        }
    }

    debug!(
        n_rooms = rooms.len(),
        n_sources = layout.len(),
        n_samples = samples.len(),
        "assembled survey dataset"
    );
    Ok(SurveyDataset {
        layout,
        rooms,
        samples,
    })
}
