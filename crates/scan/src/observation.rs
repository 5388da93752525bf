//! A single wireless scan observation.

use std::collections::BTreeMap;

/// One scan's view of the radio environment: source name → RSSI in dBm.
///
/// Sources are keyed by name in sorted order, so iteration is deterministic.
/// A scan can report the same source twice (repeated beacons); the first
/// reading wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observation {
    readings: BTreeMap<String, f64>,
}

impl Observation {
    /// Creates an empty observation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reading. The first reading for a source is kept; later
    /// readings for the same source are ignored.
    pub fn insert(&mut self, source: impl Into<String>, rssi: f64) {
        self.readings.entry(source.into()).or_insert(rssi);
    }

    /// Returns the RSSI for a source, if it was observed.
    pub fn strength(&self, source: &str) -> Option<f64> {
        self.readings.get(source).copied()
    }

    /// Iterates over (source, rssi) pairs in source-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.readings.iter().map(|(name, &rssi)| (name.as_str(), rssi))
    }

    /// Returns the observed source names in sorted order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.readings.keys().map(String::as_str)
    }

    /// Returns the number of observed sources.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Returns true if nothing was observed.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl FromIterator<(String, f64)> for Observation {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut obs = Observation::new();
        for (source, rssi) in iter {
            obs.insert(source, rssi);
        }
        obs
    }
}
