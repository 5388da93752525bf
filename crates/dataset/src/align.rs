//! Observation alignment onto the fixed feature layout.

use locus_scan::Observation;

use crate::layout::FeatureLayout;

/// Feature value for a source the scan did not see.
///
/// RSSI magnitudes top out well below 100 dBm in practice, so 120 sits
/// beyond every real reading and reads as "far away" to the distance
/// metric.
pub const NOT_DETECTED: f64 = 120.0;

/// Projects an observation onto the fixed feature layout.
///
/// Position *i* of the result holds the magnitude of the observed RSSI for
/// source *i* (−67 dBm becomes 67.0), or `not_detected` when the source was
/// not seen. Sources in the observation that are absent from the layout are
/// ignored: only known-layout positions are comparable, so a neighbor's new
/// network appearing mid-survey cannot shift existing features.
pub fn align(layout: &FeatureLayout, observation: &Observation, not_detected: f64) -> Vec<f64> {
    layout
        .names()
        .map(|name| {
            observation
                .strength(name)
                .map(f64::abs)
                .unwrap_or(not_detected)
        })
        .collect()
}
