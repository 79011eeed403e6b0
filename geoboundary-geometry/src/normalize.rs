//! Longitude normalization of geographic polygons
//!
//! Geo-codings report every longitude independently wrapped into
//! `[-180, 180)`. A boundary crossing the antimeridian therefore shows jumps
//! of almost 360° between neighbouring points. [`normalize_geo_polygon`]
//! removes those jumps with a running-sum unwrap, [`denormalize_geo_polygon`]
//! folds every longitude back into the canonical range.
//!
//! NaN and infinite positions are skipped throughout: they are neither shifted
//! nor used for the jump detection or the longitude range.

use serde::{Deserialize, Serialize};

use crate::types::GeoPos;

/// How much unwrapping [`normalize_geo_polygon`] had to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationOutcome {
    /// All longitudes stayed within `[-180, 180]`
    None,
    /// Longitudes were unwrapped beyond +180
    Negative,
    /// Longitudes were unwrapped below -180 and the polygon was shifted by +360
    Positive,
    /// Both directions were observed; the polygon spans more than one window
    /// and was left without a global shift
    Both,
}

impl NormalizationOutcome {
    /// True unless the polygon was left untouched
    pub fn is_normalized(self) -> bool {
        self != NormalizationOutcome::None
    }
}

/// Unwraps the longitudes of `polygon` in place.
///
/// The scan runs strictly from the first to the last point: each point
/// inherits every ±360 increment caused by the jumps before it. A jump is a
/// difference of more than 180° between the original longitudes of a point and
/// its previous valid neighbour.
///
/// A polygon that only drifted below -180 is shifted by +360 as a whole, so
/// that it is expressed on the positive side.
pub fn normalize_geo_polygon(polygon: &mut [GeoPos]) -> NormalizationOutcome {
    let Some(first) = polygon.iter().position(GeoPos::is_finite) else {
        return NormalizationOutcome::None;
    };

    let mut previous_lon = polygon[first].lon;
    let mut increment = 0.0;
    let mut min_lon = previous_lon;
    let mut max_lon = previous_lon;

    for pos in polygon.iter_mut().skip(first + 1) {
        if !pos.is_finite() {
            continue;
        }
        let original_lon = pos.lon;
        let lon_diff = original_lon - previous_lon;
        if lon_diff > 180.0 {
            increment -= 360.0;
        } else if lon_diff < -180.0 {
            increment += 360.0;
        }
        previous_lon = original_lon;

        pos.lon += increment;
        min_lon = min_lon.min(pos.lon);
        max_lon = max_lon.max(pos.lon);
    }

    let pos_normalized = min_lon < -180.0;
    let neg_normalized = max_lon > 180.0;

    let outcome = match (neg_normalized, pos_normalized) {
        (true, false) => NormalizationOutcome::Negative,
        (false, true) => {
            for pos in polygon.iter_mut().filter(|p| p.is_finite()) {
                pos.lon += 360.0;
            }
            NormalizationOutcome::Positive
        }
        (true, true) => {
            log::warn!(
                "boundary spans more than 360 degrees of longitude ({min_lon:.3} to {max_lon:.3}); \
                 left without global shift"
            );
            NormalizationOutcome::Both
        }
        (false, false) => NormalizationOutcome::None,
    };

    log::debug!(
        "normalized {} positions: {outcome:?}, longitude range [{min_lon:.3}, {max_lon:.3}]",
        polygon.len()
    );
    outcome
}

/// Folds every longitude of `polygon` back into the canonical range.
///
/// Works on each point independently, in any order.
pub fn denormalize_geo_polygon(polygon: &mut [GeoPos]) {
    for pos in polygon.iter_mut() {
        denormalize_geo_pos(pos);
    }
}

/// Folds the longitude of `pos` back into the canonical range by subtracting a
/// whole multiple of 360.
pub fn denormalize_geo_pos(pos: &mut GeoPos) {
    let factor = if pos.lon >= 0.0 {
        ((pos.lon + 180.0) / 360.0).trunc()
    } else {
        ((pos.lon - 180.0) / 360.0).trunc()
    };
    pos.lon -= factor * 360.0;
}
