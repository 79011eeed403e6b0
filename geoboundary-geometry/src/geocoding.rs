//! Pixel to geographic transforms
//!
//! The boundary pipeline only consumes the [`GeoCoding`] trait. [`AffineGeoCoding`]
//! is the one concrete transform shipped with the crate; it covers map-projected
//! rasters on a plate carrée grid, which is what the command line tool and the
//! tests need.

use geoboundary_common::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::types::{GeoPos, PixelPos};

/// Maps raster pixel positions to geographic positions.
///
/// Implementations are read-only during boundary extraction, so one instance
/// can serve several extractions running on different threads.
pub trait GeoCoding: Send + Sync {
    /// Whether this geo-coding can map pixel positions at all
    fn can_get_geo_pos(&self) -> bool;

    /// Maps a single pixel position.
    ///
    /// Failures are reported as errors and are never replaced by sentinel
    /// positions; callers propagate them.
    fn pixel_to_geo(&self, pixel: PixelPos) -> Result<GeoPos>;
}

impl<G: GeoCoding + ?Sized> GeoCoding for &G {
    fn can_get_geo_pos(&self) -> bool {
        (**self).can_get_geo_pos()
    }

    fn pixel_to_geo(&self, pixel: PixelPos) -> Result<GeoPos> {
        (**self).pixel_to_geo(pixel)
    }
}

impl<G: GeoCoding + ?Sized> GeoCoding for Box<G> {
    fn can_get_geo_pos(&self) -> bool {
        (**self).can_get_geo_pos()
    }

    fn pixel_to_geo(&self, pixel: PixelPos) -> Result<GeoPos> {
        (**self).pixel_to_geo(pixel)
    }
}

/// A missing geo-coding: `None` cannot map anything.
impl<G: GeoCoding> GeoCoding for Option<G> {
    fn can_get_geo_pos(&self) -> bool {
        self.as_ref().is_some_and(GeoCoding::can_get_geo_pos)
    }

    fn pixel_to_geo(&self, pixel: PixelPos) -> Result<GeoPos> {
        match self {
            Some(geo_coding) => geo_coding.pixel_to_geo(pixel),
            None => Err(Error::NoGeoCoding),
        }
    }
}

/// Affine pixel to lon/lat transform.
///
/// Uses the familiar six-coefficient layout:
///
/// ```text
/// lon = c[0] + x * c[1] + y * c[2]
/// lat = c[3] + x * c[4] + y * c[5]
/// ```
///
/// With `wrap_longitude` every longitude is folded into `[-180, 180)`, which is
/// how satellite geo-codings report positions: each pixel independently, with a
/// jump of almost 360° where the swath crosses the antimeridian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffineGeoCoding {
    coefficients: [f64; 6],
    wrap_longitude: bool,
}

impl AffineGeoCoding {
    pub fn new(coefficients: [f64; 6], wrap_longitude: bool) -> Result<Self> {
        if let Some(bad) = coefficients.iter().find(|c| !c.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "affine coefficients must be finite, got {bad}"
            )));
        }
        Ok(Self {
            coefficients,
            wrap_longitude,
        })
    }

    /// North-up grid with square cells of `cell_size` degrees whose upper-left
    /// pixel corner sits at (`west`, `north`).
    pub fn north_up(west: f64, north: f64, cell_size: f64, wrap_longitude: bool) -> Result<Self> {
        Self::new([west, cell_size, 0.0, north, 0.0, -cell_size], wrap_longitude)
    }

    pub fn coefficients(&self) -> &[f64; 6] {
        &self.coefficients
    }

    pub fn wraps_longitude(&self) -> bool {
        self.wrap_longitude
    }
}

impl GeoCoding for AffineGeoCoding {
    fn can_get_geo_pos(&self) -> bool {
        true
    }

    fn pixel_to_geo(&self, pixel: PixelPos) -> Result<GeoPos> {
        let c = &self.coefficients;
        let lon = c[0] + pixel.x * c[1] + pixel.y * c[2];
        let lat = c[3] + pixel.x * c[4] + pixel.y * c[5];
        let lon = if self.wrap_longitude {
            wrap_longitude(lon)
        } else {
            lon
        };
        Ok(GeoPos::new(lon, lat))
    }
}

/// Folds a longitude into `[-180, 180)`
pub fn wrap_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}
