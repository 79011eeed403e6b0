//! Value types flowing through the boundary pipeline

use geo::Coord;
use geoboundary_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// A position in raster pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: f64,
    pub y: f64,
}

impl PixelPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A geographic position in degrees
///
/// Longitude is cyclic modulo 360 and is never clamped here: normalized
/// polygons legitimately carry longitudes outside `[-180, 180)`. Latitude is
/// passed through unchanged as well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPos {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPos {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// True if either coordinate is NaN
    pub fn is_nan(&self) -> bool {
        self.lon.is_nan() || self.lat.is_nan()
    }

    /// True if both coordinates are neither NaN nor infinite
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl From<GeoPos> for Coord<f64> {
    fn from(pos: GeoPos) -> Self {
        Coord {
            x: pos.lon,
            y: pos.lat,
        }
    }
}

/// An axis-aligned rectangle in integer pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl PixelRect {
    /// Creates a rectangle, rejecting negative extents.
    ///
    /// Zero-sized rectangles are accepted; tracing them yields corner points only.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(Error::InvalidRectangle { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Rectangle covering a whole raster of the given size
    pub fn of_raster(width: i32, height: i32) -> Result<Self> {
        Self::new(0, 0, width, height)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

/// A closed planar path lying in one 360° longitude window
///
/// Points use `x = lon`, `y = lat`. The path is implicitly closed: the last
/// point connects back to the first and is not repeated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubPath {
    /// Window `[k*360 - 180, k*360 + 180]` the path was extracted from
    pub run_index: i32,
    pub points: Vec<Coord<f64>>,
}

impl SubPath {
    pub fn new(run_index: i32, points: Vec<Coord<f64>>) -> Self {
        Self { run_index, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Minimum and maximum longitude, `None` for an empty path
    pub fn lon_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let min = self.points.iter().map(|c| c.x).fold(f64::INFINITY, f64::min);
        let max = self
            .points
            .iter()
            .map(|c| c.x)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}
