//! Error types for the geoboundary toolkit
//!
//! One error enum is shared by the geometry library and the command line tool so
//! that precondition failures surface unchanged at every layer.

use thiserror::Error;

/// Main error type for geoboundary operations
#[derive(Debug, Error)]
pub enum Error {
    /// The raster has no pixel-to-geographic transform.
    ///
    /// Raised once, before any boundary sampling takes place.
    #[error("Raster has no geo-coding: pixel positions cannot be mapped to geographic positions")]
    NoGeoCoding,

    /// A rectangle with negative extent was supplied
    #[error("Invalid rectangle: width {width} and height {height} must not be negative")]
    InvalidRectangle { width: i32, height: i32 },

    /// The geo-coding failed to map a single pixel position
    #[error("Geo-coding failed at pixel ({x}, {y}): {reason}")]
    GeoTransform { x: f64, y: f64, reason: String },

    /// Invalid configuration or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Builds a [`Error::GeoTransform`] for the given pixel position
    pub fn geo_transform(x: f64, y: f64, reason: impl Into<String>) -> Self {
        Error::GeoTransform {
            x,
            y,
            reason: reason.into(),
        }
    }
}

/// Convenience result type for geoboundary operations
pub type Result<T> = std::result::Result<T, Error>;
