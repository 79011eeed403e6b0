//! CLI-specific utilities for geoboundary
//!
//! Argument parsing helpers and output rendering, kept apart from the
//! geometry library.

pub mod output;

use clap::ValueEnum;
use geoboundary_geometry::{Error, PixelRect, Result};

pub use output::{boundary_report, feature_collection, write_json};

/// Output document produced by the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// GeoJSON FeatureCollection, one Polygon per sub-path
    Geojson,
    /// Normalized boundary positions and normalization outcome
    Boundary,
}

/// Output destination types
#[derive(Debug, PartialEq, Eq)]
pub enum OutputDestination {
    File(String),
    Stdout,
}

/// Resolve output destination from CLI arguments
pub fn resolve_output(output: &str) -> OutputDestination {
    if output == "-" || output.is_empty() {
        OutputDestination::Stdout
    } else {
        OutputDestination::File(output.to_string())
    }
}

/// Splits a comma separated list into exactly `N` numbers.
fn parse_tuple<T: std::str::FromStr, const N: usize>(value: &str, what: &str) -> Result<[T; N]> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(Error::InvalidInput(format!(
            "{what} needs {N} comma separated values, got {}: '{value}'",
            parts.len()
        )));
    }

    let mut numbers = Vec::with_capacity(N);
    for part in parts {
        let number = part
            .parse::<T>()
            .map_err(|_| Error::InvalidInput(format!("{what}: '{part}' is not a number")))?;
        numbers.push(number);
    }
    numbers
        .try_into()
        .map_err(|_| Error::InvalidInput(format!("{what}: expected {N} values")))
}

/// Parses `x,y,width,height` into a pixel rectangle
pub fn parse_region(value: &str) -> Result<PixelRect> {
    let [x, y, width, height] = parse_tuple::<i32, 4>(value, "region")?;
    PixelRect::new(x, y, width, height)
}

/// Parses the six affine coefficients `c0,..,c5`
pub fn parse_affine(value: &str) -> Result<[f64; 6]> {
    parse_tuple::<f64, 6>(value, "affine transform")
}
