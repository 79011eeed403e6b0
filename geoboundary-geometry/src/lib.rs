//! # Geoboundary geometry
//!
//! Geographic outlines of raster regions that stay usable across the
//! antimeridian.
//!
//! ## Pipeline
//!
//! 1. [`create_rect_boundary`] samples the perimeter of a pixel rectangle
//! 2. [`create_geo_boundary`] maps every sample through a [`GeoCoding`]
//! 3. [`normalize_geo_polygon`] unwraps longitude jumps of ±360°
//! 4. [`assemble_path_list`] cuts the unwrapped outline at every 360° window it
//!    touches and shifts the pieces back into `[-180, 180]`
//!
//! ## Basic Usage
//!
//! ```rust
//! use geoboundary_geometry::{compute_geo_boundary_paths, AffineGeoCoding, PixelRect};
//!
//! # fn main() -> geoboundary_geometry::Result<()> {
//! // 0.1° cells starting at 175°E: the raster crosses the antimeridian
//! let geo_coding = AffineGeoCoding::north_up(175.0, 10.0, 0.1, true)?;
//! let rect = PixelRect::new(0, 0, 100, 100)?;
//!
//! let paths = compute_geo_boundary_paths(&rect, 10, true, &geo_coding)?;
//! assert_eq!(paths.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod area;
pub mod assemble;
pub mod geocoding;
pub mod normalize;
pub mod options;
pub mod project;
pub mod trace;
pub mod types;
pub mod winding;

pub use area::{AreaEngine, GeoAreaEngine};
pub use assemble::{assemble_path_list, run_index, run_window};
pub use geocoding::{wrap_longitude, AffineGeoCoding, GeoCoding};
pub use geoboundary_common::{Error, Result};
pub use normalize::{
    denormalize_geo_polygon, denormalize_geo_pos, normalize_geo_polygon, NormalizationOutcome,
};
pub use options::{default_step, BoundaryOptions};
pub use project::{create_geo_boundary, project_boundary};
pub use trace::{create_pixel_boundary, create_rect_boundary};
pub use types::{GeoPos, PixelPos, PixelRect, SubPath};
pub use winding::{angle_sum, rotation_direction};

use serde::{Deserialize, Serialize};

/// Computes the geographic boundary of `rect`.
///
/// The result is the raw projection of the pixel boundary; longitudes are as
/// delivered by `geo_coding`.
pub fn compute_geo_boundary<G>(
    rect: &PixelRect,
    step: i32,
    use_pixel_center: bool,
    geo_coding: &G,
) -> Result<Vec<GeoPos>>
where
    G: GeoCoding + ?Sized,
{
    create_geo_boundary(rect, step, use_pixel_center, geo_coding)
}

/// A geographic boundary after longitude normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBoundary {
    pub outcome: NormalizationOutcome,
    pub positions: Vec<GeoPos>,
}

/// Computes the geographic boundary of `rect` and unwraps its longitudes.
pub fn compute_normalized_geo_boundary<G>(
    rect: &PixelRect,
    step: i32,
    use_pixel_center: bool,
    geo_coding: &G,
) -> Result<NormalizedBoundary>
where
    G: GeoCoding + ?Sized,
{
    let mut positions = create_geo_boundary(rect, step, use_pixel_center, geo_coding)?;
    let outcome = normalize_geo_polygon(&mut positions);
    Ok(NormalizedBoundary { outcome, positions })
}

/// Computes the geographic boundary of `rect` as closed paths inside
/// `[-180, 180]`, using [`GeoAreaEngine`] for the window split.
pub fn compute_geo_boundary_paths<G>(
    rect: &PixelRect,
    step: i32,
    use_pixel_center: bool,
    geo_coding: &G,
) -> Result<Vec<SubPath>>
where
    G: GeoCoding + ?Sized,
{
    compute_geo_boundary_paths_with(rect, step, use_pixel_center, geo_coding, &GeoAreaEngine)
}

/// Same as [`compute_geo_boundary_paths`] with a caller-supplied area engine.
pub fn compute_geo_boundary_paths_with<G, E>(
    rect: &PixelRect,
    step: i32,
    use_pixel_center: bool,
    geo_coding: &G,
    engine: &E,
) -> Result<Vec<SubPath>>
where
    G: GeoCoding + ?Sized,
    E: AreaEngine + ?Sized,
{
    let boundary = compute_normalized_geo_boundary(rect, step, use_pixel_center, geo_coding)?;
    let paths = assemble_path_list(&boundary.positions, engine);
    log::debug!(
        "boundary of {} positions ({:?}) assembled into {} path(s)",
        boundary.positions.len(),
        boundary.outcome,
        paths.len()
    );
    Ok(paths)
}

/// Outlines `region`, or the whole `width` x `height` raster, with `options`.
pub fn outline_raster<G>(
    width: i32,
    height: i32,
    region: Option<&PixelRect>,
    options: &BoundaryOptions,
    geo_coding: &G,
) -> Result<Vec<SubPath>>
where
    G: GeoCoding + ?Sized,
{
    let rect = match region {
        Some(rect) => *rect,
        None => PixelRect::of_raster(width, height)?,
    };
    let step = options.resolve_step(&rect);
    compute_geo_boundary_paths(&rect, step, options.use_pixel_center, geo_coding)
}
