//! Projection of pixel boundaries into geographic coordinates

use geoboundary_common::{Error, Result};

use crate::geocoding::GeoCoding;
use crate::trace::create_rect_boundary;
use crate::types::{GeoPos, PixelPos, PixelRect};

/// Maps every pixel point through `geo_coding`, preserving order and length.
///
/// The first failing point aborts the projection with its error.
pub fn project_boundary<G>(pixels: &[PixelPos], geo_coding: &G) -> Result<Vec<GeoPos>>
where
    G: GeoCoding + ?Sized,
{
    pixels
        .iter()
        .map(|pixel| geo_coding.pixel_to_geo(*pixel))
        .collect()
}

/// Creates the geographic boundary of `rect`.
///
/// Fails with [`Error::NoGeoCoding`] before any sampling when `geo_coding`
/// cannot map pixel positions.
pub fn create_geo_boundary<G>(
    rect: &PixelRect,
    step: i32,
    use_pixel_center: bool,
    geo_coding: &G,
) -> Result<Vec<GeoPos>>
where
    G: GeoCoding + ?Sized,
{
    if !geo_coding.can_get_geo_pos() {
        return Err(Error::NoGeoCoding);
    }
    let pixels = create_rect_boundary(rect, step, use_pixel_center);
    log::trace!(
        "projecting {} boundary points of {}x{} region at ({}, {})",
        pixels.len(),
        rect.width(),
        rect.height(),
        rect.x(),
        rect.y()
    );
    project_boundary(&pixels, geo_coding)
}
