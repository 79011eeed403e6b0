//! Pixel boundary tracing
//!
//! Walks the perimeter of a pixel rectangle clockwise from the top-left corner
//! and emits a point every `step` pixels. The four corners are always part of
//! the result; the first point is not repeated at the end.

use crate::types::{PixelPos, PixelRect};

/// Upper bound of the up-front allocation; longer boundaries grow on demand
const MAX_PREALLOCATED_POINTS: i64 = 1 << 16;

/// Creates the pixel boundary of `rect`.
///
/// With `use_pixel_center` the points sit on pixel centres (`+0.5`) and the
/// right/bottom edges run through the last pixel row/column instead of the
/// outer pixel border. A `step <= 0` disables subsampling so that only the
/// corners are emitted.
pub fn create_rect_boundary(rect: &PixelRect, step: i32, use_pixel_center: bool) -> Vec<PixelPos> {
    // i64 keeps `x + width` and the stepping exact for any valid rectangle
    let width = i64::from(rect.width());
    let height = i64::from(rect.height());
    let inset = if use_pixel_center { 0.5 } else { 0.0 };
    let x1 = i64::from(rect.x());
    let y1 = i64::from(rect.y());
    let w = if use_pixel_center { width - 1 } else { width };
    let h = if use_pixel_center { height - 1 } else { height };
    let x2 = x1 + w;
    let y2 = y1 + h;

    let step = if step <= 0 {
        // don't step
        (2 * width.max(height)).max(1)
    } else {
        i64::from(step)
    };

    let capacity = (2 * (width + height) / step + 10).clamp(4, MAX_PREALLOCATED_POINTS);
    let mut points = Vec::with_capacity(capacity as usize);
    let at = |x: i64, y: i64| PixelPos::new(x as f64 + inset, y as f64 + inset);

    let mut last_x = x1;
    let mut x = x1;
    while x < x2 {
        points.push(at(x, y1));
        last_x = x;
        x += step;
    }

    let mut last_y = y1;
    let mut y = y1;
    while y < y2 {
        points.push(at(x2, y));
        last_y = y;
        y += step;
    }

    points.push(at(x2, y2));

    let mut x = last_x;
    while x > x1 {
        points.push(at(x, y2));
        x -= step;
    }

    points.push(at(x1, y2));

    let mut y = last_y;
    while y > y1 {
        points.push(at(x1, y));
        y -= step;
    }

    points
}

/// Creates the pixel boundary of `region`, or of the whole `width` x `height`
/// raster when no region is given.
pub fn create_pixel_boundary(
    width: i32,
    height: i32,
    region: Option<&PixelRect>,
    step: i32,
    use_pixel_center: bool,
) -> geoboundary_common::Result<Vec<PixelPos>> {
    let rect = match region {
        Some(rect) => *rect,
        None => PixelRect::of_raster(width, height)?,
    };
    Ok(create_rect_boundary(&rect, step, use_pixel_center))
}
