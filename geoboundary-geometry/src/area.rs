//! Planar area operations used to split boundaries at longitude windows
//!
//! The assembler only needs three operations: build a closed path, intersect it
//! with an axis-aligned rectangle, and break the result into simple closed
//! sub-paths. [`AreaEngine`] captures exactly that, [`GeoAreaEngine`] implements
//! it with the boolean operations of the `geo` crate.

use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon, Rect};

/// Boolean area operations on planar paths
pub trait AreaEngine {
    /// A closed planar path
    type Path;
    /// The area resulting from an intersection
    type Area;

    /// Builds a closed path through `points`; the last point connects back to
    /// the first.
    fn build_closed_path(&self, points: &[Coord<f64>]) -> Self::Path;

    /// Intersects the area enclosed by `path` with `window`.
    fn intersect(&self, path: &Self::Path, window: &Rect<f64>) -> Self::Area;

    /// Splits `area` into simple closed point sequences, shifting every point
    /// by `translate_x` along the x axis. An empty area yields no sequences.
    ///
    /// Sequences are implicitly closed: the first point is not repeated.
    fn decompose(&self, area: &Self::Area, translate_x: f64) -> Vec<Vec<Coord<f64>>>;
}

/// [`AreaEngine`] backed by `geo` polygons and [`BooleanOps`]
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoAreaEngine;

impl AreaEngine for GeoAreaEngine {
    type Path = Polygon<f64>;
    type Area = MultiPolygon<f64>;

    fn build_closed_path(&self, points: &[Coord<f64>]) -> Polygon<f64> {
        Polygon::new(LineString::from(points.to_vec()), vec![])
    }

    fn intersect(&self, path: &Polygon<f64>, window: &Rect<f64>) -> MultiPolygon<f64> {
        path.intersection(&window.to_polygon())
    }

    fn decompose(&self, area: &MultiPolygon<f64>, translate_x: f64) -> Vec<Vec<Coord<f64>>> {
        let mut sub_paths = Vec::new();
        for polygon in area {
            for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
                if let Some(points) = open_ring(ring, translate_x) {
                    sub_paths.push(points);
                }
            }
        }
        sub_paths
    }
}

/// Drops the closing coordinate of `ring` and shifts the rest by `translate_x`.
///
/// Rings with fewer than three distinct vertices enclose nothing and are skipped.
fn open_ring(ring: &LineString<f64>, translate_x: f64) -> Option<Vec<Coord<f64>>> {
    let mut coords = ring.0.as_slice();
    if coords.len() > 1 && coords.first() == coords.last() {
        coords = &coords[..coords.len() - 1];
    }
    if coords.len() < 3 {
        return None;
    }
    Some(
        coords
            .iter()
            .map(|c| Coord {
                x: c.x + translate_x,
                y: c.y,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    fn coords(points: &[(f64, f64)]) -> Vec<Coord<f64>> {
        points.iter().map(|&(x, y)| Coord { x, y }).collect()
    }

    fn window(min_x: f64, max_x: f64) -> Rect<f64> {
        Rect::new(Coord { x: min_x, y: -90.0 }, Coord { x: max_x, y: 90.0 })
    }

    fn ring_area(points: &[Coord<f64>]) -> f64 {
        Polygon::new(LineString::from(points.to_vec()), vec![]).unsigned_area()
    }

    #[test]
    fn test_build_closed_path_closes_ring() {
        let engine = GeoAreaEngine;
        let path = engine.build_closed_path(&coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]));
        let exterior = &path.exterior().0;
        assert_eq!(exterior.len(), 4);
        assert_eq!(exterior.first(), exterior.last());
        assert!((path.unsigned_area() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_intersection_clips_to_window_and_translates() {
        let engine = GeoAreaEngine;
        let path = engine.build_closed_path(&coords(&[
            (170.0, -10.0),
            (200.0, -10.0),
            (200.0, 10.0),
            (170.0, 10.0),
        ]));

        let right = engine.intersect(&path, &window(180.0, 540.0));
        let pieces = engine.decompose(&right, -360.0);
        assert_eq!(pieces.len(), 1);
        for c in &pieces[0] {
            assert!(c.x >= -180.0 - 1e-6 && c.x <= -160.0 + 1e-6, "x = {}", c.x);
        }
        assert!((ring_area(&pieces[0]) - 400.0).abs() < 1e-3);

        let left = engine.intersect(&path, &window(-180.0, 180.0));
        let pieces = engine.decompose(&left, 0.0);
        assert_eq!(pieces.len(), 1);
        assert!((ring_area(&pieces[0]) - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_disjoint_window_yields_nothing() {
        let engine = GeoAreaEngine;
        let path = engine.build_closed_path(&coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]));
        let area = engine.intersect(&path, &window(180.0, 540.0));
        assert!(engine.decompose(&area, -360.0).is_empty());
    }

    #[test]
    fn test_decompose_emits_holes_as_separate_paths() {
        let engine = GeoAreaEngine;
        let outer = LineString::from(coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]));
        let hole = LineString::from(coords(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)]));
        let area = MultiPolygon::new(vec![Polygon::new(outer, vec![hole])]);

        let pieces = engine.decompose(&area, 5.0);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].len(), 4);
        assert_eq!(pieces[1].len(), 4);
        assert!(pieces[1].iter().all(|c| c.x >= 9.0 && c.x <= 11.0));
    }
}
