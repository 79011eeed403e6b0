//! Assembly of normalized boundaries into per-window planar paths
//!
//! A normalized boundary may extend beyond ±180°. Renderers and area
//! computations need coordinates inside `[-180, 180]`, so the boundary is cut
//! at every 360° window it touches and each piece is shifted back into the
//! canonical window.

use geo::{Coord, Rect};

use crate::area::AreaEngine;
use crate::types::{GeoPos, SubPath};

/// Longitude range of the valid points of a boundary
#[derive(Debug, Clone, Copy, PartialEq)]
struct LonRange {
    min: f64,
    max: f64,
}

impl LonRange {
    fn run_indices(&self) -> (i32, i32) {
        (run_index(self.min), run_index(self.max))
    }
}

/// Index `k` of the window `[k*360 - 180, k*360 + 180)` containing `lon`
pub fn run_index(lon: f64) -> i32 {
    ((lon + 180.0) / 360.0).floor() as i32
}

/// Window rectangle `[k*360 - 180, k*360 + 180] x [-90, 90]`
pub fn run_window(k: i32) -> Rect<f64> {
    let center = f64::from(k) * 360.0;
    Rect::new(
        Coord {
            x: center - 180.0,
            y: -90.0,
        },
        Coord {
            x: center + 180.0,
            y: 90.0,
        },
    )
}

/// Collects the (lon, lat) pairs of `geo_points` as planar coordinates,
/// dropping NaN and infinite positions, and tracks their longitude range.
fn fill_path(geo_points: &[GeoPos]) -> (Vec<Coord<f64>>, Option<LonRange>) {
    let mut coords = Vec::with_capacity(geo_points.len());
    let mut range: Option<LonRange> = None;
    for pos in geo_points.iter().filter(|p| p.is_finite()) {
        range = Some(match range {
            Some(r) => LonRange {
                min: r.min.min(pos.lon),
                max: r.max.max(pos.lon),
            },
            None => LonRange {
                min: pos.lon,
                max: pos.lon,
            },
        });
        coords.push(Coord::from(*pos));
    }
    (coords, range)
}

/// Turns a normalized boundary into closed paths inside `[-180, 180]`.
///
/// Boundaries with fewer than two points produce no path. A boundary lying in
/// a single 360° window `k` is shifted by `-k*360` and returned as the only
/// path, without touching the area engine. Otherwise the boundary area is intersected with
/// every window from the lowest to the highest it reaches; each non-empty piece
/// is shifted by `-k*360` and split into its simple closed sub-paths.
pub fn assemble_path_list<E>(geo_points: &[GeoPos], engine: &E) -> Vec<SubPath>
where
    E: AreaEngine + ?Sized,
{
    let mut path_list = Vec::new();
    if geo_points.len() < 2 {
        return path_list;
    }

    let (coords, range) = fill_path(geo_points);
    let Some(range) = range else {
        log::debug!("boundary of {} positions has no valid position", geo_points.len());
        return path_list;
    };

    let (run_index_min, run_index_max) = range.run_indices();
    if run_index_min == run_index_max {
        let translate_x = -f64::from(run_index_min) * 360.0;
        let points = coords
            .into_iter()
            .map(|c| Coord {
                x: c.x + translate_x,
                y: c.y,
            })
            .collect();
        path_list.push(SubPath::new(run_index_min, points));
        return path_list;
    }

    log::debug!(
        "boundary spans longitude [{:.3}, {:.3}]: splitting over windows {}..={}",
        range.min,
        range.max,
        run_index_min,
        run_index_max
    );

    let path = engine.build_closed_path(&coords);
    for k in run_index_min..=run_index_max {
        let area = engine.intersect(&path, &run_window(k));
        let translate_x = -f64::from(k) * 360.0;
        path_list.extend(
            engine
                .decompose(&area, translate_x)
                .into_iter()
                .map(|points| SubPath::new(k, points)),
        );
    }
    path_list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::GeoAreaEngine;
    use std::cell::Cell;

    /// Area engine that records how often it is used
    #[derive(Default)]
    struct CountingEngine {
        inner: GeoAreaEngine,
        intersections: Cell<usize>,
    }

    impl AreaEngine for CountingEngine {
        type Path = <GeoAreaEngine as AreaEngine>::Path;
        type Area = <GeoAreaEngine as AreaEngine>::Area;

        fn build_closed_path(&self, points: &[Coord<f64>]) -> Self::Path {
            self.inner.build_closed_path(points)
        }

        fn intersect(&self, path: &Self::Path, window: &Rect<f64>) -> Self::Area {
            self.intersections.set(self.intersections.get() + 1);
            self.inner.intersect(path, window)
        }

        fn decompose(&self, area: &Self::Area, translate_x: f64) -> Vec<Vec<Coord<f64>>> {
            self.inner.decompose(area, translate_x)
        }
    }

    fn boundary(coords: &[(f64, f64)]) -> Vec<GeoPos> {
        coords.iter().map(|&(lon, lat)| GeoPos::new(lon, lat)).collect()
    }

    #[test]
    fn test_run_index() {
        assert_eq!(run_index(-180.0), 0);
        assert_eq!(run_index(0.0), 0);
        assert_eq!(run_index(179.999), 0);
        assert_eq!(run_index(180.0), 1);
        assert_eq!(run_index(-180.001), -1);
        assert_eq!(run_index(540.0), 2);
    }

    #[test]
    fn test_run_window_bounds() {
        let window = run_window(-1);
        assert_eq!(window.min(), Coord { x: -540.0, y: -90.0 });
        assert_eq!(window.max(), Coord { x: -180.0, y: 90.0 });
    }

    #[test]
    fn test_too_few_points_yield_no_path() {
        let engine = GeoAreaEngine;
        assert!(assemble_path_list(&[], &engine).is_empty());
        assert!(assemble_path_list(&boundary(&[(10.0, 10.0)]), &engine).is_empty());
    }

    #[test]
    fn test_single_window_is_returned_unchanged() {
        let engine = CountingEngine::default();
        let points = boundary(&[(10.0, 0.0), (20.0, 0.0), (20.0, 10.0), (10.0, 10.0)]);

        let paths = assemble_path_list(&points, &engine);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].run_index, 0);
        let expected: Vec<Coord<f64>> = points.iter().map(|p| Coord::from(*p)).collect();
        assert_eq!(paths[0].points, expected);
        assert_eq!(engine.intersections.get(), 0);
    }

    #[test]
    fn test_single_shifted_window_moves_into_canonical_range() {
        let engine = CountingEngine::default();
        let points = boundary(&[(190.0, 0.0), (200.0, 0.0), (200.0, 10.0)]);

        let paths = assemble_path_list(&points, &engine);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].run_index, 1);
        assert_eq!(
            paths[0].points,
            vec![
                Coord { x: -170.0, y: 0.0 },
                Coord { x: -160.0, y: 0.0 },
                Coord { x: -160.0, y: 10.0 },
            ]
        );
        assert_eq!(engine.intersections.get(), 0);

        let points = boundary(&[(-200.0, 0.0), (-190.0, 0.0), (-190.0, 10.0)]);
        let paths = assemble_path_list(&points, &engine);
        assert_eq!(paths[0].run_index, -1);
        assert_eq!(paths[0].lon_range(), Some((160.0, 170.0)));
    }

    #[test]
    fn test_infinite_positions_are_skipped() {
        let engine = CountingEngine::default();
        let points = vec![
            GeoPos::new(10.0, 0.0),
            GeoPos::new(f64::INFINITY, 0.0),
            GeoPos::new(20.0, 0.0),
            GeoPos::new(20.0, f64::NEG_INFINITY),
            GeoPos::new(20.0, 10.0),
        ];

        let paths = assemble_path_list(&points, &engine);

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 3);
        assert_eq!(engine.intersections.get(), 0);
    }

    #[test]
    fn test_crossing_boundary_splits_into_two_windows() {
        let engine = CountingEngine::default();
        let points = boundary(&[(170.0, -10.0), (200.0, -10.0), (200.0, 10.0), (170.0, 10.0)]);

        let paths = assemble_path_list(&points, &engine);

        assert_eq!(engine.intersections.get(), 2);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].run_index, 0);
        assert_eq!(paths[1].run_index, 1);

        let (min0, max0) = paths[0].lon_range().unwrap();
        assert!((min0 - 170.0).abs() < 1e-6 && (max0 - 180.0).abs() < 1e-6);
        let (min1, max1) = paths[1].lon_range().unwrap();
        assert!((min1 + 180.0).abs() < 1e-6 && (max1 + 160.0).abs() < 1e-6);
    }

    #[test]
    fn test_nan_positions_are_connected_through() {
        let engine = CountingEngine::default();
        let points = vec![
            GeoPos::new(10.0, 0.0),
            GeoPos::new(f64::NAN, f64::NAN),
            GeoPos::new(20.0, 0.0),
            GeoPos::new(20.0, f64::NAN),
            GeoPos::new(20.0, 10.0),
        ];

        let paths = assemble_path_list(&points, &engine);

        assert_eq!(paths.len(), 1);
        assert_eq!(
            paths[0].points,
            vec![
                Coord { x: 10.0, y: 0.0 },
                Coord { x: 20.0, y: 0.0 },
                Coord { x: 20.0, y: 10.0 },
            ]
        );
    }

    #[test]
    fn test_nan_longitude_does_not_widen_range() {
        let engine = CountingEngine::default();
        let points = vec![
            GeoPos::new(f64::NAN, 0.0),
            GeoPos::new(170.0, 0.0),
            GeoPos::new(175.0, 5.0),
            GeoPos::new(172.0, 8.0),
        ];

        let paths = assemble_path_list(&points, &engine);

        assert_eq!(paths.len(), 1);
        assert_eq!(engine.intersections.get(), 0);
    }

    #[test]
    fn test_all_nan_boundary_yields_no_path() {
        let engine = GeoAreaEngine;
        let points = vec![GeoPos::new(f64::NAN, f64::NAN); 4];
        assert!(assemble_path_list(&points, &engine).is_empty());
    }
}
