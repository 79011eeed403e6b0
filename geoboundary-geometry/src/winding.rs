//! Rotation direction of geographic polygons

use crate::types::GeoPos;

/// Sum of the signed turning angles of `polygon`, in radians.
///
/// For every vertex triplet `(p[i], p[i+1], p[i+2])`, indices taken modulo the
/// length, the angle between the two edge vectors is added. A simple polygon
/// traversed counter-clockwise in the lon/lat plane yields `+2π`, clockwise
/// `-2π`.
///
/// NaN and infinite positions are ignored and repeated consecutive vertices
/// count once, so no edge has zero length. Fewer than three distinct vertices
/// enclose nothing and sum to `0`.
pub fn angle_sum(polygon: &[GeoPos]) -> f64 {
    let mut vertices: Vec<GeoPos> = polygon.iter().copied().filter(GeoPos::is_finite).collect();
    vertices.dedup();
    while vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }

    let length = vertices.len();
    if length < 3 {
        return 0.0;
    }

    let mut angle_sum = 0.0;
    for i in 0..length {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % length];
        let p3 = vertices[(i + 2) % length];
        let ax = p2.lon - p1.lon;
        let ay = p2.lat - p1.lat;
        let bx = p3.lon - p2.lon;
        let by = p3.lat - p2.lat;
        let a = ax.hypot(ay);
        let b = bx.hypot(by);
        let cos_ab = (ax * bx + ay * by) / (a * b);
        let sin_ab = (ax * by - ay * bx) / (a * b);
        angle_sum += sin_ab.atan2(cos_ab);
    }
    angle_sum
}

/// `1` for a counter-clockwise polygon, `-1` otherwise
pub fn rotation_direction(polygon: &[GeoPos]) -> i32 {
    if angle_sum(polygon) > 0.0 {
        1
    } else {
        -1
    }
}
