//! JSON documents written by the tool

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use geoboundary_geometry::{rotation_direction, GeoPos, NormalizationOutcome, SubPath};
use serde::Serialize;
use serde_json::{json, Value};

use super::OutputDestination;

/// Normalized boundary as printed by `--format boundary`
#[derive(Debug, Serialize)]
pub struct BoundaryReport<'a> {
    pub outcome: NormalizationOutcome,
    /// +1 for counter-clockwise, -1 for clockwise in lon/lat space
    pub rotation_direction: i32,
    pub positions: &'a [GeoPos],
}

pub fn boundary_report(outcome: NormalizationOutcome, positions: &[GeoPos]) -> BoundaryReport<'_> {
    BoundaryReport {
        outcome,
        rotation_direction: rotation_direction(positions),
        positions,
    }
}

/// GeoJSON FeatureCollection with one Polygon feature per sub-path.
///
/// GeoJSON rings are explicitly closed, so the first point of every sub-path is
/// repeated at the end.
pub fn feature_collection(paths: &[SubPath]) -> Value {
    let features: Vec<Value> = paths
        .iter()
        .map(|path| {
            let mut ring: Vec<[f64; 2]> = path.points.iter().map(|c| [c.x, c.y]).collect();
            if let Some(first) = ring.first().copied() {
                ring.push(first);
            }
            json!({
                "type": "Feature",
                "properties": { "run_index": path.run_index },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [ring],
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Writes `document` as pretty-printed JSON followed by a newline
pub fn write_json<T: Serialize>(document: &T, destination: &OutputDestination) -> Result<()> {
    match destination {
        OutputDestination::Stdout => {
            let stdout = io::stdout();
            write_to(document, stdout.lock()).context("Failed to write to stdout")
        }
        OutputDestination::File(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to create {path}"))?;
            write_to(document, BufWriter::new(file))
                .with_context(|| format!("Failed to write {path}"))
        }
    }
}

fn write_to<T: Serialize, W: Write>(document: &T, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, document)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;

    #[test]
    fn test_feature_collection_closes_rings() {
        let paths = vec![SubPath::new(
            1,
            vec![
                Coord { x: -180.0, y: 0.0 },
                Coord { x: -175.0, y: 0.0 },
                Coord { x: -175.0, y: 10.0 },
            ],
        )];

        let doc = feature_collection(&paths);

        assert_eq!(doc["type"], "FeatureCollection");
        let feature = &doc["features"][0];
        assert_eq!(feature["properties"]["run_index"], 1);
        assert_eq!(feature["geometry"]["type"], "Polygon");
        let ring = feature["geometry"]["coordinates"][0].as_array().unwrap();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], ring[3]);
        assert_eq!(ring[1], json!([-175.0, 0.0]));
    }

    #[test]
    fn test_empty_collection() {
        let doc = feature_collection(&[]);
        assert_eq!(doc["features"], json!([]));
    }

    #[test]
    fn test_boundary_report_json() {
        let positions = vec![
            GeoPos::new(170.0, 10.0),
            GeoPos::new(190.0, 10.0),
            GeoPos::new(190.0, 0.0),
            GeoPos::new(170.0, 0.0),
        ];
        let report = boundary_report(NormalizationOutcome::Negative, &positions);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["outcome"], "negative");
        assert_eq!(value["rotation_direction"], -1);
        assert_eq!(value["positions"][1], json!({ "lon": 190.0, "lat": 10.0 }));
    }

    #[test]
    fn test_write_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let destination = OutputDestination::File(path.to_string_lossy().into_owned());

        write_json(&json!({ "ok": true }), &destination).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.ends_with('\n'));
        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["ok"], true);
    }
}
