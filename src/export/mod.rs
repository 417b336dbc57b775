use geojson::{Feature, FeatureCollection, GeoJson, JsonObject, JsonValue};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{BoundaryGeometry, CRS, DistrictRecord};

fn to_geojson_geometry(geometry: &BoundaryGeometry) -> geojson::Geometry {
    let value = match geometry {
        BoundaryGeometry::Single(polygon) => geojson::Value::from(polygon),
        BoundaryGeometry::Multi(multi) => geojson::Value::from(multi),
    };
    geojson::Geometry::new(value)
}

fn crs_member() -> JsonObject {
    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), JsonValue::from(CRS));

    let mut crs = JsonObject::new();
    crs.insert("type".to_string(), JsonValue::from("name"));
    crs.insert("properties".to_string(), JsonValue::from(properties));

    let mut members = JsonObject::new();
    members.insert("crs".to_string(), JsonValue::from(crs));
    members
}

/// Serialize one district record as a single-feature GeoJSON file at
/// `<output_dir>/<name>/<name>_boundary.geojson`.
///
/// The district subdirectory is created if absent. Returns the written path.
pub fn write_district(record: &DistrictRecord, output_dir: &Path) -> std::io::Result<PathBuf> {
    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), JsonValue::from(record.name.as_str()));

    let feature = Feature {
        bbox: None,
        geometry: Some(to_geojson_geometry(&record.geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    };

    let collection = FeatureCollection {
        bbox: None,
        features: vec![feature],
        foreign_members: Some(crs_member()),
    };

    let district_dir = output_dir.join(&record.name);
    fs::create_dir_all(&district_dir)?;

    let path = district_dir.join(format!("{}_boundary.geojson", record.name));
    fs::write(&path, GeoJson::from(collection).to_string())?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn sample_record(name: &str) -> DistrictRecord {
        DistrictRecord {
            name: name.to_string(),
            geometry: BoundaryGeometry::Single(polygon![
                (x: 11.0, y: 48.0),
                (x: 11.1, y: 48.0),
                (x: 11.1, y: 48.1),
            ]),
        }
    }

    #[test]
    fn test_write_district_creates_subdirectory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let record = sample_record("Landkreis Starnberg");

        let path = write_district(&record, dir.path()).unwrap();

        assert_eq!(
            path,
            dir.path()
                .join("Landkreis Starnberg")
                .join("Landkreis Starnberg_boundary.geojson")
        );
        assert!(path.exists());
    }

    #[test]
    fn test_write_district_is_idempotent_on_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let record = sample_record("Ansbach");

        write_district(&record, dir.path()).unwrap();
        // Second write into the already-existing subdirectory must not fail.
        write_district(&record, dir.path()).unwrap();
    }

    #[test]
    fn test_written_file_carries_name_and_crs() {
        let dir = tempfile::tempdir().unwrap();
        let record = sample_record("München");

        let path = write_district(&record, dir.path()).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();

        assert_eq!(parsed["type"], "FeatureCollection");
        assert_eq!(parsed["crs"]["properties"]["name"], "EPSG:4326");
        assert_eq!(parsed["features"][0]["properties"]["name"], "München");
        assert_eq!(parsed["features"][0]["geometry"]["type"], "Polygon");
    }

    #[test]
    fn test_multi_polygon_geometry_is_written_as_multipolygon() {
        let dir = tempfile::tempdir().unwrap();
        let second = polygon![
            (x: 12.0, y: 49.0),
            (x: 12.1, y: 49.0),
            (x: 12.1, y: 49.1),
        ];
        let record = DistrictRecord {
            name: "Landkreis Hof".to_string(),
            geometry: BoundaryGeometry::Multi(geo::MultiPolygon(vec![
                polygon![
                    (x: 11.0, y: 48.0),
                    (x: 11.1, y: 48.0),
                    (x: 11.1, y: 48.1),
                ],
                second,
            ])),
        };

        let path = write_district(&record, dir.path()).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();

        assert_eq!(parsed["features"][0]["geometry"]["type"], "MultiPolygon");
        assert_eq!(
            parsed["features"][0]["geometry"]["coordinates"]
                .as_array()
                .unwrap()
                .len(),
            2
        );
    }
}
