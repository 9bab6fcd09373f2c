//! ZIP boundary ingestion.
//!
//! Boundaries arrive either as the flattened `zipcodes.csv` export (one
//! row per ZIP, ring coordinates in a `coordinates_json` column) or as
//! the raw `GeoJSON` `FeatureCollection` the county API serves. Either
//! way the output is an ordered `Vec<ZipBoundary>` — order matters, it is
//! the tie-break order for overlapping boundaries downstream.

use std::path::Path;

use crime_dash_geography_models::{ZipBoundary, ZipGeometry};
use geojson::GeoJson;
use serde::Deserialize;

use crate::IngestError;

/// One row of the flattened `zipcodes.csv` export. Columns beyond the
/// ones we consume are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BoundaryRow {
    zip: Option<String>,
    geometry_type: Option<String>,
    coordinates_json: Option<String>,
}

/// Loads boundaries from a file, dispatching on extension: `.csv` is
/// treated as the flattened export, anything else as raw `GeoJSON`.
///
/// # Errors
///
/// Returns [`IngestError`] if the file cannot be read or parsed at the
/// container level. Bad individual features are skipped with a warning.
pub fn load(path: &Path) -> Result<Vec<ZipBoundary>, IngestError> {
    if path.extension().is_some_and(|ext| ext == "csv") {
        let file = std::fs::File::open(path)?;
        from_csv_reader(file)
    } else {
        let raw = std::fs::read_to_string(path)?;
        from_geojson_str(&raw)
    }
}

/// Parses boundaries from the flattened CSV export.
///
/// # Errors
///
/// Returns [`IngestError`] on CSV-level failures (malformed file). Rows
/// missing a ZIP or a parseable polygon geometry are skipped.
pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Vec<ZipBoundary>, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut boundaries = Vec::new();

    for (row_idx, row) in csv_reader.deserialize::<BoundaryRow>().enumerate() {
        let row = row?;

        let Some(zip) = row.zip.filter(|zip| !zip.is_empty()) else {
            log::warn!("zipcodes row {} has no ZIP, skipping", row_idx + 1);
            continue;
        };

        let Some(geometry) =
            parse_embedded_geometry(row.geometry_type.as_deref(), row.coordinates_json.as_deref())
        else {
            log::warn!("ZIP {zip} has no parseable polygon geometry, skipping");
            continue;
        };

        boundaries.push(ZipBoundary {
            zip_code: zip.clone(),
            name: zip,
            geometry,
        });
    }

    log::info!("Loaded {} ZIP boundaries", boundaries.len());
    Ok(boundaries)
}

/// Parses boundaries from a raw `GeoJSON` `FeatureCollection`.
///
/// Each feature needs a `zip` property and a Polygon/MultiPolygon
/// geometry; features missing either are skipped with a warning.
///
/// # Errors
///
/// Returns [`IngestError`] if the document is not valid `GeoJSON` or is
/// not a `FeatureCollection`.
pub fn from_geojson_str(raw: &str) -> Result<Vec<ZipBoundary>, IngestError> {
    let GeoJson::FeatureCollection(collection) = raw.parse::<GeoJson>()? else {
        return Err(IngestError::Format {
            message: "boundary document is not a GeoJSON FeatureCollection".to_string(),
        });
    };

    let mut boundaries = Vec::new();

    for (feature_idx, feature) in collection.features.into_iter().enumerate() {
        let zip = feature
            .properties
            .as_ref()
            .and_then(|props| props.get("zip"))
            .and_then(property_as_string)
            .filter(|zip| !zip.is_empty());

        let Some(zip) = zip else {
            log::warn!("boundary feature {feature_idx} has no ZIP, skipping");
            continue;
        };

        let geometry = feature
            .geometry
            .and_then(|geometry| geo::Geometry::<f64>::try_from(geometry).ok())
            .and_then(ZipGeometry::from_geometry);

        let Some(geometry) = geometry else {
            log::warn!("ZIP {zip} has no parseable polygon geometry, skipping");
            continue;
        };

        boundaries.push(ZipBoundary {
            zip_code: zip.clone(),
            name: zip,
            geometry,
        });
    }

    log::info!("Loaded {} ZIP boundaries", boundaries.len());
    Ok(boundaries)
}

/// Reassembles the flattened geometry columns into a `GeoJSON` geometry
/// and converts it, rejecting non-polygon kinds.
fn parse_embedded_geometry(
    geometry_type: Option<&str>,
    coordinates_json: Option<&str>,
) -> Option<ZipGeometry> {
    let geometry_type = geometry_type?;
    let coordinates: serde_json::Value = serde_json::from_str(coordinates_json?).ok()?;

    let value = serde_json::json!({
        "type": geometry_type,
        "coordinates": coordinates,
    });
    let geometry: geojson::Geometry = serde_json::from_value(value).ok()?;

    let geo_geometry: geo::Geometry<f64> = geometry.try_into().ok()?;
    ZipGeometry::from_geometry(geo_geometry)
}

/// ZIP properties show up as strings or bare numbers depending on the
/// export vintage.
fn property_as_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
zip,geometry_type,coordinates_json,extra
28202,Polygon,\"[[[0,0],[1,0],[1,1],[0,1],[0,0]]]\",x
,Polygon,\"[[[0,0],[1,0],[1,1],[0,0]]]\",x
28204,LineString,\"[[0,0],[1,1]]\",x
28205,Polygon,,x
28206,MultiPolygon,\"[[[[0,0],[1,0],[1,1],[0,0]]],[[[5,5],[6,5],[6,6],[5,5]]]]\",x
";

    #[test]
    fn loads_polygon_rows_and_skips_bad_ones() {
        let boundaries = from_csv_reader(CSV.as_bytes()).unwrap();
        let zips: Vec<&str> = boundaries.iter().map(|b| b.zip_code.as_str()).collect();
        assert_eq!(zips, vec!["28202", "28206"]);
        assert_eq!(boundaries[1].geometry.polygons().len(), 2);
    }

    #[test]
    fn preserves_file_order() {
        let csv = "\
zip,geometry_type,coordinates_json
28280,Polygon,\"[[[0,0],[1,0],[1,1],[0,0]]]\"
28202,Polygon,\"[[[2,2],[3,2],[3,3],[2,2]]]\"
";
        let boundaries = from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(boundaries[0].zip_code, "28280");
        assert_eq!(boundaries[1].zip_code, "28202");
    }

    #[test]
    fn loads_feature_collection() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "zip": "28202" },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0,0],[1,0],[1,1],[0,1],[0,0]]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": { "zip": 28203 },
                    "geometry": {
                        "type": "Point",
                        "coordinates": [0.5, 0.5]
                    }
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]
                    }
                }
            ]
        }"#;
        let boundaries = from_geojson_str(raw).unwrap();
        assert_eq!(boundaries.len(), 1);
        assert_eq!(boundaries[0].zip_code, "28202");
    }

    #[test]
    fn rejects_non_feature_collection() {
        let raw = r#"{"type": "Point", "coordinates": [0.0, 0.0]}"#;
        assert!(from_geojson_str(raw).is_err());
    }
}
