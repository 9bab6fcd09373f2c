//! Crime incident ingestion from the flattened `incidents.csv` export.

use std::path::Path;

use crime_dash_crime_models::{CrimeCategory, Incident};
use serde::Deserialize;

use crate::IngestError;
use crate::parsing::{parse_lon_lat, parse_report_date};

/// One row of the incident export. The CSV carries every source column;
/// only the ones the dashboard uses are read here.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IncidentRow {
    #[serde(rename = "OBJECTID")]
    object_id: Option<String>,
    #[serde(rename = "DATE_REPORTED")]
    date_reported: Option<String>,
    #[serde(rename = "HIGHEST_NIBRS_DESCRIPTION")]
    description: Option<String>,
    #[serde(rename = "LOCATION")]
    location: Option<String>,
    #[serde(rename = "ZIP")]
    zip: Option<String>,
    geometry_type: Option<String>,
    coordinates_lon: Option<String>,
    coordinates_lat: Option<String>,
}

/// Loads incidents from the CSV export at `path`.
///
/// # Errors
///
/// Returns [`IngestError`] if the file cannot be read or the CSV is
/// malformed. Rows with missing coordinates or dates are dropped, not
/// errors.
pub fn load(path: &Path) -> Result<Vec<Incident>, IngestError> {
    let file = std::fs::File::open(path)?;
    from_csv_reader(file)
}

/// Parses incidents from CSV data.
///
/// A row survives only if it is a Point with finite non-zero coordinates
/// and a parseable report date — the spatial join relies on ingestion
/// having rejected everything else. The offense description falls back to
/// "Unknown", the category is derived by keyword, and a blank source ZIP
/// becomes `None` so the join will resolve it.
///
/// # Errors
///
/// Returns [`IngestError`] on CSV-level failures.
pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Vec<Incident>, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut incidents = Vec::new();
    let mut skipped = 0usize;

    for (row_idx, row) in csv_reader.deserialize::<IncidentRow>().enumerate() {
        let row = row?;

        if row.geometry_type.as_deref() != Some("Point") {
            skipped += 1;
            continue;
        }

        let coords = parse_lon_lat(
            row.coordinates_lon.as_deref(),
            row.coordinates_lat.as_deref(),
        );
        let date = row.date_reported.as_deref().and_then(parse_report_date);

        let (Some((longitude, latitude)), Some(date)) = (coords, date) else {
            log::debug!("incident row {} missing coordinates or date", row_idx + 1);
            skipped += 1;
            continue;
        };

        let offense = row
            .description
            .filter(|description| !description.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());
        let category = CrimeCategory::from_description(&offense);

        let id = row
            .object_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("row-{}", row_idx + 1));

        incidents.push(Incident {
            id,
            date,
            offense,
            category,
            longitude,
            latitude,
            address: row.location.unwrap_or_default(),
            zip_code: row.zip.filter(|zip| !zip.is_empty()),
        });
    }

    log::info!(
        "Loaded {} incidents ({skipped} rows skipped)",
        incidents.len()
    );
    Ok(incidents)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "OBJECTID,DATE_REPORTED,HIGHEST_NIBRS_DESCRIPTION,LOCATION,ZIP,geometry_type,coordinates_lon,coordinates_lat\n";

    #[test]
    fn parses_a_clean_row() {
        let csv = format!(
            "{HEADER}1001,1507766400000,Burglary/B&E,400 E TRADE ST,28202,Point,-80.8431,35.2271\n"
        );
        let incidents = from_csv_reader(csv.as_bytes()).unwrap();

        assert_eq!(incidents.len(), 1);
        let incident = &incidents[0];
        assert_eq!(incident.id, "1001");
        assert_eq!(incident.offense, "Burglary/B&E");
        assert_eq!(incident.category, CrimeCategory::Property);
        assert_eq!(incident.address, "400 E TRADE ST");
        assert_eq!(incident.zip_code.as_deref(), Some("28202"));
        assert_eq!(incident.date.to_string(), "2017-10-12 00:00:00 UTC");
    }

    #[test]
    fn drops_rows_without_coordinates_or_date() {
        let csv = format!(
            "{HEADER}\
1,1507766400000,Shoplifting,,,Point,,35.2271
2,,Shoplifting,,,Point,-80.8431,35.2271
3,1507766400000,Shoplifting,,,Point,0,35.2271
4,1507766400000,Shoplifting,,,Polygon,-80.8431,35.2271
5,1507766400000,Shoplifting,,,Point,-80.8431,35.2271
"
        );
        let incidents = from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(incidents.len(), 1);
        assert_eq!(incidents[0].id, "5");
    }

    #[test]
    fn blank_fields_get_defaults() {
        let csv = format!("{HEADER},1507766400000,,,,Point,-80.8431,35.2271\n");
        let incidents = from_csv_reader(csv.as_bytes()).unwrap();

        let incident = &incidents[0];
        assert_eq!(incident.id, "row-1");
        assert_eq!(incident.offense, "Unknown");
        assert_eq!(incident.category, CrimeCategory::Other);
        assert_eq!(incident.address, "");
        assert_eq!(incident.zip_code, None);
    }

    #[test]
    fn preserves_row_order() {
        let csv = format!(
            "{HEADER}\
9,1507766400000,Shoplifting,,,Point,-80.8,35.2
3,1507766400000,Shoplifting,,,Point,-80.8,35.2
7,1507766400000,Shoplifting,,,Point,-80.8,35.2
"
        );
        let incidents = from_csv_reader(csv.as_bytes()).unwrap();
        let ids: Vec<&str> = incidents.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["9", "3", "7"]);
    }
}
