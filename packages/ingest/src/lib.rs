#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Ingestion for the exported dashboard data files.
//!
//! The upstream fetch script flattens the `ArcGIS` `GeoJSON` responses
//! into two CSVs: `incidents.csv` (Point rows with `coordinates_lon` /
//! `coordinates_lat`) and `zipcodes.csv` (Polygon/MultiPolygon rows with
//! the ring coordinates serialized into a `coordinates_json` column).
//! This crate turns those files into clean model collections for the
//! spatial join.
//!
//! File-level problems (missing file, malformed CSV) are errors; row-level
//! problems (missing coordinates, unparseable dates, bad geometry) are
//! skips logged at warn level, matching what the join expects — it never
//! re-validates its input.

pub mod boundaries;
pub mod incidents;
pub mod parsing;

use thiserror::Error;

/// Errors that can occur while loading data files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Embedded JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `GeoJSON` parsing failed.
    #[error("GeoJSON error: {0}")]
    Geojson(#[from] geojson::Error),

    /// Data did not have the expected shape.
    #[error("Data format error: {message}")]
    Format {
        /// Description of what went wrong.
        message: String,
    },
}
