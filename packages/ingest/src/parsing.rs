//! Shared field parsing for the exported CSVs.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone as _, Utc};

/// Parses a `DATE_REPORTED` value.
///
/// The `ArcGIS` export serializes dates as epoch milliseconds (e.g.
/// "1507766400000"); older exports used ISO 8601 strings. Returns `None`
/// for empty, zero, or unparseable values.
#[must_use]
pub fn parse_report_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(millis) = value.parse::<i64>() {
        if millis <= 0 {
            return None;
        }
        return Utc.timestamp_millis_opt(millis).single();
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

/// Parses lon/lat from optional string fields. Returns `None` if either
/// is missing, unparseable, non-finite, or zero (the export writes 0 for
/// unlocated incidents).
#[must_use]
pub fn parse_lon_lat(lon: Option<&str>, lat: Option<&str>) -> Option<(f64, f64)> {
    let longitude = lon?.trim().parse::<f64>().ok()?;
    let latitude = lat?.trim().parse::<f64>().ok()?;
    if !longitude.is_finite() || !latitude.is_finite() {
        return None;
    }
    if longitude == 0.0 || latitude == 0.0 {
        return None;
    }
    Some((longitude, latitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_epoch_millis_date() {
        let dt = parse_report_date("1507766400000").unwrap();
        assert_eq!(dt.to_string(), "2017-10-12 00:00:00 UTC");
    }

    #[test]
    fn parses_iso_date_with_time() {
        let dt = parse_report_date("2024-01-15T14:30:00.000").unwrap();
        assert_eq!(dt.to_string(), "2024-01-15 14:30:00 UTC");
    }

    #[test]
    fn parses_date_only() {
        let dt = parse_report_date("2024-01-15").unwrap();
        assert_eq!(dt.to_string(), "2024-01-15 00:00:00 UTC");
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(parse_report_date("").is_none());
        assert!(parse_report_date("0").is_none());
        assert!(parse_report_date("not-a-date").is_none());
    }

    #[test]
    fn parses_lon_lat_pair() {
        let (lon, lat) = parse_lon_lat(Some("-80.8431"), Some("35.2271")).unwrap();
        assert!((lon - -80.8431).abs() < f64::EPSILON);
        assert!((lat - 35.2271).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_missing_zero_or_nan_coordinates() {
        assert!(parse_lon_lat(None, Some("35.2")).is_none());
        assert!(parse_lon_lat(Some("-80.8"), None).is_none());
        assert!(parse_lon_lat(Some("0"), Some("35.2")).is_none());
        assert!(parse_lon_lat(Some("-80.8"), Some("0.0")).is_none());
        assert!(parse_lon_lat(Some("NaN"), Some("35.2")).is_none());
        assert!(parse_lon_lat(Some("garbage"), Some("35.2")).is_none());
    }
}
