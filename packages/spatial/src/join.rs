//! Batch ZIP assignment over the full incident set.

use crime_dash_crime_models::Incident;
use crime_dash_geography_models::ZipBoundary;

use crate::index::SpatialIndex;

/// Outcome of a batch join: the enriched incident list plus match
/// statistics for diagnostic logging.
#[derive(Debug, Clone, PartialEq)]
pub struct ZipJoinResult {
    /// All input incidents, in input order, with resolved ZIPs attached.
    pub incidents: Vec<Incident>,
    /// Incidents that ended up with a ZIP (pre-existing or resolved).
    pub matched: usize,
    /// Incidents no boundary contains.
    pub unmatched: usize,
}

/// Assigns a ZIP code to every incident that lacks one.
///
/// Incidents already carrying a non-empty ZIP pass through untouched —
/// the source data wins over geometry. The rest are located spatially;
/// misses also pass through unchanged, with the ZIP left absent. No
/// incident is ever dropped: the output has the same length and order as
/// the input, so `matched + unmatched` always equals the input length.
#[must_use]
pub fn assign_zip_codes(
    incidents: Vec<Incident>,
    index: &SpatialIndex,
    boundaries: &[ZipBoundary],
) -> ZipJoinResult {
    let mut matched = 0;
    let mut unmatched = 0;

    let incidents = incidents
        .into_iter()
        .map(|incident| {
            if incident.has_zip_code() {
                matched += 1;
                return incident;
            }

            match index.locate(incident.longitude, incident.latitude, boundaries) {
                Some(zip) => {
                    matched += 1;
                    Incident {
                        zip_code: Some(zip.to_string()),
                        ..incident
                    }
                }
                None => {
                    unmatched += 1;
                    incident
                }
            }
        })
        .collect();

    ZipJoinResult {
        incidents,
        matched,
        unmatched,
    }
}
