//! Flat bounding-box index and two-phase point locator.

use crime_dash_geography_models::ZipBoundary;

use crate::geometry::{BoundingBox, bounding_box, point_in_polygon};

/// One indexed boundary: its bounding box plus the position of the
/// boundary in the collection the index was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexEntry {
    /// Bounding box over the boundary's exterior rings.
    pub bbox: BoundingBox,
    /// Position of the boundary in the source slice.
    pub boundary_idx: usize,
}

/// Ordered bounding-box index over a ZIP boundary collection.
///
/// Entries keep the boundary collection's order (minus boundaries with
/// degenerate geometry, which are omitted), and lookups scan in that
/// order, so results are deterministic: when boundaries overlap, the one
/// appearing earliest in the collection wins. That tie-break is inherited
/// from input order and carries no semantic meaning.
///
/// The index holds positions, not geometry — [`SpatialIndex::locate`]
/// must be given the same slice the index was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialIndex {
    entries: Vec<IndexEntry>,
}

impl SpatialIndex {
    /// Builds the index from a boundary collection.
    ///
    /// Boundaries whose geometry yields no valid bounding box (empty
    /// coordinate arrays) are left out entirely. They can never be
    /// resolved spatially, though incidents already carrying their ZIP
    /// still pass through the join untouched.
    #[must_use]
    pub fn build(boundaries: &[ZipBoundary]) -> Self {
        let entries: Vec<IndexEntry> = boundaries
            .iter()
            .enumerate()
            .filter_map(|(boundary_idx, boundary)| {
                let bbox = bounding_box(&boundary.geometry);
                if bbox.is_none() {
                    log::warn!(
                        "ZIP {} has degenerate geometry, excluding from spatial index",
                        boundary.zip_code
                    );
                }
                bbox.map(|bbox| IndexEntry { bbox, boundary_idx })
            })
            .collect();

        log::debug!(
            "Built spatial index: {} of {} ZIP boundaries indexed",
            entries.len(),
            boundaries.len()
        );

        Self { entries }
    }

    /// Finds the ZIP code whose boundary contains the point.
    ///
    /// Phase 1 keeps entries whose bounding box contains the point
    /// (bounds inclusive); phase 2 confirms each survivor with the exact
    /// ray-cast test, returning the first hit. `boundaries` must be the
    /// slice this index was built from.
    #[must_use]
    pub fn locate<'a>(
        &self,
        longitude: f64,
        latitude: f64,
        boundaries: &'a [ZipBoundary],
    ) -> Option<&'a str> {
        for entry in &self.entries {
            if !entry.bbox.contains(longitude, latitude) {
                continue;
            }
            let boundary = boundaries.get(entry.boundary_idx)?;
            if point_in_polygon(longitude, latitude, &boundary.geometry) {
                return Some(boundary.zip_code.as_str());
            }
        }
        None
    }

    /// Number of indexed boundaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no boundaries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The index entries, in lookup order.
    #[must_use]
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }
}
