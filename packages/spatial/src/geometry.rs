//! Geometry primitives: bounding boxes and ray-cast point-in-polygon.
//!
//! The containment test is hand-rolled rather than delegated to
//! `geo::Contains` because it intentionally consults only each polygon's
//! exterior ring — interior rings (holes) are not subtracted. That matches
//! the original dashboard's behavior and is fine for ZIP boundaries, which
//! have no meaningful holes in this dataset.

use crime_dash_geography_models::ZipGeometry;
use geo::LineString;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding rectangle over a boundary's geometry.
///
/// Used as a cheap prefilter: a point outside the box cannot be inside
/// the polygon, so the ray-cast test only runs for points that pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// Westernmost longitude.
    pub min_x: f64,
    /// Southernmost latitude.
    pub min_y: f64,
    /// Easternmost longitude.
    pub max_x: f64,
    /// Northernmost latitude.
    pub max_y: f64,
}

impl BoundingBox {
    /// Whether the point lies inside the box, bounds inclusive.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// Computes the bounding box over the exterior ring of every member
/// polygon.
///
/// Returns `None` when the geometry has no vertices at all (empty
/// coordinate arrays in the source data). Callers must exclude such
/// boundaries from the index — `None` means "can never match", never
/// "matches everything".
#[must_use]
pub fn bounding_box(geometry: &ZipGeometry) -> Option<BoundingBox> {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for polygon in geometry.polygons() {
        for coord in &polygon.exterior().0 {
            min_x = min_x.min(coord.x);
            min_y = min_y.min(coord.y);
            max_x = max_x.max(coord.x);
            max_y = max_y.max(coord.y);
        }
    }

    if min_x <= max_x && min_y <= max_y {
        Some(BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    } else {
        None
    }
}

/// Classic even-odd ray casting test against a single ring.
///
/// Walks each edge (pairing each vertex with its predecessor, wrapping
/// from the last vertex back to the first) and flips the inside flag
/// whenever a horizontal ray from the point crosses the edge. The
/// half-open Y test (`>` on both endpoints, compared for inequality)
/// keeps shared vertices from being counted twice.
///
/// Standard floating-point comparison throughout, no epsilon: points
/// exactly on an edge have undefined inside/outside classification.
#[must_use]
pub fn point_in_ring(x: f64, y: f64, ring: &LineString<f64>) -> bool {
    let coords = &ring.0;
    let Some(&last) = coords.last() else {
        return false;
    };

    let mut inside = false;
    let mut prev = last;

    for &coord in coords {
        let (xi, yi) = (coord.x, coord.y);
        let (xj, yj) = (prev.x, prev.y);

        let crosses = (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi;
        if crosses {
            inside = !inside;
        }

        prev = coord;
    }

    inside
}

/// Whether the point falls inside the boundary geometry.
///
/// Tests each member polygon's exterior ring only, short-circuiting on
/// the first containing member. Holes are ignored (see module docs).
#[must_use]
pub fn point_in_polygon(x: f64, y: f64, geometry: &ZipGeometry) -> bool {
    geometry
        .polygons()
        .iter()
        .any(|polygon| point_in_ring(x, y, polygon.exterior()))
}
