#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! ZIP code boundary types.
//!
//! These types represent the ZIP polygon boundaries that incidents are
//! spatially joined against. Boundaries are immutable once loaded for a
//! session; everything downstream treats them as a read-only slice.

use geo::{MultiPolygon, Polygon};

/// Parsed boundary geometry for a single ZIP code.
///
/// Only `Polygon` and `MultiPolygon` source geometries are representable;
/// ingestion skips features carrying any other geometry kind. Interior
/// rings (holes) survive parsing but are never consulted by the
/// point-in-polygon test.
#[derive(Debug, Clone, PartialEq)]
pub enum ZipGeometry {
    /// A single polygon boundary.
    Polygon(Polygon<f64>),
    /// A boundary made of multiple disjoint polygons.
    MultiPolygon(MultiPolygon<f64>),
}

impl ZipGeometry {
    /// Converts a parsed `GeoJSON` geometry, rejecting non-polygon kinds.
    #[must_use]
    pub fn from_geometry(geometry: geo::Geometry<f64>) -> Option<Self> {
        match geometry {
            geo::Geometry::Polygon(polygon) => Some(Self::Polygon(polygon)),
            geo::Geometry::MultiPolygon(multi) => Some(Self::MultiPolygon(multi)),
            _ => None,
        }
    }

    /// Uniform view of the member polygons: a `Polygon` is a single-element
    /// slice, a `MultiPolygon` is all of its members in order.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon<f64>] {
        match self {
            Self::Polygon(polygon) => std::slice::from_ref(polygon),
            Self::MultiPolygon(multi) => &multi.0,
        }
    }
}

/// A ZIP code boundary: identifier plus parsed polygon geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ZipBoundary {
    /// The ZIP code (e.g. "28202"). Unique within a loaded collection.
    pub zip_code: String,
    /// Display name; the source data reuses the ZIP code here.
    pub name: String,
    /// Boundary geometry.
    pub geometry: ZipGeometry,
}
