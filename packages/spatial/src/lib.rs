#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! In-memory spatial join for ZIP code attribution.
//!
//! Assigns each crime incident to the ZIP boundary polygon containing it.
//! Runs once at load time over the full dataset: build a flat bounding-box
//! index from the boundary collection, then batch-join the incident list
//! against it. The two-phase lookup (cheap box prefilter, then an exact
//! ray-cast test on the few survivors) avoids running the expensive
//! polygon test against every boundary for every incident.
//!
//! A flat index is deliberate: at tens of ZIP boundaries an R-tree buys
//! nothing. Revisit if this is ever pointed at thousands of regions.
//!
//! Everything here is a pure function over immutable inputs. The index and
//! the boundary slice are passed explicitly, so batches can be sharded
//! across threads without locks if that ever becomes worthwhile.

pub mod geometry;
pub mod index;
pub mod join;

pub use geometry::{BoundingBox, bounding_box, point_in_polygon, point_in_ring};
pub use index::{IndexEntry, SpatialIndex};
pub use join::{ZipJoinResult, assign_zip_codes};
