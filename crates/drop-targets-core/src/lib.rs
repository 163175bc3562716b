//! Core types and utilities for payload drop targeting.
//!
//! This crate is intentionally small and purely geometric. It knows nothing
//! about cameras, detectors or autopilots: it works on latitude/longitude
//! pairs in decimal degrees on a spherical earth of radius
//! [`EARTH_RADIUS_M`].
//!
//! ## Quickstart
//!
//! ```
//! use drop_targets_core::{distance_m, destination_point, GeoPoint, Severity};
//!
//! let origin = GeoPoint::new(50.9760, -114.0720);
//! let east = destination_point(origin, 90.0, 50.0);
//! let d = distance_m(origin, east);
//! assert!((d - 50.0).abs() < 1e-6);
//! assert_eq!(Severity::from_distance(d), Severity::Minor);
//! ```

mod geo;
mod median;
pub mod serde_helpers;
mod severity;
mod types;

pub use geo::{
    destination_point, distance_m, haversine_distance, project_point, GeoPoint, EARTH_RADIUS_M,
};
pub use median::{coordinate_median, median_lat_lon, median_of_sorted};
pub use severity::{Severity, SeverityCounts, MILD_MAX_M, MINOR_MAX_M, NORMAL_MAX_M};
pub use types::{Detection, DetectionsByClass, TargetInfo, VehicleState};

