//! Target consolidation built on top of `drop-targets-core`.
//!
//! ## Quickstart
//!
//! ```
//! use drop_targets_cluster::consolidate;
//! use drop_targets_core::{Detection, DetectionsByClass, Severity};
//!
//! let mut detections = DetectionsByClass::new();
//! detections.insert(
//!     "car".to_string(),
//!     vec![
//!         Detection::new("car", 50.0, -114.0, 0.9),
//!         Detection::new("car", 50.0001, -114.0001, 0.8),
//!         Detection::new("car", 50.05, -114.05, 0.7),
//!     ],
//! );
//!
//! let clusters = consolidate(&detections);
//! assert_eq!(clusters.len(), 1);
//! assert_eq!(clusters[0].members[2].severity, Severity::Major);
//! ```
//!
//! One consolidation pass, per class label:
//! 1. Drop detections with non-finite coordinates.
//! 2. Take the coordinate-wise median of the remaining detections.
//! 3. Measure each detection's haversine distance to the median.
//! 4. Bucket that distance into a [`Severity`](drop_targets_core::Severity).
//!
//! Every pass starts from scratch; nothing is cached between calls.

mod active;
mod cluster;
mod consolidate;
mod params;

pub use active::active_target;
pub use cluster::{ClusterMember, TargetCluster};
pub use consolidate::{consolidate, consolidate_class, consolidate_with};
pub use params::ConsolidateParams;
