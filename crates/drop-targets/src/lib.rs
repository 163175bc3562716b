//! High-level facade crate for the `drop-targets-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying crates
//! - [`refresh`], one polling cycle of the ground station: consolidate the
//!   current detections, resolve the selected target, predict the release
//! - JSON snapshot / report helpers and (feature `cli`) the `drop-targets`
//!   binary
//!
//! ## Quickstart
//!
//! ```
//! use drop_targets::{refresh, RefreshSnapshot};
//! use drop_targets::core::{Detection, VehicleState};
//!
//! let mut snapshot = RefreshSnapshot::default();
//! snapshot.detections.insert(
//!     "car".to_string(),
//!     vec![Detection::new("car", 50.9762, -114.0710, 0.9)],
//! );
//! snapshot.current_target = Some("car".to_string());
//! snapshot.vehicle = Some(VehicleState {
//!     latitude: 50.9760,
//!     longitude: -114.0720,
//!     speed_mps: 10.0,
//!     heading_deg: Some(90.0),
//! });
//!
//! let report = refresh(&snapshot).expect("valid release parameters");
//! assert!(report.prediction.is_available());
//! println!("{}", report.prediction);
//! ```
//!
//! ## API map
//! - `drop_targets::core`: geodesy, medians, severity tiers, input types.
//! - `drop_targets::cluster`: per-class median consolidation and outlier tiers.
//! - `drop_targets::release`: release-point projection and distance/ETA.
//!
//! Every computation is a pure function of its inputs. Callers polling on a
//! timer should replace the previous report wholesale rather than merge.

pub use drop_targets_cluster as cluster;
pub use drop_targets_core as core;
pub use drop_targets_release as release;

pub use drop_targets_cluster::{consolidate, ConsolidateParams, TargetCluster};
pub use drop_targets_core::{Detection, DetectionsByClass, Severity, TargetInfo, VehicleState};
pub use drop_targets_release::{predict_release, ReleaseParams, ReleasePrediction};

mod io;
mod refresh;

pub use io::DropTargetsIoError;
pub use refresh::{refresh, refresh_with, RefreshError, RefreshReport, RefreshSnapshot};
