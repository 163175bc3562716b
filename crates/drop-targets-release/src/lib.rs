//! Payload release prediction.
//!
//! The release point is projected *backward* from the target, opposite the
//! vehicle's heading, by the distance the payload travels forward after
//! separation. Distance and time-to-release are then measured from the
//! vehicle's live position to that point.
//!
//! ```text
//!   vehicle ───────► release point ──(8 m)──► target
//!            heading
//! ```
//!
//! Degenerate kinematics (no target, unknown position or heading, speed not
//! strictly positive) are not errors: they yield
//! [`ReleasePrediction::UNAVAILABLE`], whose fields are `+∞`.

mod format;
mod params;
mod predictor;

pub use format::{format_distance, format_eta, ETA_MINUTES_THRESHOLD_S, INFINITY_GLYPH};
pub use params::{ReleaseParams, ReleaseParamsError, DEFAULT_RELEASE_DISTANCE_M};
pub use predictor::{predict_release, ReleasePrediction, ReleasePredictor};
