use serde::{Deserialize, Serialize};

/// Forward distance in meters the payload covers between separation and
/// impact.
pub const DEFAULT_RELEASE_DISTANCE_M: f64 = 8.0;

/// Errors returned when building a [`ReleasePredictor`](crate::ReleasePredictor).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ReleaseParamsError {
    #[error("estimated release distance must be finite and non-negative (got {0})")]
    InvalidReleaseDistance(f64),
}

/// Configuration for release prediction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseParams {
    /// How far before the target, along the track, the payload is released.
    pub estimated_release_distance_m: f64,
}

impl Default for ReleaseParams {
    fn default() -> Self {
        Self {
            estimated_release_distance_m: DEFAULT_RELEASE_DISTANCE_M,
        }
    }
}

impl ReleaseParams {
    pub fn with_release_distance(estimated_release_distance_m: f64) -> Self {
        Self {
            estimated_release_distance_m,
        }
    }

    pub fn validate(&self) -> Result<(), ReleaseParamsError> {
        let d = self.estimated_release_distance_m;
        if d.is_finite() && d >= 0.0 {
            Ok(())
        } else {
            Err(ReleaseParamsError::InvalidReleaseDistance(d))
        }
    }
}
