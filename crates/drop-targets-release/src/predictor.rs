use std::fmt;

use drop_targets_core::serde_helpers::infinite_as_null;
use drop_targets_core::{destination_point, distance_m, GeoPoint, TargetInfo, VehicleState};
use log::trace;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::format::{format_distance, format_eta};
use crate::params::{ReleaseParams, ReleaseParamsError};

/// Distance and time from the vehicle to the release point.
///
/// Both values are rounded to whole meters / seconds. `+∞` in either field
/// means "prediction unavailable"; it is a regular value, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReleasePrediction {
    #[serde(with = "infinite_as_null")]
    pub distance_m: f64,
    #[serde(with = "infinite_as_null")]
    pub eta_s: f64,
    /// Projected release point, present whenever the prediction is.
    #[serde(default)]
    pub release_point: Option<GeoPoint>,
}

impl ReleasePrediction {
    pub const UNAVAILABLE: ReleasePrediction = ReleasePrediction {
        distance_m: f64::INFINITY,
        eta_s: f64::INFINITY,
        release_point: None,
    };

    pub fn is_available(&self) -> bool {
        self.distance_m.is_finite() && self.eta_s.is_finite()
    }
}

impl Default for ReleasePrediction {
    fn default() -> Self {
        Self::UNAVAILABLE
    }
}

impl fmt::Display for ReleasePrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let distance = format_distance(self.distance_m);
        if self.distance_m.is_finite() {
            write!(f, "distance {distance} m, release in {}", format_eta(self.eta_s))
        } else {
            write!(f, "distance {distance}, release in {}", format_eta(self.eta_s))
        }
    }
}

/// Predicts distance and time to the payload release point.
///
/// Stateless apart from its parameters: every call recomputes from the
/// supplied target and telemetry snapshot.
#[derive(Clone, Debug, Default)]
pub struct ReleasePredictor {
    params: ReleaseParams,
}

impl ReleasePredictor {
    pub fn new(params: ReleaseParams) -> Result<Self, ReleaseParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ReleaseParams {
        &self.params
    }

    /// Point `estimated_release_distance_m` behind `target`, measured along
    /// the reversed heading.
    pub fn release_point(&self, target: GeoPoint, heading_deg: f64) -> GeoPoint {
        destination_point(
            target,
            heading_deg + 180.0,
            self.params.estimated_release_distance_m,
        )
    }

    /// Predict the release distance and ETA for the current snapshot.
    ///
    /// Returns [`ReleasePrediction::UNAVAILABLE`] when there is no target,
    /// either position is non-finite, the heading is unknown, or the speed
    /// is not strictly positive.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "debug",
            skip(self, target, vehicle),
            fields(speed = vehicle.speed_mps)
        )
    )]
    pub fn predict(
        &self,
        target: Option<&TargetInfo>,
        vehicle: &VehicleState,
    ) -> ReleasePrediction {
        let Some(target) = target else {
            trace!("no active target");
            return ReleasePrediction::UNAVAILABLE;
        };
        let target_pos = target.position();
        let vehicle_pos = vehicle.position();
        if !target_pos.is_finite() || !vehicle_pos.is_finite() {
            trace!("target or vehicle position unknown");
            return ReleasePrediction::UNAVAILABLE;
        }
        let Some(heading) = vehicle.heading() else {
            trace!("vehicle heading unknown");
            return ReleasePrediction::UNAVAILABLE;
        };
        if !vehicle.is_moving() {
            trace!("vehicle not moving (speed {} m/s)", vehicle.speed_mps);
            return ReleasePrediction::UNAVAILABLE;
        }

        let release_point = self.release_point(target_pos, heading);
        let distance = distance_m(vehicle_pos, release_point);
        let eta = distance / vehicle.speed_mps;

        ReleasePrediction {
            distance_m: distance.round(),
            eta_s: eta.round(),
            release_point: Some(release_point),
        }
    }
}

/// [`ReleasePredictor::predict`] with the default 8 m release distance.
pub fn predict_release(target: Option<&TargetInfo>, vehicle: &VehicleState) -> ReleasePrediction {
    ReleasePredictor::default().predict(target, vehicle)
}
