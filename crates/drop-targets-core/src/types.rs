use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{default_if_null, nan, nan_if_null};
use crate::GeoPoint;

/// One geolocated object detection produced by the upstream pipeline.
///
/// Coordinates may be NaN when the source record was incomplete; such
/// detections are dropped before consolidation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(default, alias = "class_name", alias = "className")]
    pub class_label: String,
    #[serde(alias = "lat", default = "nan", deserialize_with = "nan_if_null")]
    pub latitude: f64,
    #[serde(alias = "lon", default = "nan", deserialize_with = "nan_if_null")]
    pub longitude: f64,
    /// Detector confidence in `[0, 1]`; `null` reads as 0.
    #[serde(default, deserialize_with = "default_if_null")]
    pub confidence: f32,
}

impl Detection {
    pub fn new(
        class_label: impl Into<String>,
        latitude: f64,
        longitude: f64,
        confidence: f32,
    ) -> Self {
        Self {
            class_label: class_label.into(),
            latitude,
            longitude,
            confidence,
        }
    }

    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// True when both coordinates are finite and may enter a median.
    #[inline]
    pub fn has_finite_position(&self) -> bool {
        self.position().is_finite()
    }
}

/// Detections grouped by class label, in label order.
pub type DetectionsByClass = BTreeMap<String, Vec<Detection>>;

/// Live vehicle telemetry snapshot.
///
/// Owned by the telemetry feed; the engine only reads it. Unknown
/// coordinates and speed are NaN and an unknown heading is `None`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    #[serde(alias = "lat", default = "nan", deserialize_with = "nan_if_null")]
    pub latitude: f64,
    #[serde(alias = "lon", default = "nan", deserialize_with = "nan_if_null")]
    pub longitude: f64,
    /// Ground speed in m/s.
    #[serde(alias = "speed", default = "nan", deserialize_with = "nan_if_null")]
    pub speed_mps: f64,
    /// Course over ground in degrees clockwise from north.
    #[serde(alias = "heading", default)]
    pub heading_deg: Option<f64>,
}

impl VehicleState {
    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Heading if it is known and finite.
    #[inline]
    pub fn heading(&self) -> Option<f64> {
        self.heading_deg.filter(|h| h.is_finite())
    }

    /// True for a finite, strictly positive ground speed.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.speed_mps.is_finite() && self.speed_mps > 0.0
    }
}

/// The currently selected target: its class label and consolidated position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetInfo {
    #[serde(default, alias = "name")]
    pub class_label: String,
    #[serde(alias = "lat", default = "nan", deserialize_with = "nan_if_null")]
    pub latitude: f64,
    #[serde(alias = "lon", default = "nan", deserialize_with = "nan_if_null")]
    pub longitude: f64,
}

impl TargetInfo {
    pub fn new(class_label: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            class_label: class_label.into(),
            latitude: position.latitude,
            longitude: position.longitude,
        }
    }

    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}
