use drop_targets_cluster::{active_target, consolidate_with, ConsolidateParams, TargetCluster};
use drop_targets_core::{DetectionsByClass, TargetInfo, VehicleState};
use drop_targets_release::{ReleaseParams, ReleaseParamsError, ReleasePrediction, ReleasePredictor};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the refresh pipeline.
#[derive(thiserror::Error, Debug)]
pub enum RefreshError {
    #[error(transparent)]
    ReleaseParams(#[from] ReleaseParamsError),
}

/// Everything the collaborators hand over for one refresh cycle.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RefreshSnapshot {
    /// Detections keyed by class label.
    #[serde(default, alias = "targets")]
    pub detections: DetectionsByClass,
    /// Selected target class, if any.
    #[serde(default)]
    pub current_target: Option<String>,
    #[serde(flatten)]
    pub consolidate: ConsolidateParams,
    /// Latest telemetry; `None` before the first heartbeat.
    #[serde(default)]
    pub vehicle: Option<VehicleState>,
    #[serde(default)]
    pub release: ReleaseParams,
}

/// Result of one refresh cycle. Always a complete snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RefreshReport {
    pub clusters: Vec<TargetCluster>,
    #[serde(default)]
    pub active_target: Option<TargetInfo>,
    pub prediction: ReleasePrediction,
}

/// Run one refresh cycle with the release parameters from the snapshot.
pub fn refresh(snapshot: &RefreshSnapshot) -> Result<RefreshReport, RefreshError> {
    let predictor = ReleasePredictor::new(snapshot.release)?;
    Ok(refresh_with(snapshot, &predictor))
}

/// Run one refresh cycle with an already validated predictor.
///
/// Consolidates all classes, resolves the selected class to its median, and
/// predicts the release against the latest telemetry. A missing target or
/// vehicle yields an unavailable prediction.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(snapshot, predictor),
        fields(classes = snapshot.detections.len(), target = ?snapshot.current_target)
    )
)]
pub fn refresh_with(snapshot: &RefreshSnapshot, predictor: &ReleasePredictor) -> RefreshReport {
    let clusters = consolidate_with(&snapshot.detections, &snapshot.consolidate);
    let active = active_target(&clusters, snapshot.current_target.as_deref());
    if let (Some(label), None) = (&snapshot.current_target, &active) {
        debug!("selected target {label} has no consolidated position");
    }

    let prediction = match &snapshot.vehicle {
        Some(vehicle) => predictor.predict(active.as_ref(), vehicle),
        None => ReleasePrediction::UNAVAILABLE,
    };

    info!(
        "refresh: {} cluster(s), target {}, {}",
        clusters.len(),
        active
            .as_ref()
            .map(|t| t.class_label.as_str())
            .unwrap_or("not set"),
        prediction
    );

    RefreshReport {
        clusters,
        active_target: active,
        prediction,
    }
}
