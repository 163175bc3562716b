use drop_targets_core::{distance_m, median_lat_lon, Detection, DetectionsByClass, Severity};
use log::{debug, warn};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::cluster::{ClusterMember, TargetCluster};
use crate::params::ConsolidateParams;

/// Consolidate every class with default parameters.
///
/// Classes with no usable detection produce no cluster. The output follows
/// label order.
pub fn consolidate(detections: &DetectionsByClass) -> Vec<TargetCluster> {
    consolidate_with(detections, &ConsolidateParams::default())
}

/// Consolidate every class, honoring completed-target handling in `params`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(detections, params), fields(classes = detections.len()))
)]
pub fn consolidate_with(
    detections: &DetectionsByClass,
    params: &ConsolidateParams,
) -> Vec<TargetCluster> {
    detections
        .iter()
        .filter(|(label, _)| {
            let skip = params.skips(label);
            if skip {
                debug!("{label}: completed, hidden");
            }
            !skip
        })
        .filter_map(|(label, class_detections)| {
            let mut cluster = consolidate_class(label, class_detections)?;
            cluster.completed = params.is_completed(label);
            Some(cluster)
        })
        .collect()
}

/// Consolidate the detections of a single class.
///
/// Detections with non-finite coordinates are dropped before the median is
/// taken and never appear as members. Returns `None` when nothing usable is
/// left. Every member's `class_label` is set to `class_label`.
pub fn consolidate_class(class_label: &str, detections: &[Detection]) -> Option<TargetCluster> {
    let usable: Vec<(usize, &Detection)> = detections
        .iter()
        .enumerate()
        .filter(|(_, det)| det.has_finite_position())
        .collect();

    let dropped = detections.len() - usable.len();
    if dropped > 0 {
        warn!("{class_label}: dropped {dropped} detection(s) with non-finite coordinates");
    }

    let (latitudes, longitudes): (Vec<f64>, Vec<f64>) = usable
        .iter()
        .map(|(_, det)| (det.latitude, det.longitude))
        .unzip();
    let median = median_lat_lon(&latitudes, &longitudes)?;

    let members: Vec<ClusterMember> = usable
        .into_iter()
        .map(|(original_index, det)| {
            let distance = distance_m(det.position(), median);
            ClusterMember {
                detection: Detection {
                    class_label: class_label.to_owned(),
                    ..det.clone()
                },
                original_index,
                distance_m: distance,
                severity: Severity::from_distance(distance),
            }
        })
        .collect();

    debug!(
        "{class_label}: {} member(s), median ({:.7}, {:.7})",
        members.len(),
        median.latitude,
        median.longitude
    );

    Some(TargetCluster {
        class_label: class_label.to_owned(),
        members,
        median_latitude: median.latitude,
        median_longitude: median.longitude,
        completed: false,
    })
}
