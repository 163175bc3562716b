use drop_targets_core::{Detection, GeoPoint, Severity, SeverityCounts};
use serde::{Deserialize, Serialize};

/// One detection inside a cluster, with its classification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterMember {
    pub detection: Detection,
    /// Position of the detection in the input class list (before filtering).
    ///
    /// This is what detection stores key deletions on.
    pub original_index: usize,
    /// Haversine distance to the cluster median in meters.
    pub distance_m: f64,
    pub severity: Severity,
}

/// Consolidated view of all detections of one class.
///
/// Invariant: `median_latitude`/`median_longitude` is the coordinate-wise
/// median of exactly `members`, and `members` is never empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetCluster {
    pub class_label: String,
    /// Members in input order.
    pub members: Vec<ClusterMember>,
    pub median_latitude: f64,
    pub median_longitude: f64,
    /// The class is listed as already served.
    #[serde(default)]
    pub completed: bool,
}

impl TargetCluster {
    #[inline]
    pub fn median(&self) -> GeoPoint {
        GeoPoint::new(self.median_latitude, self.median_longitude)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn severity_counts(&self) -> SeverityCounts {
        self.members.iter().map(|m| m.severity).collect()
    }

    /// The farthest tier reached by any member.
    pub fn worst_severity(&self) -> Option<Severity> {
        self.members.iter().map(|m| m.severity).max()
    }

    /// Members classified exactly as `severity`.
    pub fn members_with(&self, severity: Severity) -> impl Iterator<Item = &ClusterMember> {
        self.members.iter().filter(move |m| m.severity == severity)
    }
}
