use drop_targets_core::TargetInfo;

use crate::cluster::TargetCluster;

/// Resolve the selected class label to its consolidated target position.
///
/// `None` when nothing is selected, the class produced no cluster, or its
/// median is not finite.
pub fn active_target(clusters: &[TargetCluster], class_label: Option<&str>) -> Option<TargetInfo> {
    let label = class_label?;
    let cluster = clusters.iter().find(|c| c.class_label == label)?;
    let median = cluster.median();
    median
        .is_finite()
        .then(|| TargetInfo::new(cluster.class_label.clone(), median))
}
