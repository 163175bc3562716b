use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Configuration for a consolidation pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidateParams {
    /// Class labels whose payload has already been delivered.
    pub completed_targets: BTreeSet<String>,
    /// Emit completed classes (flagged `completed`) instead of omitting them.
    pub include_completed: bool,
}

impl Default for ConsolidateParams {
    fn default() -> Self {
        Self {
            completed_targets: BTreeSet::new(),
            include_completed: true,
        }
    }
}

impl ConsolidateParams {
    pub fn is_completed(&self, class_label: &str) -> bool {
        self.completed_targets.contains(class_label)
    }

    /// Whether a class should be dropped from the output entirely.
    pub fn skips(&self, class_label: &str) -> bool {
        !self.include_completed && self.is_completed(class_label)
    }
}
