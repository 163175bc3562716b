use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of [`Severity::Normal`], in meters from the median.
pub const NORMAL_MAX_M: f64 = 40.0;
/// Upper bound (exclusive) of [`Severity::Minor`].
pub const MINOR_MAX_M: f64 = 65.0;
/// Upper bound (exclusive) of [`Severity::Mild`]; anything at or beyond is
/// [`Severity::Major`].
pub const MILD_MAX_M: f64 = 90.0;

/// How far a single detection lies from its class median.
///
/// Ordered from closest to farthest, so `max()` over a cluster yields its
/// worst member.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Normal,
    Minor,
    Mild,
    Major,
}

impl Severity {
    /// Classify a distance-from-median in meters.
    ///
    /// Total and monotonic: every distance maps to exactly one tier. A NaN
    /// distance fails every bound and lands in `Major`.
    pub fn from_distance(distance_m: f64) -> Self {
        if distance_m < NORMAL_MAX_M {
            Severity::Normal
        } else if distance_m < MINOR_MAX_M {
            Severity::Minor
        } else if distance_m < MILD_MAX_M {
            Severity::Mild
        } else {
            Severity::Major
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Minor => "minor",
            Severity::Mild => "mild",
            Severity::Major => "major",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of members per severity tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub normal: usize,
    pub minor: usize,
    pub mild: usize,
    pub major: usize,
}

impl SeverityCounts {
    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Normal => self.normal += 1,
            Severity::Minor => self.minor += 1,
            Severity::Mild => self.mild += 1,
            Severity::Major => self.major += 1,
        }
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Normal => self.normal,
            Severity::Minor => self.minor,
            Severity::Mild => self.mild,
            Severity::Major => self.major,
        }
    }

    pub fn total(&self) -> usize {
        self.normal + self.minor + self.mild + self.major
    }
}

impl FromIterator<Severity> for SeverityCounts {
    fn from_iter<I: IntoIterator<Item = Severity>>(iter: I) -> Self {
        let mut counts = SeverityCounts::default();
        for severity in iter {
            counts.add(severity);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_lower_inclusive() {
        assert_eq!(Severity::from_distance(0.0), Severity::Normal);
        assert_eq!(Severity::from_distance(39.999), Severity::Normal);
        assert_eq!(Severity::from_distance(40.0), Severity::Minor);
        assert_eq!(Severity::from_distance(64.999), Severity::Minor);
        assert_eq!(Severity::from_distance(65.0), Severity::Mild);
        assert_eq!(Severity::from_distance(89.999), Severity::Mild);
        assert_eq!(Severity::from_distance(90.0), Severity::Major);
        assert_eq!(Severity::from_distance(1.0e7), Severity::Major);
    }

    #[test]
    fn classification_is_monotonic() {
        let mut prev = Severity::Normal;
        for step in 0..2_000 {
            let s = Severity::from_distance(step as f64 * 0.1);
            assert!(s >= prev, "severity dropped at {} m", step as f64 * 0.1);
            prev = s;
        }
        assert_eq!(prev, Severity::Major);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Mild).expect("serialize");
        assert_eq!(json, "\"mild\"");
        let back: Severity = serde_json::from_str("\"major\"").expect("deserialize");
        assert_eq!(back, Severity::Major);
    }

    #[test]
    fn counts_collect_from_iterator() {
        let counts: SeverityCounts = [Severity::Normal, Severity::Major, Severity::Normal]
            .into_iter()
            .collect();
        assert_eq!(counts.normal, 2);
        assert_eq!(counts.get(Severity::Major), 1);
        assert_eq!(counts.total(), 3);
    }
}
