use approx::assert_abs_diff_eq;
use drop_targets_cluster::{active_target, consolidate, consolidate_with, ConsolidateParams};
use drop_targets_core::{distance_m, Detection, DetectionsByClass, Severity};

fn car_detections() -> DetectionsByClass {
    let mut map = DetectionsByClass::new();
    map.insert(
        "car".to_string(),
        vec![
            Detection::new("car", 50.0, -114.0, 0.9),
            Detection::new("car", 50.0001, -114.0001, 0.8),
            Detection::new("car", 50.05, -114.05, 0.7),
        ],
    );
    map
}

#[test]
fn car_scenario_flags_the_far_detection() {
    let clusters = consolidate(&car_detections());
    assert_eq!(clusters.len(), 1);
    let car = &clusters[0];

    // Odd count: the middle value of each independently sorted axis.
    assert_eq!(car.median_latitude, 50.0001);
    assert_eq!(car.median_longitude, -114.0001);
    assert_abs_diff_eq!(car.median_latitude, 50.00005, epsilon = 1e-4);
    assert_abs_diff_eq!(car.median_longitude, -114.00005, epsilon = 1e-4);

    let severities: Vec<Severity> = car.members.iter().map(|m| m.severity).collect();
    assert_eq!(
        severities,
        vec![Severity::Normal, Severity::Normal, Severity::Major]
    );
    assert!(car.members[2].distance_m > 1_000.0);

    let counts = car.severity_counts();
    assert_eq!(counts.normal, 2);
    assert_eq!(counts.major, 1);
    assert_eq!(car.worst_severity(), Some(Severity::Major));
    assert_eq!(car.members_with(Severity::Normal).count(), 2);
}

#[test]
fn member_distances_match_haversine_to_median() {
    let clusters = consolidate(&car_detections());
    let car = &clusters[0];
    for member in &car.members {
        let expected = distance_m(member.detection.position(), car.median());
        assert_eq!(member.distance_m, expected);
    }
}

#[test]
fn severity_tiers_follow_distance_from_median() {
    // Five detections along a meridian, alternating sides of the first one.
    let offsets_m = [0.0_f64, 20.0, 50.0, 75.0, 120.0];
    let lat0 = 50.0_f64;
    let meters_per_deg = drop_targets_core::EARTH_RADIUS_M.to_radians();
    let mut map = DetectionsByClass::new();
    map.insert(
        "boat".to_string(),
        offsets_m
            .iter()
            .enumerate()
            .map(|(k, off)| {
                let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                Detection::new("boat", lat0 + sign * off / meters_per_deg, -114.0, 0.5)
            })
            .collect(),
    );

    let clusters = consolidate(&map);
    let boat = &clusters[0];
    assert_eq!(boat.median_latitude, lat0);
    assert_eq!(boat.median_longitude, -114.0);

    for (member, off) in boat.members.iter().zip(offsets_m) {
        assert_abs_diff_eq!(member.distance_m, off, epsilon = 1e-6);
    }
    let severities: Vec<Severity> = boat.members.iter().map(|m| m.severity).collect();
    assert_eq!(
        severities,
        vec![
            Severity::Normal,
            Severity::Normal,
            Severity::Minor,
            Severity::Mild,
            Severity::Major,
        ]
    );
}

#[test]
fn completed_target_can_still_be_selected_when_shown() {
    let mut params = ConsolidateParams::default();
    params.completed_targets.insert("car".to_string());

    let clusters = consolidate_with(&car_detections(), &params);
    let target = active_target(&clusters, Some("car")).expect("target");
    assert_eq!(target.position(), clusters[0].median());

    params.include_completed = false;
    let clusters = consolidate_with(&car_detections(), &params);
    assert!(clusters.is_empty());
    assert!(active_target(&clusters, Some("car")).is_none());
}

#[test]
fn clusters_serialize_with_lowercase_severity() {
    let clusters = consolidate(&car_detections());
    let json = serde_json::to_value(&clusters).expect("serialize");
    assert_eq!(json[0]["class_label"], "car");
    assert_eq!(json[0]["members"][2]["severity"], "major");
    assert_eq!(json[0]["members"][1]["original_index"], 1);
}
