//! Coordinate-wise median of latitude/longitude samples.
//!
//! Latitudes and longitudes are sorted independently, so the resulting point
//! is generally *not* one of the inputs (it is a robust centroid proxy, not a
//! medoid). Severity thresholds are tuned against exactly this estimator;
//! swapping in a geometric median would shift every classification.

use crate::GeoPoint;

/// Median of an ascending-sorted slice: the middle element for odd lengths,
/// the mean of the two central elements for even lengths.
///
/// Returns `None` for an empty slice.
pub fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

fn median_of(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    median_of_sorted(&sorted)
}

/// Median latitude and longitude of paired samples.
///
/// `latitudes[k]` and `longitudes[k]` describe the same sample. Returns
/// `None` when the inputs are empty or their lengths differ. Callers are
/// expected to drop non-finite samples first.
///
/// Each axis is sorted on its own, so the result need not coincide with any
/// input sample and can pair coordinates from different detections when the
/// cloud is skewed. Severity thresholds are tuned against this estimator.
pub fn median_lat_lon(latitudes: &[f64], longitudes: &[f64]) -> Option<GeoPoint> {
    if latitudes.len() != longitudes.len() {
        return None;
    }
    Some(GeoPoint {
        latitude: median_of(latitudes)?,
        longitude: median_of(longitudes)?,
    })
}

/// [`median_lat_lon`] over a slice of points.
pub fn coordinate_median(points: &[GeoPoint]) -> Option<GeoPoint> {
    let (latitudes, longitudes): (Vec<f64>, Vec<f64>) =
        points.iter().map(|p| (p.latitude, p.longitude)).unzip();
    median_lat_lon(&latitudes, &longitudes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn single_sample_is_its_own_median() {
        let m = median_lat_lon(&[50.1], &[-114.2]).expect("median");
        assert_eq!(m, GeoPoint::new(50.1, -114.2));
    }

    #[test]
    fn two_samples_average_each_axis() {
        let m = median_lat_lon(&[50.0, 50.0001], &[-114.0, -114.0001]).expect("median");
        assert_abs_diff_eq!(m.latitude, 50.00005, epsilon = 1e-12);
        assert_abs_diff_eq!(m.longitude, -114.00005, epsilon = 1e-12);
    }

    #[test]
    fn odd_count_takes_middle_after_sorting() {
        let m = median_lat_lon(&[3.0, 1.0, 2.0], &[10.0, 30.0, 20.0]).expect("median");
        assert_eq!(m, GeoPoint::new(2.0, 20.0));
    }

    #[test]
    fn axes_are_sorted_independently() {
        // The median pairs latitude from one sample with longitude from another.
        let points = [
            GeoPoint::new(0.0, 2.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(2.0, 1.0),
        ];
        let m = coordinate_median(&points).expect("median");
        assert_eq!(m, GeoPoint::new(1.0, 1.0));
        assert!(!points.contains(&m));
    }

    #[test]
    fn even_count_averages_central_pair() {
        assert_eq!(median_of_sorted(&[1.0, 2.0, 4.0, 8.0]), Some(3.0));
    }

    #[test]
    fn empty_or_mismatched_inputs_have_no_median() {
        assert_eq!(median_lat_lon(&[], &[]), None);
        assert_eq!(median_lat_lon(&[1.0, 2.0], &[1.0]), None);
        assert_eq!(coordinate_median(&[]), None);
    }
}
