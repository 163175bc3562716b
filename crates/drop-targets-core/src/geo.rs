//! Spherical-earth geodesy.
//!
//! Both primitives work on a sphere of radius [`EARTH_RADIUS_M`]; there is no
//! ellipsoid model. At drop-zone scales (tens to hundreds of meters) the
//! spherical error is far below GNSS noise.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon")]
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both coordinates are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Great-circle distance to `other` in meters.
    #[inline]
    pub fn distance_to(&self, other: GeoPoint) -> f64 {
        distance_m(*self, other)
    }
}

/// Haversine great-circle distance in meters between two points given in
/// decimal degrees.
///
/// Symmetric in its arguments and exactly `0.0` for identical points.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // rounding can push `a` past 1 for near-antipodal points
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// [`haversine_distance`] on [`GeoPoint`]s.
#[inline]
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Forward geodesic on the sphere: the point reached by travelling
/// `distance_m` meters from `(lat, lon)` along the initial bearing
/// `bearing_deg` (degrees clockwise from north).
///
/// Returns `(lat, lon)` in decimal degrees. Longitude is not wrapped into
/// `[-180, 180)`.
pub fn project_point(lat: f64, lon: f64, bearing_deg: f64, distance_m: f64) -> (f64, f64) {
    let delta = distance_m / EARTH_RADIUS_M;
    let theta = bearing_deg.to_radians();
    let phi1 = lat.to_radians();
    let lambda1 = lon.to_radians();

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    (phi2.to_degrees(), lambda2.to_degrees())
}

/// [`project_point`] on [`GeoPoint`]s.
#[inline]
pub fn destination_point(origin: GeoPoint, bearing_deg: f64, distance_m: f64) -> GeoPoint {
    let (latitude, longitude) =
        project_point(origin.latitude, origin.longitude, bearing_deg, distance_m);
    GeoPoint {
        latitude,
        longitude,
    }
}
