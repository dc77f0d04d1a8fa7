//! # Geographic Utilities
//!
//! Pure geodesic helpers used by route building and track analysis.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`haversine_distance`] | Great-circle distance between two GPS points |
//! | [`polyline_length`] | Total length of a GPS track in meters |
//! | [`initial_bearing`] | Initial compass bearing from one point to another |
//! | [`destination_point`] | Forward projection along a bearing |
//! | [`normalize_bearing`] | Wrap a bearing into `[0, 360)` |
//! | [`planar_midpoint`] | Arithmetic midpoint of two points |
//!
//! All functions are stateless and defined for every numeric input,
//! including degenerate ones (identical points, zero distance); none of them
//! can fail. Trigonometry runs in radians internally with exact degree
//! conversion at function boundaries.
//!
//! ## Coordinate System
//!
//! All functions expect WGS84 coordinates (latitude/longitude in degrees),
//! the standard used by GPS receivers and mapping services. Spherical
//! formulas assume a mean Earth radius of 6,371 km.

use crate::GpsPoint;
use geo::{Distance, Haversine, Point};

/// Mean Earth radius in meters (spherical approximation).
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

// =============================================================================
// Distance Functions
// =============================================================================

/// Calculate the great-circle distance between two GPS points using the
/// Haversine formula.
///
/// Returns the distance in meters along the Earth's surface. Route distances
/// come from the directions provider; this helper backs secondary geometry
/// checks and track-length accounting.
///
/// # Example
///
/// ```rust
/// use route_builder::{geo_utils, GpsPoint};
///
/// let london = GpsPoint::new(51.5074, -0.1278);
/// let paris = GpsPoint::new(48.8566, 2.3522);
///
/// let distance = geo_utils::haversine_distance(&london, &paris);
/// assert!((distance - 343_560.0).abs() < 1000.0); // ~344 km
/// ```
#[inline]
pub fn haversine_distance(p1: &GpsPoint, p2: &GpsPoint) -> f64 {
    let point1 = Point::new(p1.longitude, p1.latitude);
    let point2 = Point::new(p2.longitude, p2.latitude);
    Haversine::distance(point1, point2)
}

/// Calculate the total length of a polyline (GPS track) in meters.
///
/// Sums the haversine distance between consecutive points. Empty or
/// single-point tracks return 0.0.
pub fn polyline_length(points: &[GpsPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    points
        .windows(2)
        .map(|w| haversine_distance(&w[0], &w[1]))
        .sum()
}

// =============================================================================
// Bearing Functions
// =============================================================================

/// Initial compass bearing in degrees `[0, 360)` from one point to another.
///
/// Uses the standard spherical bearing formula. For identical points the
/// formula degenerates to `atan2(0, 0)`, which is `0.0` in IEEE-754, so the
/// result is a deterministic `0.0` rather than NaN; callers must tolerate
/// this.
pub fn initial_bearing(from: &GpsPoint, to: &GpsPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let y = delta_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

    normalize_bearing(y.atan2(x).to_degrees())
}

/// Wrap a bearing in degrees into `[0, 360)`.
#[inline]
pub fn normalize_bearing(degrees: f64) -> f64 {
    (degrees + 360.0) % 360.0
}

/// Project a point `distance_meters` along `bearing_degrees` on a spherical
/// Earth.
///
/// Converts the distance to an angular distance over the mean Earth radius,
/// then applies the direct geodesic formula. A zero distance returns the
/// origin.
pub fn destination_point(from: &GpsPoint, distance_meters: f64, bearing_degrees: f64) -> GpsPoint {
    let angular = distance_meters / EARTH_RADIUS_METERS;
    let bearing = bearing_degrees.to_radians();
    let lat1 = from.latitude.to_radians();
    let lng1 = from.longitude.to_radians();

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lng2 = lng1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    GpsPoint::new(lat2.to_degrees(), lng2.to_degrees())
}

// =============================================================================
// Midpoint
// =============================================================================

/// Arithmetic midpoint of two points in degree space.
///
/// Not a true geodesic midpoint. Waypoint fan-out operates over city-scale
/// distances where the planar shortcut is indistinguishable on a map, and
/// route shape depends on it staying exactly this.
#[inline]
pub fn planar_midpoint(a: &GpsPoint, b: &GpsPoint) -> GpsPoint {
    GpsPoint::new(
        (a.latitude + b.latitude) / 2.0,
        (a.longitude + b.longitude) / 2.0,
    )
}
