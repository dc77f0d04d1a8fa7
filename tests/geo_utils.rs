//! Tests for geo_utils module

use route_builder::geo_utils::*;
use route_builder::GpsPoint;

fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

#[test]
fn test_haversine_distance_same_point() {
    let p = GpsPoint::new(51.5074, -0.1278);
    assert_eq!(haversine_distance(&p, &p), 0.0);
}

#[test]
fn test_haversine_distance_known_value() {
    // London to Paris is approximately 344 km
    let london = GpsPoint::new(51.5074, -0.1278);
    let paris = GpsPoint::new(48.8566, 2.3522);
    let dist = haversine_distance(&london, &paris);
    assert!(approx_eq(dist, 343_560.0, 5000.0)); // Within 5km
}

#[test]
fn test_polyline_length_empty_and_single() {
    assert_eq!(polyline_length(&[]), 0.0);
    assert_eq!(polyline_length(&[GpsPoint::new(51.5074, -0.1278)]), 0.0);
}

#[test]
fn test_polyline_length_two_points() {
    let track = vec![
        GpsPoint::new(51.5074, -0.1278),
        GpsPoint::new(51.5080, -0.1280),
    ];
    let length = polyline_length(&track);
    assert!(length > 0.0);
    assert!(length < 100.0); // Should be about 68m
}

#[test]
fn test_bearing_cardinal_directions() {
    let origin = GpsPoint::new(0.0, 0.0);

    let north = initial_bearing(&origin, &GpsPoint::new(1.0, 0.0));
    let east = initial_bearing(&origin, &GpsPoint::new(0.0, 1.0));
    let south = initial_bearing(&origin, &GpsPoint::new(-1.0, 0.0));
    let west = initial_bearing(&origin, &GpsPoint::new(0.0, -1.0));

    assert!(approx_eq(north, 0.0, 1e-9));
    assert!(approx_eq(east, 90.0, 1e-9));
    assert!(approx_eq(south, 180.0, 1e-9));
    assert!(approx_eq(west, 270.0, 1e-9));
}

#[test]
fn test_bearing_identical_points_is_zero() {
    // Mathematically undefined (0/0); must be a deterministic 0, not NaN
    let p = GpsPoint::new(51.5074, -0.1278);
    assert_eq!(initial_bearing(&p, &p), 0.0);
}

#[test]
fn test_bearing_always_in_range() {
    let points = [
        GpsPoint::new(51.5074, -0.1278),
        GpsPoint::new(48.8566, 2.3522),
        GpsPoint::new(-33.8688, 151.2093),
        GpsPoint::new(35.6762, 139.6503),
        GpsPoint::new(64.1466, -21.9426),
    ];

    for from in &points {
        for to in &points {
            let bearing = initial_bearing(from, to);
            assert!(
                (0.0..360.0).contains(&bearing),
                "bearing {} out of range for {:?} -> {:?}",
                bearing,
                from,
                to
            );
        }
    }
}

#[test]
fn test_normalize_bearing() {
    assert_eq!(normalize_bearing(0.0), 0.0);
    assert_eq!(normalize_bearing(360.0), 0.0);
    assert_eq!(normalize_bearing(-45.0), 315.0);
    assert_eq!(normalize_bearing(370.0), 10.0);
    assert!(approx_eq(normalize_bearing(495.0), 135.0, 1e-9));
}

#[test]
fn test_destination_round_trip_distance() {
    // Projecting D meters along any bearing should land ~D meters away
    // (small relative tolerance covers the spherical-radius difference
    // between the projection and the haversine check)
    let start = GpsPoint::new(51.5074, -0.1278);

    for bearing in [0.0, 45.0, 137.0, 220.5, 315.0] {
        for distance in [50.0, 500.0, 5_000.0, 50_000.0] {
            let dest = destination_point(&start, distance, bearing);
            let measured = haversine_distance(&start, &dest);
            assert!(
                approx_eq(measured, distance, distance * 1e-3),
                "bearing {} distance {}: measured {}",
                bearing,
                distance,
                measured
            );
        }
    }
}

#[test]
fn test_destination_round_trip_bearing() {
    let start = GpsPoint::new(51.5074, -0.1278);

    for bearing in [10.0, 85.0, 190.0, 275.0] {
        let dest = destination_point(&start, 1_000.0, bearing);
        let measured = initial_bearing(&start, &dest);
        assert!(
            approx_eq(measured, bearing, 0.1),
            "bearing {}: measured {}",
            bearing,
            measured
        );
    }
}

#[test]
fn test_destination_zero_distance() {
    let start = GpsPoint::new(51.5074, -0.1278);
    let dest = destination_point(&start, 0.0, 123.0);
    assert!(approx_eq(dest.latitude, start.latitude, 1e-9));
    assert!(approx_eq(dest.longitude, start.longitude, 1e-9));
}

#[test]
fn test_planar_midpoint() {
    let a = GpsPoint::new(51.50, -0.10);
    let b = GpsPoint::new(51.52, -0.12);
    let mid = planar_midpoint(&a, &b);
    assert!(approx_eq(mid.latitude, 51.51, 1e-9));
    assert!(approx_eq(mid.longitude, -0.11, 1e-9));
}
