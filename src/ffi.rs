//! FFI bindings for mobile platforms (iOS/Android).
//!
//! This module provides the UniFFI bindings that expose Rust functionality
//! to Kotlin and Swift. FFI functions that shadow an internal name are
//! prefixed with `ffi_` to avoid conflicts.

use log::{debug, info};

use crate::{geo_utils, init_logging, GpsPoint, Route, TrackSimplifier};
#[cfg(feature = "http")]
use crate::RouteBuildError;

// ============================================================================
// Track Simplification
// ============================================================================

/// Simplify a GPS track with the given tolerance in meters.
#[uniffi::export]
pub fn simplify_track(points: Vec<GpsPoint>, epsilon_meters: f64) -> Vec<GpsPoint> {
    init_logging();
    debug!(
        "[RouteBuilderRust] simplify_track called with {} points (epsilon {:.1}m)",
        points.len(),
        epsilon_meters
    );
    let simplified = TrackSimplifier::new(epsilon_meters).simplify(&points);
    info!(
        "[RouteBuilderRust] Simplified {} -> {} points",
        points.len(),
        simplified.len()
    );
    simplified
}

/// Simplify a GPS track with the live-tracking tolerance (0.5 m).
#[uniffi::export]
pub fn simplify_track_for_live_tracking(points: Vec<GpsPoint>) -> Vec<GpsPoint> {
    init_logging();
    TrackSimplifier::for_live_tracking().simplify(&points)
}

// ============================================================================
// Geodesy Helpers
// ============================================================================

/// Total track length in meters.
#[uniffi::export]
pub fn track_length(points: Vec<GpsPoint>) -> f64 {
    geo_utils::polyline_length(&points)
}

/// Initial compass bearing in degrees [0, 360) between two points.
#[uniffi::export]
pub fn ffi_initial_bearing(from: GpsPoint, to: GpsPoint) -> f64 {
    geo_utils::initial_bearing(&from, &to)
}

/// Project a point along a bearing on a spherical Earth.
#[uniffi::export]
pub fn ffi_destination_point(
    from: GpsPoint,
    distance_meters: f64,
    bearing_degrees: f64,
) -> GpsPoint {
    geo_utils::destination_point(&from, distance_meters, bearing_degrees)
}

// ============================================================================
// Route Building
// ============================================================================

/// Serialize a route to JSON for the host app's storage layer.
#[uniffi::export]
pub fn route_to_json(route: Route) -> String {
    route.to_json()
}

/// Build a route against the backend routes API.
///
/// Constructs a [`crate::BackendDirectionsProvider`] for `base_url` and runs
/// the full desired-distance build. Errors surface to the host app as
/// thrown exceptions carrying the Rust error message.
#[cfg(feature = "http")]
#[uniffi::export(async_runtime = "tokio")]
pub async fn ffi_build_route(
    base_url: String,
    start: GpsPoint,
    end: GpsPoint,
    desired_distance_km: u32,
) -> Result<Route, RouteBuildError> {
    init_logging();
    info!(
        "[RouteBuilderRust] build_route called, desired {}km",
        desired_distance_km
    );
    let provider = crate::BackendDirectionsProvider::new(&base_url)?;
    let builder = crate::RouteBuilder::new(provider);
    builder.build_route(start, end, desired_distance_km).await
}
