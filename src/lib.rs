//! # Route Builder
//!
//! Route construction and GPS track simplification library for fitness
//! applications.
//!
//! This library provides:
//! - Directions-based route building with a desired-distance target
//! - Geometric waypoint synthesis to extend too-short routes
//! - Sequential segment-by-segment route assembly
//! - Douglas-Peucker track simplification tuned for live tracking
//! - Pure geodesic helpers (bearing, destination point, haversine)
//!
//! ## Features
//!
//! - **`http`** - HTTP directions provider backed by the routes API
//! - **`ffi`** - FFI bindings for mobile platforms (iOS/Android)
//!
//! ## Quick Start
//!
//! ```rust
//! use route_builder::{GpsPoint, TrackSimplifier};
//!
//! // Reduce a dense GPS track for rendering and storage
//! let track = vec![
//!     GpsPoint::new(51.5074, -0.1278),
//!     GpsPoint::new(51.5074, -0.1277),
//!     GpsPoint::new(51.5090, -0.1300),
//! ];
//!
//! let simplifier = TrackSimplifier::default();
//! let reduced = simplifier.simplify(&track);
//! assert_eq!(reduced.first(), track.first());
//! assert_eq!(reduced.last(), track.last());
//! ```
//!
//! Route building is async and driven by an injected [`DirectionsProvider`]:
//! the builder issues a direct request, and if the returned route is shorter
//! than the desired distance, fans out over synthesized waypoints and
//! assembles the legs in order.

use log::warn;
use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{Result, RouteBuildError};

// Geographic utilities (bearing, destination, haversine)
pub mod geo_utils;

// Douglas-Peucker track simplification
pub mod simplify;
pub use simplify::TrackSimplifier;

// Directions provider contract and request/result types
pub mod directions;
pub use directions::{DirectionsProvider, DirectionsRequest, DirectionsResult, TransportMode};

// Sequential segment-by-segment route assembly
pub mod assembler;
pub use assembler::assemble_chain;

// Desired-distance route building
pub mod builder;
pub use builder::RouteBuilder;

// HTTP directions provider for the routes API
#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "http")]
pub use http::BackendDirectionsProvider;

// FFI bindings for mobile platforms (iOS/Android)
#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

/// Initialize logging for Android (only used in FFI)
#[cfg(all(feature = "ffi", target_os = "android"))]
pub(crate) fn init_logging() {
    use android_logger::Config;
    use log::LevelFilter;

    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("RouteBuilderRust"),
    );
}

#[cfg(all(feature = "ffi", not(target_os = "android")))]
pub(crate) fn init_logging() {
    // No-op on non-Android platforms
}

// ============================================================================
// Core Types
// ============================================================================

/// A GPS coordinate with latitude and longitude.
///
/// # Example
/// ```
/// use route_builder::GpsPoint;
/// let point = GpsPoint::new(51.5074, -0.1278); // London
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct GpsPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsPoint {
    /// Create a new GPS point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// Bounding box for a route or track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create bounds from GPS points.
    pub fn from_points(points: &[GpsPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lng = f64::MAX;
        let mut max_lng = f64::MIN;

        for p in points {
            min_lat = min_lat.min(p.latitude);
            max_lat = max_lat.max(p.latitude);
            min_lng = min_lng.min(p.longitude);
            max_lng = max_lng.max(p.longitude);
        }

        Some(Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        })
    }

    /// Get the center point of the bounds.
    pub fn center(&self) -> GpsPoint {
        GpsPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// A built route ready for rendering and storage.
///
/// The polyline is ordered start to end. Total distance comes from the
/// directions provider, summed over segments for multi-leg routes. Bounds
/// and center are pre-computed so the map layer never recalculates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct Route {
    /// Route polyline, ordered start to end
    pub points: Vec<GpsPoint>,
    /// Total route distance in meters
    pub distance_meters: f64,
    /// Pre-computed bounding box
    pub bounds: Bounds,
    /// Pre-computed center point (for map rendering)
    pub center: GpsPoint,
}

impl Route {
    /// Create a route from a polyline and its provider-reported distance.
    ///
    /// Returns `None` if the polyline has fewer than 2 points.
    pub fn from_points(points: Vec<GpsPoint>, distance_meters: f64) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let bounds = Bounds::from_points(&points)?;
        let center = bounds.center();

        Some(Self {
            points,
            distance_meters,
            bounds,
            center,
        })
    }

    /// Serialize the route to JSON for the storage/presentation boundary.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            warn!("Failed to serialize route: {}", e);
            "{}".to_string()
        })
    }
}

/// One continuously-tracked stretch of a live session.
///
/// A session may hold several segments (a new one starts after a stationary
/// pause). A segment is owned and mutated by a single tracking session;
/// simplification replaces its point list wholesale, never partially.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackSegment {
    pub points: Vec<GpsPoint>,
}

impl TrackSegment {
    /// Create an empty segment.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a GPS fix to the segment.
    pub fn push(&mut self, point: GpsPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total tracked distance in meters.
    pub fn length_meters(&self) -> f64 {
        geo_utils::polyline_length(&self.points)
    }

    /// Reduce the segment's points in place with the given simplifier.
    ///
    /// Runs on every location update during live tracking, so it relies on
    /// the simplifier's planar fast path rather than great-circle math.
    pub fn simplify(&mut self, simplifier: &TrackSimplifier) {
        simplifier.simplify_in_place(&mut self.points);
    }

    /// Serialize the segment to JSON for the session-end storage handoff.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            warn!("Failed to serialize track segment: {}", e);
            "{}".to_string()
        })
    }
}
