//! Directions provider contract and request/result types.
//!
//! The provider is an injected collaborator: route building never talks to a
//! process-wide client. Implementations resolve one origin/destination pair
//! per call; the assembler keeps at most one request in flight, so providers
//! need no internal serialization. Dropping an in-flight future cancels the
//! request - cancellation is a caller-level concern, not a provider one.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::GpsPoint;

/// Transport mode for a directions request.
///
/// Route building in this domain always walks; the mode travels with the
/// request so a provider backed by a richer API can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransportMode {
    #[default]
    Walking,
}

/// A single directions request between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRequest {
    pub origin: GpsPoint,
    pub destination: GpsPoint,
    pub mode: TransportMode,
    /// Target route length in meters. Set on the initial direct request
    /// only; per-segment legs carry `None`. Providers may ignore it.
    pub distance_hint_meters: Option<f64>,
}

impl DirectionsRequest {
    /// Walking request with no distance hint.
    pub fn walking(origin: GpsPoint, destination: GpsPoint) -> Self {
        Self {
            origin,
            destination,
            mode: TransportMode::Walking,
            distance_hint_meters: None,
        }
    }

    /// Attach a target route length in meters.
    pub fn with_distance_hint(mut self, meters: f64) -> Self {
        self.distance_hint_meters = Some(meters);
        self
    }
}

/// A resolved route polyline with its provider-reported length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResult {
    /// Polyline ordered origin to destination
    pub points: Vec<GpsPoint>,
    /// Route length in meters
    pub distance_meters: f64,
}

/// Abstracted directions backend consumed by route building.
///
/// Transport-level failures map to [`RouteBuildError::DirectionsFailed`]
/// (or [`RouteBuildError::HttpError`] for the HTTP provider); a successful
/// call with an empty polyline is interpreted as "no route" by the caller.
/// No implementation retries - failures surface immediately.
///
/// [`RouteBuildError::DirectionsFailed`]: crate::RouteBuildError::DirectionsFailed
/// [`RouteBuildError::HttpError`]: crate::RouteBuildError::HttpError
#[allow(async_fn_in_trait)]
pub trait DirectionsProvider {
    /// Resolve a route for the given request.
    async fn fetch_route(&self, request: &DirectionsRequest) -> Result<DirectionsResult>;
}

impl<P: DirectionsProvider> DirectionsProvider for &P {
    async fn fetch_route(&self, request: &DirectionsRequest) -> Result<DirectionsResult> {
        (**self).fetch_route(request).await
    }
}
