//! HTTP directions provider for the backend routes API.
//!
//! Posts to `<base_url>/routes/generate` and decodes the returned polyline.
//! The endpoint is walking-only, matching this crate's [`TransportMode`].
//! There is no retry or backoff here: route building treats the first
//! failure as final, so a failed request surfaces immediately as an error.
//!
//! [`TransportMode`]: crate::TransportMode

use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::directions::{DirectionsProvider, DirectionsRequest, DirectionsResult};
use crate::error::{Result, RouteBuildError};
use crate::GpsPoint;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Directions provider backed by the backend `/routes/generate` endpoint.
pub struct BackendDirectionsProvider {
    client: Client,
    base_url: String,
}

/// Coordinate pair as the routes API spells it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ApiPoint {
    lat: f64,
    lon: f64,
}

impl From<GpsPoint> for ApiPoint {
    fn from(p: GpsPoint) -> Self {
        Self {
            lat: p.latitude,
            lon: p.longitude,
        }
    }
}

impl From<ApiPoint> for GpsPoint {
    fn from(p: ApiPoint) -> Self {
        GpsPoint::new(p.lat, p.lon)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRouteRequest {
    starting_point: ApiPoint,
    finishing_point: ApiPoint,
    /// Target route length in meters; omitted for per-segment legs
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct GenerateRouteResponse {
    route: Vec<ApiPoint>,
    distance_m: f64,
}

impl BackendDirectionsProvider {
    /// Create a provider for the given API base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| RouteBuildError::HttpError {
                message: format!("Failed to create HTTP client: {}", e),
                status_code: None,
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl DirectionsProvider for BackendDirectionsProvider {
    async fn fetch_route(&self, request: &DirectionsRequest) -> Result<DirectionsResult> {
        let url = format!("{}/routes/generate", self.base_url);
        let body = GenerateRouteRequest {
            starting_point: request.origin.into(),
            finishing_point: request.destination.into(),
            distance: request.distance_hint_meters,
        };

        debug!(
            "[Directions] POST {} ({:.5},{:.5}) -> ({:.5},{:.5})",
            url,
            request.origin.latitude,
            request.origin.longitude,
            request.destination.latitude,
            request.destination.longitude
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RouteBuildError::DirectionsFailed {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("[Directions] Route request failed with status {}", status);
            return Err(RouteBuildError::HttpError {
                message: format!("route generation returned {}", status),
                status_code: Some(status.as_u16()),
            });
        }

        let decoded: GenerateRouteResponse =
            response
                .json()
                .await
                .map_err(|e| RouteBuildError::HttpError {
                    message: format!("invalid response body: {}", e),
                    status_code: None,
                })?;

        Ok(DirectionsResult {
            points: decoded.route.into_iter().map(GpsPoint::from).collect(),
            distance_meters: decoded.distance_m,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let body = GenerateRouteRequest {
            starting_point: ApiPoint {
                lat: 59.33,
                lon: 18.06,
            },
            finishing_point: ApiPoint {
                lat: 59.34,
                lon: 18.07,
            },
            distance: Some(5000.0),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["starting_point"]["lat"], 59.33);
        assert_eq!(json["starting_point"]["lon"], 18.06);
        assert_eq!(json["finishing_point"]["lat"], 59.34);
        assert_eq!(json["distance"], 5000.0);
    }

    #[test]
    fn test_request_omits_absent_distance() {
        let body = GenerateRouteRequest {
            starting_point: ApiPoint { lat: 0.0, lon: 0.0 },
            finishing_point: ApiPoint { lat: 1.0, lon: 1.0 },
            distance: None,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("distance").is_none());
    }

    #[test]
    fn test_response_decoding() {
        let raw = r#"{
            "route": [
                {"lat": 59.33, "lon": 18.06},
                {"lat": 59.34, "lon": 18.07}
            ],
            "distance_m": 1450.5
        }"#;

        let decoded: GenerateRouteResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.route.len(), 2);
        assert_eq!(decoded.distance_m, 1450.5);

        let point: GpsPoint = decoded.route[0].into();
        assert_eq!(point.latitude, 59.33);
        assert_eq!(point.longitude, 18.06);
    }
}
