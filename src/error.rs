//! Unified error handling for the route-builder library.
//!
//! Route building has no fallback path: a failed provider call or a failed
//! segment aborts the whole build, and the error propagates to the caller
//! unchanged. No subsystem retries or downgrades an error into a default
//! route.

use std::fmt;

/// Unified error type for route-builder operations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "ffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum RouteBuildError {
    /// The underlying directions provider call itself errored
    /// (network/transport failure)
    DirectionsFailed { message: String },
    /// The provider succeeded but returned no route for the requested
    /// origin/destination pair
    NoRoute,
    /// One leg of a multi-waypoint assembly failed; the whole build aborts
    SegmentFailed {
        segment_index: usize,
        message: String,
    },
    /// Build inputs had non-finite or out-of-range coordinates
    InvalidCoordinates { message: String },
    /// HTTP/API error from the backend provider
    HttpError {
        message: String,
        status_code: Option<u16>,
    },
}

impl fmt::Display for RouteBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteBuildError::DirectionsFailed { message } => {
                write!(f, "Directions request failed: {}", message)
            }
            RouteBuildError::NoRoute => {
                write!(f, "No route found between the requested points")
            }
            RouteBuildError::SegmentFailed {
                segment_index,
                message,
            } => {
                write!(f, "Segment {} failed: {}", segment_index, message)
            }
            RouteBuildError::InvalidCoordinates { message } => {
                write!(f, "Invalid coordinates: {}", message)
            }
            RouteBuildError::HttpError {
                message,
                status_code,
            } => {
                if let Some(code) = status_code {
                    write!(f, "HTTP error ({}): {}", code, message)
                } else {
                    write!(f, "HTTP error: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for RouteBuildError {}

/// Result type alias for route-builder operations.
pub type Result<T> = std::result::Result<T, RouteBuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RouteBuildError::SegmentFailed {
            segment_index: 2,
            message: "connection reset".to_string(),
        };
        assert!(err.to_string().contains("Segment 2"));
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_http_error_with_status() {
        let err = RouteBuildError::HttpError {
            message: "service unavailable".to_string(),
            status_code: Some(503),
        };
        assert!(err.to_string().contains("503"));
    }
}
