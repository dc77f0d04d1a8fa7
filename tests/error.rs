//! Tests for error module

use route_builder::RouteBuildError;

#[test]
fn test_segment_failed_display() {
    let err = RouteBuildError::SegmentFailed {
        segment_index: 3,
        message: "connection reset".to_string(),
    };
    assert!(err.to_string().contains("Segment 3"));
    assert!(err.to_string().contains("connection reset"));
}

#[test]
fn test_no_route_display() {
    let err = RouteBuildError::NoRoute;
    assert!(err.to_string().contains("No route"));
}

#[test]
fn test_http_error_display() {
    let with_status = RouteBuildError::HttpError {
        message: "bad gateway".to_string(),
        status_code: Some(502),
    };
    assert!(with_status.to_string().contains("502"));

    let without_status = RouteBuildError::HttpError {
        message: "connection refused".to_string(),
        status_code: None,
    };
    assert!(without_status.to_string().contains("connection refused"));
    assert!(!without_status.to_string().contains("("));
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&RouteBuildError::NoRoute);
}
