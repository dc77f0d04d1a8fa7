//! Sequential segment-by-segment route assembly.
//!
//! Given an ordered chain of points (start, intermediate waypoints, end),
//! resolves one directions request per consecutive pair and concatenates the
//! results into a single polyline with a summed distance. Requests run
//! strictly one at a time: sequential execution bounds the load on the
//! directions provider, keeps the call order deterministic, and lets the
//! first failing segment abort the chain without cancelling later requests
//! that were never issued.

use log::{debug, info};

use crate::directions::{DirectionsProvider, DirectionsRequest};
use crate::error::{Result, RouteBuildError};
use crate::{GpsPoint, Route};

/// Resolve a waypoint chain into one combined route.
///
/// For chain index `i`, directions are requested from `chain[i]` to
/// `chain[i + 1]`. Each resolved segment is appended to the accumulator with
/// the first point of every segment after the first dropped, since it
/// duplicates the previous segment's last point. Distances are summed.
///
/// The first failing segment aborts the whole assembly with
/// [`RouteBuildError::SegmentFailed`]; no partial route is ever returned.
pub async fn assemble_chain<P: DirectionsProvider>(
    provider: &P,
    chain: &[GpsPoint],
) -> Result<Route> {
    let segment_count = chain.len().saturating_sub(1);
    info!("[Assembler] Resolving {} segments", segment_count);

    let mut points: Vec<GpsPoint> = Vec::new();
    let mut total_distance = 0.0;

    for (index, pair) in chain.windows(2).enumerate() {
        let request = DirectionsRequest::walking(pair[0], pair[1]);
        let segment = provider.fetch_route(&request).await.map_err(|e| {
            RouteBuildError::SegmentFailed {
                segment_index: index,
                message: e.to_string(),
            }
        })?;

        if segment.points.is_empty() {
            return Err(RouteBuildError::SegmentFailed {
                segment_index: index,
                message: RouteBuildError::NoRoute.to_string(),
            });
        }

        debug!(
            "[Assembler] Segment {}/{}: {} points, {:.0}m",
            index + 1,
            segment_count,
            segment.points.len(),
            segment.distance_meters
        );

        // The first point of a follow-up segment duplicates the previous
        // segment's last point
        let skip = if points.is_empty() { 0 } else { 1 };
        points.extend(segment.points.into_iter().skip(skip));
        total_distance += segment.distance_meters;
    }

    info!(
        "[Assembler] Chain complete: {} points, {:.0}m total",
        points.len(),
        total_distance
    );

    Route::from_points(points, total_distance).ok_or(RouteBuildError::NoRoute)
}
