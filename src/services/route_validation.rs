//! Route-compatibility check for carpool matching.
//!
//! Decides whether a passenger's pickup/drop pair is worth offering a seat
//! on a driver's route. Pure great-circle geometry over start/end points:
//! a cheap heuristic filter, not a road-routing engine.

use crate::constants::{
    DEFAULT_DIRECTION_TOLERANCE_DEG, DEFAULT_MAX_DEVIATION_KM, DEFAULT_MIN_OVERLAP_PCT,
    NEAR_ROUTE_BUFFER_KM, RELAXED_DIRECTION_TOLERANCE_DEG, RELAXED_MAX_DEVIATION_KM,
};
use crate::models::{Coordinates, ValidationResult};

/// Verdict message for a compatible trip. Reproduced verbatim for
/// compatibility with existing consumers.
pub const VALID_ROUTE_MESSAGE: &str =
    "Pickup and drop locations are valid and aligned with the owner's route.";

/// Verdict message for an incompatible trip. Reproduced verbatim for
/// compatibility with existing consumers.
pub const INVALID_ROUTE_MESSAGE: &str =
    "Invalid pickup or drop locations. Ensure they are near the owner's route and moving in the same direction.";

/// Tuning knobs for the compatibility decision. Callers pick explicit
/// values; there are no hidden module-level globals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationConfig {
    /// Maximum allowed deviation of a point from the route segment, km.
    pub max_deviation_km: f64,
    /// Maximum allowed angular difference between leg bearings, degrees.
    pub direction_tolerance_deg: f64,
    /// Minimum required overlap fraction between the two legs.
    pub min_overlap_pct: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            max_deviation_km: DEFAULT_MAX_DEVIATION_KM,
            direction_tolerance_deg: DEFAULT_DIRECTION_TOLERANCE_DEG,
            min_overlap_pct: DEFAULT_MIN_OVERLAP_PCT,
        }
    }
}

impl ValidationConfig {
    /// Relaxed preset: wider deviation bound, tighter direction tolerance.
    /// Suits longer commuter routes where a 2 km bound rejects pickups on
    /// parallel arterial roads.
    pub fn relaxed() -> Self {
        ValidationConfig {
            max_deviation_km: RELAXED_MAX_DEVIATION_KM,
            direction_tolerance_deg: RELAXED_DIRECTION_TOLERANCE_DEG,
            min_overlap_pct: DEFAULT_MIN_OVERLAP_PCT,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.max_deviation_km.is_finite() || self.max_deviation_km <= 0.0 {
            return Err("max_deviation_km must be positive".to_string());
        }
        if !(0.0..=180.0).contains(&self.direction_tolerance_deg) {
            return Err("direction_tolerance_deg must be between 0 and 180".to_string());
        }
        if !(0.0..=1.0).contains(&self.min_overlap_pct) {
            return Err("min_overlap_pct must be between 0 and 1".to_string());
        }
        Ok(())
    }
}

/// Stateless validator; shared freely across request handlers.
#[derive(Debug, Clone)]
pub struct RouteValidator {
    config: ValidationConfig,
}

impl RouteValidator {
    pub fn new(config: ValidationConfig) -> Self {
        RouteValidator { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Decide whether a passenger leg is compatible with a two-point
    /// driver route. All four checks are evaluated so the failure set can
    /// be logged; none has side effects.
    pub fn validate(
        &self,
        pickup: &Coordinates,
        drop: &Coordinates,
        route_start: &Coordinates,
        route_end: &Coordinates,
    ) -> ValidationResult {
        let pickup_near = self.is_point_near_segment(pickup, route_start, route_end);
        let drop_near = self.is_point_near_segment(drop, route_start, route_end);
        let aligned = self.directions_aligned(pickup, drop, route_start, route_end);
        let overlap = route_overlap(pickup, drop, route_start, route_end);
        let enough_overlap = overlap >= self.config.min_overlap_pct;

        let is_valid = pickup_near && drop_near && aligned && enough_overlap;
        if !is_valid {
            tracing::debug!(pickup_near, drop_near, aligned, overlap, "route rejected");
        }

        verdict(is_valid)
    }

    /// Polyline variant: pickup and drop must each be near some consecutive
    /// segment of the path, and the passenger leg must align with the
    /// whole-route bearing (first point toward last). No overlap check.
    ///
    /// A path with fewer than two points has no segments, so nothing is
    /// ever near it.
    pub fn validate_against_path(
        &self,
        pickup: &Coordinates,
        drop: &Coordinates,
        path: &[Coordinates],
    ) -> ValidationResult {
        let (first, last) = match (path.first(), path.last()) {
            (Some(first), Some(last)) if path.len() >= 2 => (first, last),
            _ => return verdict(false),
        };

        let pickup_near = self.is_point_near_path(pickup, path);
        let drop_near = self.is_point_near_path(drop, path);
        let aligned = self.directions_aligned(pickup, drop, first, last);

        let is_valid = pickup_near && drop_near && aligned;
        if !is_valid {
            tracing::debug!(pickup_near, drop_near, aligned, "path route rejected");
        }

        verdict(is_valid)
    }

    /// Triangle-inequality slack test: a point exactly on the segment has
    /// `d1 + d2 == segLen`; the excess approximates off-axis deviation.
    ///
    /// This is a cheap O(1) heuristic, not true cross-track distance. It
    /// degrades for points far beyond the segment's endpoints: a point on
    /// the segment's extension accumulates little slack and can still
    /// pass. Known limitation, kept for parity with the deployed filter.
    fn is_point_near_segment(
        &self,
        point: &Coordinates,
        seg_start: &Coordinates,
        seg_end: &Coordinates,
    ) -> bool {
        let d1 = point.distance_to(seg_start);
        let d2 = point.distance_to(seg_end);
        let seg_len = seg_start.distance_to(seg_end);

        (d1 + d2) - seg_len <= self.config.max_deviation_km + NEAR_ROUTE_BUFFER_KM
    }

    fn is_point_near_path(&self, point: &Coordinates, path: &[Coordinates]) -> bool {
        path.windows(2)
            .any(|seg| self.is_point_near_segment(point, &seg[0], &seg[1]))
    }

    fn directions_aligned(
        &self,
        a_start: &Coordinates,
        a_end: &Coordinates,
        b_start: &Coordinates,
        b_end: &Coordinates,
    ) -> bool {
        bearings_aligned(
            a_start.bearing_to(a_end),
            b_start.bearing_to(b_end),
            self.config.direction_tolerance_deg,
        )
    }
}

/// Circular angular comparison: 359 and 1 degrees are 2 degrees apart,
/// not 358.
fn bearings_aligned(bearing_a: f64, bearing_b: f64, tolerance_deg: f64) -> bool {
    let diff = (bearing_a - bearing_b).abs();
    diff <= tolerance_deg || diff >= 360.0 - tolerance_deg
}

/// Approximate fraction of route distance shared between the passenger leg
/// (pickup -> drop) and the driver leg (route_start -> route_end).
///
/// Uses the cross-distances between each leg's far endpoints as a rough
/// proxy for shared extent. Cheaper than true interval overlap on a
/// polyline, at the cost of accuracy for legs that diverge then
/// reconverge. Degenerate zero-length legs yield 0.0, never a division
/// error.
pub fn route_overlap(
    pickup: &Coordinates,
    drop: &Coordinates,
    route_start: &Coordinates,
    route_end: &Coordinates,
) -> f64 {
    let passenger_distance = pickup.distance_to(drop);
    let driver_distance = route_start.distance_to(route_end);

    let longest = passenger_distance.max(driver_distance);
    if longest <= f64::EPSILON {
        return 0.0;
    }

    let shared = pickup
        .distance_to(route_end)
        .min(route_start.distance_to(drop));

    shared / longest
}

fn verdict(is_valid: bool) -> ValidationResult {
    ValidationResult {
        is_valid,
        message: if is_valid {
            VALID_ROUTE_MESSAGE.to_string()
        } else {
            INVALID_ROUTE_MESSAGE.to_string()
        },
    }
}
