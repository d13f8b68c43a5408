//! Stable application-wide constants.
//!
//! Values here are structural invariants and default fallbacks for
//! env-var-based configuration. Tuning knobs that callers should pick
//! explicitly live in [`ValidationConfig`](crate::services::route_validation::ValidationConfig).

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Geometry ---

/// Mean Earth radius in kilometers, used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Slack added to the near-route deviation bound to absorb floating-point
/// error in the triangle-inequality test (100 m).
pub const NEAR_ROUTE_BUFFER_KM: f64 = 0.1;

// --- Validation defaults (strict preset, overridable via env) ---

/// Default maximum deviation from the driver's route, in kilometers.
pub const DEFAULT_MAX_DEVIATION_KM: f64 = 2.0;
/// Default bearing alignment tolerance, in degrees.
pub const DEFAULT_DIRECTION_TOLERANCE_DEG: f64 = 45.0;
/// Default minimum required route overlap fraction (40%).
pub const DEFAULT_MIN_OVERLAP_PCT: f64 = 0.4;

// --- Relaxed preset ---
// The original deployment ran two inconsistent tolerance pairs; the relaxed
// pair suits longer commuter routes where a 2 km bound is too tight.

/// Relaxed maximum deviation, in kilometers.
pub const RELAXED_MAX_DEVIATION_KM: f64 = 5.0;
/// Relaxed bearing alignment tolerance, in degrees.
pub const RELAXED_DIRECTION_TOLERANCE_DEG: f64 = 30.0;
