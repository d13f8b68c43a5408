use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

/// A geocoded place as clients send it. Existing consumers are split
/// between `lon` and `lng` for the longitude key, so both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    #[serde(alias = "lng")]
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Location {
    /// Convert to validated coordinates, rejecting out-of-range values.
    pub fn coordinates(&self) -> Result<Coordinates, String> {
        Coordinates::new(self.lat, self.lon)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRoute {
    pub start_location: Location,
    pub end_location: Location,
    /// Road distance reported by the client's directions provider, in km.
    /// Informational only; validation recomputes great-circle distances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRouteRequest {
    pub pickup: Location,
    pub drop: Location,
    pub owner_route: OwnerRoute,
}

/// Polyline variant: the owner's route as an ordered sequence of points.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidatePathRequest {
    pub pickup: Location,
    pub drop: Location,
    pub route: Vec<Location>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}
