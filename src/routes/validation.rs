use crate::error::{AppError, Result};
use crate::models::{Coordinates, ValidatePathRequest, ValidateRouteRequest, ValidationResult};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /validate-route
/// Decide whether a passenger's pickup/drop pair is compatible with the
/// owner's two-point route. Always responds 200 with the verdict for
/// well-formed input; malformed coordinates are a 400.
pub async fn validate_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ValidateRouteRequest>,
) -> Result<Json<ValidationResult>> {
    let pickup = coordinates_of(&request.pickup, "pickup")?;
    let drop = coordinates_of(&request.drop, "drop")?;
    let route_start = coordinates_of(&request.owner_route.start_location, "ownerRoute.startLocation")?;
    let route_end = coordinates_of(&request.owner_route.end_location, "ownerRoute.endLocation")?;

    tracing::info!(
        "Validate route request: pickup ({:.4}, {:.4}), drop ({:.4}, {:.4}), route ({:.4}, {:.4}) -> ({:.4}, {:.4})",
        pickup.lat, pickup.lng,
        drop.lat, drop.lng,
        route_start.lat, route_start.lng,
        route_end.lat, route_end.lng
    );

    let result = state
        .validator
        .validate(&pickup, &drop, &route_start, &route_end);

    tracing::info!(is_valid = result.is_valid, "Validation verdict");

    Ok(Json(result))
}

/// POST /validate-route/path
/// Polyline variant: the owner's route arrives as an ordered sequence of
/// points and the passenger must be near some segment of it.
pub async fn validate_route_path(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ValidatePathRequest>,
) -> Result<Json<ValidationResult>> {
    let pickup = coordinates_of(&request.pickup, "pickup")?;
    let drop = coordinates_of(&request.drop, "drop")?;

    if request.route.len() < 2 {
        return Err(AppError::InvalidRequest(
            "route must contain at least 2 points".to_string(),
        ));
    }

    let path = request
        .route
        .iter()
        .map(|location| coordinates_of(location, "route"))
        .collect::<Result<Vec<Coordinates>>>()?;

    tracing::info!(
        points = path.len(),
        "Validate path request: pickup ({:.4}, {:.4}), drop ({:.4}, {:.4})",
        pickup.lat,
        pickup.lng,
        drop.lat,
        drop.lng
    );

    let result = state.validator.validate_against_path(&pickup, &drop, &path);

    tracing::info!(is_valid = result.is_valid, "Validation verdict");

    Ok(Json(result))
}

fn coordinates_of(location: &crate::models::Location, field: &str) -> Result<Coordinates> {
    location
        .coordinates()
        .map_err(|e| AppError::InvalidRequest(format!("{}: {}", field, e)))
}
