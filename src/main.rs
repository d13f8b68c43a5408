use axum::Router;
use ridematch::config::Config;
use ridematch::services::RouteValidator;
use ridematch::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ridematch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting RideMatch API server");
    tracing::info!(
        max_deviation_km = config.validation.max_deviation_km,
        direction_tolerance_deg = config.validation.direction_tolerance_deg,
        min_overlap_pct = config.validation.min_overlap_pct,
        "Validation configuration loaded"
    );

    // Create application state
    let state = Arc::new(AppState {
        validator: RouteValidator::new(config.validation),
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api", ridematch::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
