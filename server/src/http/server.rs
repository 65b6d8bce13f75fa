use anyhow::Result;
use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use super::{handlers, state::AppState};
use crate::storage::CustomerStore;

/// Builds the application router. Shared with the tests so they exercise
/// the exact routes the binary serves.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Customer operations
        .route(
            "/customers",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route("/customers/unique/cities", get(handlers::city_counts))
        .route("/customers/{id}", get(handlers::get_customer))
        .with_state(state)
}

pub async fn start_server(storage: Arc<dyn CustomerStore>, bind_address: SocketAddr) -> Result<()> {
    let state = Arc::new(AppState::new(storage));

    let app = router(state)
        // Add middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    info!("Server listening on {}", bind_address);

    // Run the server
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
