use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use tower_http::trace::TraceLayer;

use rentfeed_core::ServiceConfig;

mod health;
mod properties;


pub async fn setup_and_serve(config: ServiceConfig) -> std::io::Result<()> {
    let port = config.port;
    let app = api_router(config).layer(TraceLayer::new_for_http());

    let bind_address = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("rentfeed is up and running on port {port}");

    axum::serve(listener, app.into_make_service()).await
}

fn api_router(config: ServiceConfig) -> Router {
    Router::new()
        .route("/api/properties", post(properties::generate_properties))
        .with_state(Arc::new(config))
        .merge(health::router())
}
