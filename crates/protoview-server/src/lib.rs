//! HTTP surface for protoview.
//!
//! [`build_router`] assembles the routes, the cross-origin policy, and request
//! logging from a [`ServerConfig`]. [`serve`] validates the config, binds, and
//! runs that router until shutdown; the binary in `main.rs` only parses
//! arguments and sets up logging.

pub mod cli;
pub mod error;
pub mod handlers;

use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use axum::body::Body;
use axum::http::{HeaderValue, Request, Response};
use axum::routing::get;
use axum::Router;
use protoview_config::{ConfigError, ServerConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Path of the model info document. Kept for existing viewer clients.
pub const MODEL_INFO_PATH: &str = "/python-model-info";
pub const MODEL_GEOMETRY_PATH: &str = "/model-geometry-info";
pub const HEALTH_PATH: &str = "/health";

/// Builds the application router for the given configuration.
pub fn build_router(config: &ServerConfig) -> Result<Router, ConfigError> {
    let cors = cors_layer(&config.allowed_origins)?;

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route(MODEL_INFO_PATH, get(handlers::model::info))
        .route(MODEL_GEOMETRY_PATH, get(handlers::model::geometry))
        .layer(trace_layer);

    Ok(Router::new()
        .merge(logged_routes)
        .route(HEALTH_PATH, get(handlers::health))
        .fallback(handlers::not_found)
        .layer(cors))
}

/// Validates `config`, binds its address, and serves until `shutdown` resolves.
pub async fn serve<F>(config: ServerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    config.validate().context("invalid configuration")?;

    let addr = config.bind_addr()?;
    let app = build_router(&config)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Starting server on {}", addr);
    info!("Allowed origins: {}", config.allowed_origins.join(", "));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

/// Credentialed CORS for a fixed origin list.
///
/// Wildcards cannot be combined with credentials, so methods and headers are
/// mirrored from the preflight request instead.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let origins = origins
        .iter()
        .map(|o| HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.clone())))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
