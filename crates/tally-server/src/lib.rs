//! HTTP surface for the tally asset and task APIs.
//!
//! [`app`] builds the Axum router over an [`AppState`]; the binary in
//! `main.rs` wires in configuration, seed data, and logging.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::Router;
use tally_core::{Asset, MemoryStore, Store, StoreError, Task};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared server state accessible from all handlers.
pub struct AppState {
    pub assets: Arc<dyn Store<Asset>>,
    pub tasks: Arc<dyn Store<Task>>,
}

impl AppState {
    pub fn new(assets: Arc<dyn Store<Asset>>, tasks: Arc<dyn Store<Task>>) -> Self {
        Self { assets, tasks }
    }

    /// Builds in-memory stores pre-filled with the given records.
    pub fn in_memory(assets: Vec<Asset>, tasks: Vec<Task>) -> Result<Self, StoreError> {
        Ok(Self::new(
            Arc::new(MemoryStore::seeded(assets)?),
            Arc::new(MemoryStore::seeded(tasks)?),
        ))
    }
}

/// Builds the application router.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

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

    let api = Router::new()
        .route(
            "/assets",
            get(handlers::assets::list).post(handlers::assets::create),
        )
        .route("/assets/slug/{slug}", get(handlers::assets::get_by_slug))
        .route(
            "/assets/{id}",
            get(handlers::assets::get)
                .patch(handlers::assets::update)
                .delete(handlers::assets::delete),
        )
        .route(
            "/tasks",
            get(handlers::tasks::list).post(handlers::tasks::create),
        )
        .route(
            "/tasks/{id}",
            get(handlers::tasks::get)
                .patch(handlers::tasks::update)
                .delete(handlers::tasks::delete),
        )
        .layer(trace_layer);

    Router::new()
        .nest("/api", api)
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
