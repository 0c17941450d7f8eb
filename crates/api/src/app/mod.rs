//! HTTP API application wiring (Axum router + middleware + service injection).
//!
//! Layout:
//! - `services.rs`: dependencies shared by every handler (the user repository)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request bodies, the response envelope, JSON encoding
//! - `errors.rs`: client-facing error mapping

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use userstore_infra::UserRepository;

use crate::config::ServerConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router around an already constructed repository.
pub fn build_app(users: Arc<dyn UserRepository>, config: &ServerConfig) -> Router {
    let services = Arc::new(services::AppServices::new(users));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(trace_layer)
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CatchPanicLayer::new())
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
}
