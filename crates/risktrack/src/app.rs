use axum::{
    http::StatusCode,
    middleware::map_response,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::{
    config::Config,
    handlers::{
        error::{handle_panic, timeout_response},
        health::livez,
        risks::{create_risk, get_risk, list_risks},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Layers, outermost first: request/response tracing, panic recovery,
/// timeout error body, request timeout.
pub fn create_app(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/livez", get(livez))
        .route("/v1/risk", post(create_risk))
        .route("/v1/risk/", get(list_risks))
        .route("/v1/risk/{id}", get(get_risk))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .layer(map_response(timeout_response))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Micros),
                ),
        )
        .with_state(state)
}
