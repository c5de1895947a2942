//! REST API endpoints.
//!
//! Axum-based HTTP API serving the aggregated league dashboard and a
//! health probe. Error bodies mirror what dashboard clients expect:
//! validation and internal errors are flat `{"error": "..."}` objects,
//! upstream failures carry a structured code.

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::api::state::AppState;

pub mod routes;
pub mod state;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("League ID is required")]
    MissingLeagueId,

    #[error("{0}")]
    Upstream(String),

    #[error("Internal server error")]
    Internal,
}

/// Flat error body for validation and internal errors.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub error: String,
}

/// Structured error body for upstream failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingLeagueId => {
                let body = ErrorMessage {
                    error: self.to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Upstream(message) => {
                let body = ErrorResponse {
                    error: ErrorDetail {
                        code: "UPSTREAM_FAIL".to_string(),
                        message,
                    },
                };
                (StatusCode::BAD_GATEWAY, Json(body)).into_response()
            }
            ApiError::Internal => {
                let body = ErrorMessage {
                    error: self.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Assemble the application router with CORS, tracing, and panic recovery.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.cors_origin);

    Router::new()
        .route("/api/health", get(routes::health::health))
        .route(
            "/api/league/:league_id/dashboard",
            get(routes::dashboard::get_dashboard),
        )
        // The id-less path returns the canonical validation error, not a 404
        .route(
            "/api/league/dashboard",
            get(routes::dashboard::missing_league_id),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .with_state(state)
}

/// CORS layer for browser dashboard clients.
fn cors_layer(origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origin == "*" {
        return cors.allow_origin(Any);
    }

    match origin.parse::<HeaderValue>() {
        Ok(value) => cors.allow_origin(value),
        Err(_) => {
            warn!("Invalid cors_origin {:?}, allowing any origin", origin);
            cors.allow_origin(Any)
        }
    }
}

/// Convert a handler panic into the generic 500 body.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    error!("Request handler panicked: {}", detail);

    ApiError::Internal.into_response()
}
