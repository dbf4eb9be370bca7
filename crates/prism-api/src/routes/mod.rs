//! API route handlers

pub mod classic;
pub mod compare;
pub mod fusion;
pub mod fusion_plus;
pub mod health;
pub mod passthrough;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::dto::ApiErrorBody;
use crate::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/tokens", get(passthrough::tokens))
        .route("/portfolio", get(passthrough::portfolio))
        .route("/prices", get(passthrough::prices))
        .nest("/limit-order", passthrough::limit_order_router())
        .nest("/fusion", fusion::router())
        .nest("/fusion-plus", fusion_plus::router())
        .merge(classic::router())
        .merge(compare::router())
        .with_state(state)
}

/// Error reply for every taxonomy error: `{code, message}` with the
/// taxonomy's status code. Raw transport errors never reach callers.
pub(crate) fn error_reply(err: impl Into<prism_core::Error>) -> (StatusCode, Json<ApiErrorBody>) {
    let err = err.into();
    (
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(ApiErrorBody::new(err.error_code(), err.to_string())),
    )
}

/// Error reply for the pass-through endpoints: preserve the upstream status
/// where there is one, 502 for transport-level failures.
pub(crate) fn upstream_reply(err: aggregator_client::ApiError) -> (StatusCode, Json<ApiErrorBody>) {
    let status = match &err {
        aggregator_client::ApiError::Status { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        _ => StatusCode::BAD_GATEWAY,
    };
    (status, Json(ApiErrorBody::new("upstream_error", err.to_string())))
}
