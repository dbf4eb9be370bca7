//! Route comparison endpoint

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use routing::{compare_routes, fetch_all_quotes, CompareRequest};

use crate::dto::RoutesResponse;
use crate::AppState;

/// Create route comparison routes
pub fn router() -> Router<AppState> {
    Router::new().route("/routes", post(routes))
}

/// POST /routes - fetch quotes from every applicable protocol concurrently
/// and return the ranked routes.
///
/// Individual quote failures are absorbed; an empty list means every source
/// failed and the caller surfaces a single no-routes condition.
pub async fn routes(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Json<RoutesResponse> {
    let quotes = fetch_all_quotes(
        state.classic(),
        state.fusion(),
        state.cross_chain(),
        &request,
    )
    .await;

    let routes = compare_routes(&quotes);
    if routes.is_empty() {
        tracing::warn!(
            chain_id = request.chain_id,
            src = %request.src,
            dst = %request.dst,
            "No routes available: all quote fetches failed"
        );
    }

    Json(RoutesResponse { routes })
}
