//! Classic swap protocol endpoints

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use classic::{Allowance, ApprovalTransaction, ClassicQuote, SwapResponse};

use crate::dto::{AllowanceQuery, ApiErrorBody, ApproveQuery, QuoteQuery, SwapQuery};
use crate::routes::error_reply;
use crate::AppState;

type Reply<T> = Result<Json<T>, (StatusCode, Json<ApiErrorBody>)>;

/// Create classic swap routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", get(quote))
        .route("/swap", get(swap))
        .route("/allowance", get(allowance))
        .route("/approve", get(approve))
}

/// GET /quote - fetch a classic swap quote
pub async fn quote(State(state): State<AppState>, Query(q): Query<QuoteQuery>) -> Reply<ClassicQuote> {
    state
        .classic()
        .get_quote(q.chain_id, &q.src, &q.dst, &q.amount)
        .await
        .map(Json)
        .map_err(error_reply)
}

/// GET /swap - build a ready-to-sign swap transaction
pub async fn swap(State(state): State<AppState>, Query(q): Query<SwapQuery>) -> Reply<SwapResponse> {
    state
        .classic()
        .get_swap_transaction(q.chain_id, &q.src, &q.dst, &q.amount, &q.from, q.slippage)
        .await
        .map(Json)
        .map_err(error_reply)
}

/// GET /allowance - read the router allowance
pub async fn allowance(
    State(state): State<AppState>,
    Query(q): Query<AllowanceQuery>,
) -> Reply<Allowance> {
    state
        .classic()
        .get_allowance(q.chain_id, &q.token_address, &q.wallet_address)
        .await
        .map(Json)
        .map_err(error_reply)
}

/// GET /approve - build an approval transaction
pub async fn approve(
    State(state): State<AppState>,
    Query(q): Query<ApproveQuery>,
) -> Reply<ApprovalTransaction> {
    state
        .classic()
        .get_approval_transaction(q.chain_id, &q.token_address, q.amount.as_deref())
        .await
        .map(Json)
        .map_err(error_reply)
}
