//! Thin pass-through endpoints
//!
//! Token registry, portfolio balances, spot prices and the limit-order
//! dashboard forward to the upstream API and return its JSON unmodified.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::dto::{
    ApiErrorBody, LimitOrderCreateRequest, LimitOrdersQuery, PortfolioQuery, PricesQuery,
    TokensQuery,
};
use crate::routes::upstream_reply;
use crate::AppState;

type Reply = Result<Json<Value>, (StatusCode, Json<ApiErrorBody>)>;

/// Create limit-order routes
pub fn limit_order_router() -> Router<AppState> {
    Router::new()
        .route("/create", post(limit_order_create))
        .route("/orders", get(limit_orders))
}

/// GET /tokens - upstream token registry for a chain
pub async fn tokens(State(state): State<AppState>, Query(q): Query<TokensQuery>) -> Reply {
    let path = format!("/swap/v6.0/{}/tokens", q.chain_id);
    state
        .api()
        .get_json(&path, &[])
        .await
        .map(Json)
        .map_err(upstream_reply)
}

/// GET /portfolio - ERC-20 balance overview for wallet addresses
pub async fn portfolio(State(state): State<AppState>, Query(q): Query<PortfolioQuery>) -> Reply {
    let query = vec![
        ("addresses".to_string(), q.addresses),
        ("chain_id".to_string(), q.chain_id.to_string()),
    ];
    state
        .api()
        .get_json("/portfolio/portfolio/v4/overview/erc20", &query)
        .await
        .map(Json)
        .map_err(upstream_reply)
}

/// GET /prices - spot prices for token addresses
pub async fn prices(State(state): State<AppState>, Query(q): Query<PricesQuery>) -> Reply {
    let path = format!("/price/v1.1/{}", q.chain_id);
    let query = vec![
        ("addresses".to_string(), q.addresses),
        ("currency".to_string(), q.currency),
    ];
    state
        .api()
        .get_json(&path, &query)
        .await
        .map(Json)
        .map_err(upstream_reply)
}

/// POST /limit-order/create - forward a limit order to the orderbook
pub async fn limit_order_create(
    State(state): State<AppState>,
    Json(request): Json<LimitOrderCreateRequest>,
) -> Reply {
    let path = format!("/orderbook/v4.0/{}/order", request.chain_id);
    state
        .api()
        .post_json(&path, &request.order)
        .await
        .map(Json)
        .map_err(upstream_reply)
}

/// GET /limit-order/orders - list limit orders with filters
pub async fn limit_orders(
    State(state): State<AppState>,
    Query(q): Query<LimitOrdersQuery>,
) -> Reply {
    let path = format!("/orderbook/v4.0/{}/order/all", q.chain_id);

    let mut query = vec![
        ("page".to_string(), q.page.to_string()),
        ("limit".to_string(), q.limit.to_string()),
    ];
    for (key, value) in [
        ("statuses", q.statuses),
        ("makerAsset", q.maker_asset),
        ("takerAsset", q.taker_asset),
        ("maker", q.maker),
        ("taker", q.taker),
    ] {
        if let Some(value) = value {
            query.push((key.to_string(), value));
        }
    }

    state
        .api()
        .get_json(&path, &query)
        .await
        .map(Json)
        .map_err(upstream_reply)
}
