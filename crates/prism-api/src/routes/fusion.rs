//! Intent protocol endpoints

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use fusion::{CreatedOrder, FusionQuote, OrderParams, OrderStatus, QuoteParams, SubmittedOrder};
use prism_core::ChainId;
use serde::Deserialize;

use crate::dto::{ApiErrorBody, ChainInfo, StatusQuery, SubmitOrderRequest, SubmitSignedRequest};
use crate::routes::error_reply;
use crate::AppState;

type Reply<T> = Result<Json<T>, (StatusCode, Json<ApiErrorBody>)>;

fn default_chain_id() -> ChainId {
    1
}

/// Intent quote query parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionQuoteQuery {
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,
    #[serde(default)]
    pub dst_chain_id: Option<ChainId>,
    pub src: String,
    pub dst: String,
    pub amount: String,
    pub from: String,
}

impl FusionQuoteQuery {
    fn into_params(self) -> QuoteParams {
        QuoteParams {
            from_token_address: self.src,
            to_token_address: self.dst,
            amount: self.amount,
            wallet_address: self.from,
            src_chain_id: Some(self.chain_id),
            dst_chain_id: self.dst_chain_id,
        }
    }
}

/// Create intent protocol routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", get(quote))
        .route("/order", post(create_order))
        .route("/submit", post(submit))
        .route("/submit-signed", post(submit_signed))
        .route("/status", get(status))
        .route("/chains", get(chains))
}

/// GET /fusion/quote - fetch an intent quote.
///
/// A cross-chain parameter pair comes back as `cross_chain_unsupported`
/// (422) so the caller can redirect to the /fusion-plus path.
pub async fn quote(
    State(state): State<AppState>,
    Query(q): Query<FusionQuoteQuery>,
) -> Reply<FusionQuote> {
    state
        .fusion()
        .get_quote(&q.into_params())
        .await
        .map(Json)
        .map_err(error_reply)
}

/// POST /fusion/order - create an unsigned intent order
pub async fn create_order(
    State(state): State<AppState>,
    Json(params): Json<OrderParams>,
) -> Reply<CreatedOrder> {
    state
        .fusion()
        .create_order(&params)
        .await
        .map(Json)
        .map_err(error_reply)
}

/// POST /fusion/submit - submit a live intent order
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitOrderRequest>,
) -> Reply<SubmittedOrder> {
    state
        .fusion()
        .submit_order(&request.order, &request.quote_id, request.chain_id)
        .await
        .map(Json)
        .map_err(error_reply)
}

/// POST /fusion/submit-signed - submit a signed intent order
pub async fn submit_signed(
    State(state): State<AppState>,
    Json(request): Json<SubmitSignedRequest>,
) -> Reply<SubmittedOrder> {
    state
        .fusion()
        .submit_signed_order(
            &request.order,
            &request.signature,
            &request.quote_id,
            request.chain_id,
        )
        .await
        .map(Json)
        .map_err(error_reply)
}

/// GET /fusion/status - read order status
pub async fn status(
    State(state): State<AppState>,
    Query(q): Query<StatusQuery>,
) -> Reply<OrderStatus> {
    state
        .fusion()
        .get_order_status(&q.order_hash, q.chain_id)
        .await
        .map(Json)
        .map_err(error_reply)
}

/// GET /fusion/chains - list chains the intent protocol settles on
pub async fn chains() -> Json<Vec<ChainInfo>> {
    Json(fusion::SUPPORTED_CHAINS.iter().map(ChainInfo::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_query_maps_to_params() {
        let query = FusionQuoteQuery {
            chain_id: 137,
            dst_chain_id: None,
            src: "0xaa".to_string(),
            dst: "0xbb".to_string(),
            amount: "1000".to_string(),
            from: "0xcc".to_string(),
        };
        let params = query.into_params();
        assert_eq!(params.src_chain_id, Some(137));
        assert_eq!(params.from_token_address, "0xaa");
        assert_eq!(params.wallet_address, "0xcc");
    }

    #[tokio::test]
    async fn chains_listing_covers_supported_networks() {
        let Json(list) = chains().await;
        assert_eq!(list.len(), fusion::SUPPORTED_CHAINS.len());
        assert!(list.iter().any(|c| c.chain_id == 1 && c.name == "Ethereum"));
    }
}
