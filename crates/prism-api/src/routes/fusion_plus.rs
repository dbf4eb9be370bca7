//! Cross-chain intent protocol endpoints

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use fusion::{CreatedOrder, FusionQuote, OrderParams, QuoteParams, SubmittedOrder};
use prism_core::ChainId;
use serde::Deserialize;

use crate::dto::{ApiErrorBody, CrossSubmitSignedRequest};
use crate::routes::error_reply;
use crate::AppState;

type Reply<T> = Result<Json<T>, (StatusCode, Json<ApiErrorBody>)>;

/// Cross-chain quote query parameters. Both chains are required here,
/// unlike the same-chain path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossQuoteQuery {
    pub src_chain_id: ChainId,
    pub dst_chain_id: ChainId,
    pub src: String,
    pub dst: String,
    pub amount: String,
    pub from: String,
}

impl CrossQuoteQuery {
    fn into_params(self) -> QuoteParams {
        QuoteParams {
            from_token_address: self.src,
            to_token_address: self.dst,
            amount: self.amount,
            wallet_address: self.from,
            src_chain_id: Some(self.src_chain_id),
            dst_chain_id: Some(self.dst_chain_id),
        }
    }
}

/// Create cross-chain intent routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", get(quote))
        .route("/order", post(create_order))
        .route("/submit-signed", post(submit_signed))
}

/// GET /fusion-plus/quote - fetch a cross-chain intent quote
pub async fn quote(
    State(state): State<AppState>,
    Query(q): Query<CrossQuoteQuery>,
) -> Reply<FusionQuote> {
    state
        .cross_chain()
        .get_quote(&q.into_params())
        .await
        .map(Json)
        .map_err(error_reply)
}

/// POST /fusion-plus/order - create an unsigned cross-chain order
pub async fn create_order(
    State(state): State<AppState>,
    Json(params): Json<OrderParams>,
) -> Reply<CreatedOrder> {
    state
        .cross_chain()
        .create_order(&params)
        .await
        .map(Json)
        .map_err(error_reply)
}

/// POST /fusion-plus/submit-signed - submit a signed cross-chain order.
///
/// The transported order body is value-only; the submittable object is
/// resolved from the cache by quote id.
pub async fn submit_signed(
    State(state): State<AppState>,
    Json(request): Json<CrossSubmitSignedRequest>,
) -> Reply<SubmittedOrder> {
    state
        .cross_chain()
        .submit_signed_order(
            &request.signature,
            &request.quote_id,
            request.src_chain_id,
            request.dst_chain_id,
        )
        .await
        .map(Json)
        .map_err(error_reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_quote_query_requires_both_chains() {
        let json = serde_json::json!({
            "src": "0xaa", "dst": "0xbb", "amount": "1", "from": "0xcc",
            "srcChainId": 1
        });
        // Missing dstChainId fails deserialization before any handler runs
        assert!(serde_json::from_value::<CrossQuoteQuery>(json).is_err());
    }

    #[test]
    fn cross_quote_query_maps_to_params() {
        let query = CrossQuoteQuery {
            src_chain_id: 1,
            dst_chain_id: 137,
            src: "0xaa".to_string(),
            dst: "0xbb".to_string(),
            amount: "1000".to_string(),
            from: "0xcc".to_string(),
        };
        let params = query.into_params();
        assert_eq!(params.src_chain_id, Some(1));
        assert_eq!(params.dst_chain_id, Some(137));
    }
}
