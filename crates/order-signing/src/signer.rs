//! Wallet signing seam
//!
//! The core needs exactly one thing from a wallet provider: a
//! structured-data signing primitive. Anything that can sign an EIP-712
//! payload (a browser wallet relaying through the facade, a key in tests)
//! implements [`TypedDataSigner`].

use prism_core::{ChainId, SigningError};

use crate::extract::FlatOrderFields;
use crate::typed_data::{order_typed_data, TypedData};

/// A structured-data signer
pub trait TypedDataSigner {
    /// Sign the payload, returning the 65-byte signature hex-encoded with a
    /// 0x prefix.
    fn sign_typed_data(
        &self,
        typed_data: &TypedData,
    ) -> impl std::future::Future<Output = Result<String, SigningError>> + Send;
}

/// Build the typed-data payload for an order and request a signature.
pub async fn request_signature<S: TypedDataSigner>(
    fields: &FlatOrderFields,
    chain_id: ChainId,
    signer: &S,
) -> Result<String, SigningError> {
    let typed_data = order_typed_data(fields, chain_id);
    tracing::debug!(chain_id, maker = %fields.maker, "Requesting order signature");

    let signature = signer.sign_typed_data(&typed_data).await?;
    tracing::debug!("Order signed");
    Ok(signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSigner {
        signature: &'static str,
    }

    impl TypedDataSigner for StaticSigner {
        async fn sign_typed_data(&self, _typed_data: &TypedData) -> Result<String, SigningError> {
            Ok(self.signature.to_string())
        }
    }

    struct DecliningSigner;

    impl TypedDataSigner for DecliningSigner {
        async fn sign_typed_data(&self, _typed_data: &TypedData) -> Result<String, SigningError> {
            Err(SigningError::Rejected {
                reason: "user denied signature".to_string(),
            })
        }
    }

    fn fields() -> FlatOrderFields {
        FlatOrderFields {
            salt: "1".to_string(),
            maker: "0x70997970c51812dc3a010c7d01b50e0d17dc79c8".to_string(),
            receiver: "0x70997970c51812dc3a010c7d01b50e0d17dc79c8".to_string(),
            maker_asset: "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".to_string(),
            taker_asset: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string(),
            making_amount: "1".to_string(),
            taking_amount: "1".to_string(),
            maker_traits: "0".to_string(),
        }
    }

    #[tokio::test]
    async fn returns_the_wallet_signature() {
        let signer = StaticSigner { signature: "0xab" };
        let signature = request_signature(&fields(), 1, &signer).await.unwrap();
        assert_eq!(signature, "0xab");
    }

    #[tokio::test]
    async fn declined_signature_surfaces_as_rejected() {
        let result = request_signature(&fields(), 1, &DecliningSigner).await;
        match result {
            Err(SigningError::Rejected { reason }) => {
                assert!(reason.contains("denied"));
            }
            other => panic!("Expected Rejected, got {:?}", other),
        }
    }
}
