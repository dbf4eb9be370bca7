//! Error types for Prism

use thiserror::Error;

/// Top-level error for Prism operations
#[derive(Debug, Error)]
pub enum Error {
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("Quote error: {0}")]
    Quote(#[from] QuoteError),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    #[error("Status error: {0}")]
    Status(#[from] StatusError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Malformed amount strings at the codec boundary. Never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid amount format: {input:?}")]
    InvalidFormat { input: String },
}

/// Quote-fetch failures
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Network failure, upstream rejection, or unsupported parameters.
    /// Retried within the classic client for transient causes only.
    #[error("Unable to get swap quote: {message}")]
    Unavailable { message: String },

    /// Same-chain intent client received a cross-chain request. The caller
    /// must redirect to the cross-chain path instead of failing outright.
    #[error("Cross-chain swap from chain {src_chain_id} to {dst_chain_id} requires the cross-chain protocol")]
    CrossChainUnsupported {
        src_chain_id: u64,
        dst_chain_id: u64,
    },
}

/// Order creation, resolution and submission failures. Never auto-retried;
/// resubmitting risks duplicate order placement.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order submission failed: {message}")]
    SubmissionFailed { message: String },

    /// The caller holds a serialized order whose cache entries were already
    /// consumed (or never existed); its behavior cannot be regained.
    #[error("Order for quote {quote_id} cannot be reconstructed")]
    NotReconstructable { quote_id: String },

    /// The resolved order fails structural validation; submitting it would
    /// only produce a confusing downstream rejection.
    #[error("Invalid order object: {reason}")]
    InvalidOrderObject { reason: String },
}

/// Wallet signing failures
#[derive(Debug, Error)]
pub enum SigningError {
    #[error("Signature request rejected: {reason}")]
    Rejected { reason: String },
}

/// Order-status read failures. Read-only and idempotent; safe for the
/// caller to retry.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Order status unavailable: {message}")]
    Unavailable { message: String },
}

/// Result type alias for Prism operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Amount(AmountError::InvalidFormat { .. }) => "invalid_amount_format",
            Self::Quote(QuoteError::Unavailable { .. }) => "quote_unavailable",
            Self::Quote(QuoteError::CrossChainUnsupported { .. }) => "cross_chain_unsupported",
            Self::Order(OrderError::SubmissionFailed { .. }) => "order_submission_failed",
            Self::Order(OrderError::NotReconstructable { .. }) => "order_not_reconstructable",
            Self::Order(OrderError::InvalidOrderObject { .. }) => "invalid_order_object",
            Self::Signing(SigningError::Rejected { .. }) => "signing_rejected",
            Self::Status(StatusError::Unavailable { .. }) => "status_unavailable",
            Self::Config(_) => "config_error",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Amount(_) => 400,
            Self::Quote(QuoteError::Unavailable { .. }) => 502,
            Self::Quote(QuoteError::CrossChainUnsupported { .. }) => 422,
            Self::Order(OrderError::SubmissionFailed { .. }) => 502,
            Self::Order(OrderError::NotReconstructable { .. }) => 410,
            Self::Order(OrderError::InvalidOrderObject { .. }) => 422,
            Self::Signing(_) => 400,
            Self::Status(_) => 502,
            Self::Config(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = Error::from(AmountError::InvalidFormat {
            input: "1.2.3".into(),
        });
        assert_eq!(err.error_code(), "invalid_amount_format");
        assert_eq!(err.status_code(), 400);

        let err = Error::from(QuoteError::CrossChainUnsupported {
            src_chain_id: 1,
            dst_chain_id: 137,
        });
        assert_eq!(err.error_code(), "cross_chain_unsupported");
        assert_eq!(err.status_code(), 422);

        let err = Error::from(OrderError::NotReconstructable {
            quote_id: "q-1".into(),
        });
        assert_eq!(err.error_code(), "order_not_reconstructable");
        assert_eq!(err.status_code(), 410);
    }

    #[test]
    fn test_quote_unavailable_message_prefix() {
        let err = QuoteError::Unavailable {
            message: "upstream returned 400".into(),
        };
        assert!(err.to_string().starts_with("Unable to get swap quote"));
    }
}
