//! order-signing: EIP-712 bridge between intent orders and the wallet
//!
//! Turns a protocol order object into a wallet-signable structured payload:
//! extracts the canonical eight order fields from whichever shape the order
//! arrives in, builds the typed-data payload bound to the settlement
//! contract, computes the order digest, and requests a signature through the
//! [`TypedDataSigner`] seam — the only wallet-provider surface the core
//! depends on.

pub mod extract;
pub mod signer;
pub mod typed_data;

pub use extract::{extract_order_fields, FlatOrderFields};
pub use signer::{request_signature, TypedDataSigner};
pub use typed_data::{order_hash, order_typed_data, TypedData, SETTLEMENT_CONTRACT};
