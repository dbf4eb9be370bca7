//! Classic instant-swap protocol client
//!
//! Requests quotes, ready-to-sign swap transactions, allowance reads and
//! approval transactions from the aggregation API's swap endpoints.
//! Stateless: every method is a request/response mapping over the shared
//! [`aggregator_client::ApiClient`].

pub mod client;
pub mod types;

pub use client::ClassicClient;
pub use types::{Allowance, ApprovalTransaction, ClassicQuote, SwapResponse, SwapTransaction};
