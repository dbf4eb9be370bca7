//! prism-core: shared types, error taxonomy and amount codec
//!
//! Everything that crosses a protocol boundary lives here: token metadata,
//! chain identifiers, the error taxonomy the HTTP layer maps to status codes,
//! and the decimal <-> base-unit amount codec.

pub mod amount;
pub mod config;
pub mod errors;
pub mod types;

pub use amount::{from_base_units, to_base_units};
pub use config::{AggregatorConfig, AppConfig};
pub use errors::{
    AmountError, Error, OrderError, QuoteError, Result, SigningError, StatusError,
};
pub use types::{is_native_asset, ChainId, Token, DEFAULT_CHAIN_ID, NATIVE_ASSET_ADDRESS};
