//! prism-api: HTTP API layer for Prism
//!
//! One endpoint per protocol operation, mirroring the upstream method
//! signatures, plus the thin pass-throughs (tokens, portfolio, prices,
//! limit orders). Raw transport errors never leave this boundary: every
//! failure is mapped to a `{code, message}` body with the taxonomy's
//! status code.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::AppState;
