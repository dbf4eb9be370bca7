//! Application state shared across API handlers
//!
//! One explicit struct constructed at process start owns the protocol
//! clients and their caches; handlers receive it by handle. No module-level
//! singletons, so cache lifetime and test isolation stay visible.

use std::sync::Arc;

use aggregator_client::ApiClient;
use classic::ClassicClient;
use fusion::{CrossChainService, FusionService};
use prism_core::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    api: Arc<ApiClient>,
    classic: ClassicClient,
    fusion: FusionService,
    cross_chain: CrossChainService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let api = Arc::new(ApiClient::new(&config.aggregator));
        Self {
            inner: Arc::new(AppStateInner {
                classic: ClassicClient::new(api.clone()),
                fusion: FusionService::new(api.clone()),
                cross_chain: CrossChainService::new(api.clone()),
                api,
                config,
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Raw upstream client, for the pass-through endpoints.
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    pub fn classic(&self) -> &ClassicClient {
        &self.inner.classic
    }

    pub fn fusion(&self) -> &FusionService {
        &self.inner.fusion
    }

    pub fn cross_chain(&self) -> &CrossChainService {
        &self.inner.cross_chain
    }
}
