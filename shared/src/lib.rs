pub mod appsync;
pub mod config;
pub mod error;
pub mod responses;
pub mod types;

use appsync::GraphqlApiDescriber;
use config::Config;
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub describer: Arc<dyn GraphqlApiDescriber>,
}

impl AppState {
    pub fn new(config: Config, describer: Arc<dyn GraphqlApiDescriber>) -> Arc<Self> {
        Arc::new(Self { config, describer })
    }
}
