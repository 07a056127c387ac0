
use std::sync::Arc;

use crate::bridge_config::BridgeConfig;
use crate::github_client::GitHubClient;
use crate::workflow_dispatch::WorkflowDispatcher;

pub struct RuntimeContext {
    config: BridgeConfig,
    dispatcher: Arc<dyn WorkflowDispatcher>,
}

impl RuntimeContext {
    pub fn new() -> Arc<Self> {
        let config = BridgeConfig::from_env();
        tracing::info!("runtime configuration {:?}", config);
        let dispatcher = GitHubClient::new(config.clone());
        Self::with_dispatcher(config, dispatcher)
    }

    pub fn with_dispatcher(config: BridgeConfig, dispatcher: Arc<dyn WorkflowDispatcher>) -> Arc<Self> {
        let context = Self {
            config,
            dispatcher,
        };
        Arc::new(context)
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &Arc<dyn WorkflowDispatcher> {
        &self.dispatcher
    }
}
