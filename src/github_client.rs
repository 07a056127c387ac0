
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{self, Client};
use tracing::{info, warn};

use crate::bridge_config::BridgeConfig;
use crate::workflow_dispatch::{DispatchInputs, DispatchRequest, DispatchResult, WorkflowDispatcher};

const USER_AGENT: &str = "EarningWhisperBot (+https://github.com/awakzdev/earning-whisper-to-discord)";
const API_VERSION: &str = "2022-11-28";
const FAILURE_EXCERPT_CHARS: usize = 300;

pub struct GitHubClient {
    client: Client,
    config: BridgeConfig,
}

impl GitHubClient {
    pub fn new(config: BridgeConfig) -> Arc<Self> {
        let client = reqwest::Client::new();
        let this = Self {
            client,
            config,
        };
        Arc::new(this)
    }

    // https://docs.github.com/en/rest/actions/workflows#create-a-workflow-dispatch-event
    async fn create_dispatch(&self, reason: &str, inputs: &DispatchInputs) -> Result<DispatchResult> {
        let request_body = DispatchRequest {
            git_ref: &self.config.git_ref,
            inputs,
        };
        let response = self.client.post(self.config.dispatch_url())
            .header("Authorization", ["Bearer", &self.config.token].join(" "))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT)
            .json(&request_body)
            .send()
            .await?;
        let status = response.status();
        info!("workflow dispatch response status {}", status.as_u16());
        if !status.is_success() {
            // a body that cannot be read must not hide the status
            let text = response.text().await.unwrap_or_default();
            return Ok(DispatchResult::rejected(status.as_u16(), excerpt(&text)));
        }
        Ok(DispatchResult::triggered(reason))
    }
}

#[async_trait]
impl WorkflowDispatcher for GitHubClient {
    async fn dispatch(&self, reason: &str, inputs: DispatchInputs) -> DispatchResult {
        info!("workflow dispatch in progress reason={} inputs={:?}", reason, inputs);
        match self.create_dispatch(reason, &inputs).await {
            Ok(result) => {
                if let Some(detail) = &result.detail {
                    warn!("workflow dispatch rejected {}", detail);
                }
                result
            },
            Err(error) => {
                warn!("workflow dispatch error {:?}", error);
                DispatchResult::failed(error)
            }
        }
    }
}

fn excerpt(text: &str) -> &str {
    match text.char_indices().nth(FAILURE_EXCERPT_CHARS) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
