
use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;

// workflow_dispatch only accepts string-typed inputs, so values can only get in
// here already stringified.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct DispatchInputs(BTreeMap<String, String>);

impl DispatchInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(mut self, name: &str, enabled: bool) -> Self {
        self.0.insert(name.into(), enabled.to_string());
        self
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

#[derive(Serialize, Debug)]
pub struct DispatchRequest<'a> {
    #[serde(rename = "ref")]
    pub git_ref: &'a str,
    pub inputs: &'a DispatchInputs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub success: bool,
    pub message: String,
    /// Truncated response body when the API answered with a non-success status.
    pub detail: Option<String>,
}

impl DispatchResult {
    pub fn triggered(reason: &str) -> Self {
        let reason = if reason.is_empty() { "manual" } else { reason };
        Self {
            success: true,
            message: format!("Nothing will be posted if there's no new image to fetch.\nTriggered ✅ ({})", reason),
            detail: None,
        }
    }

    pub fn rejected(status: u16, excerpt: &str) -> Self {
        Self {
            success: false,
            message: format!("Trigger failed: {} {}", status, excerpt),
            detail: Some(excerpt.to_string()),
        }
    }

    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: format!("Trigger failed: {}", error),
            detail: None,
        }
    }
}

#[async_trait]
pub trait WorkflowDispatcher: Send + Sync {
    // One attempt per call. Failures come back as a failed result, never as an error.
    async fn dispatch(&self, reason: &str, inputs: DispatchInputs) -> DispatchResult;
}
