
use std::sync::Arc;

use lambda_http::{Body, Error, Response};
use tracing::info;

use crate::discord_interactions::{EphemeralMessageResponse, InteractionPayload, PongResponse, SlashCommand};
use crate::discord_verification::verify_discord_request;
use crate::incoming_request::IncomingRequest;
use crate::responses::{json_response, text_response};
use crate::runtime_context::RuntimeContext;

// POST /interactions
pub struct InteractionRequestHandler {
    runtime_context: Arc<RuntimeContext>,
}

impl InteractionRequestHandler {
    pub fn new(runtime_context: &Arc<RuntimeContext>) -> Arc<Self> {
        let runtime_context = Arc::clone(runtime_context);
        let handler = Self {
            runtime_context,
        };
        Arc::new(handler)
    }

    pub async fn handle_interaction_request(&self, request: &IncomingRequest) -> Result<Response<Body>, Error> {
        let public_key = &self.runtime_context.config().discord_public_key;
        let verification = verify_discord_request(request, public_key);
        if !verification.authentic {
            info!("/interactions verification failed");
            return text_response(401, "bad signature");
        }
        let payload = match InteractionPayload::parse(verification.body) {
            Ok(payload) => payload,
            Err(error) => {
                info!("/interactions invalid json {:?}", error);
                return text_response(400, "invalid json");
            }
        };
        match payload {
            InteractionPayload::Ping => json_response(&PongResponse::new()),
            InteractionPayload::ApplicationCommand { name } => self.application_command(&name).await,
            InteractionPayload::Unsupported(interaction_type) => {
                info!("/interactions unsupported type {}", interaction_type);
                text_response(400, "unsupported")
            }
        }
    }

    async fn application_command(&self, name: &str) -> Result<Response<Body>, Error> {
        info!("/interactions command {:?}", name);
        let inputs = SlashCommand::from_name(name).inputs();
        let result = self.runtime_context.dispatcher().dispatch(name, inputs).await;
        info!("/interactions dispatch success={}", result.success);
        json_response(&EphemeralMessageResponse::new(&result.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge_config::BridgeConfig;
    use crate::discord_verification::tests::{public_key_hex, request_with, signed_request};
    use crate::responses::body_text;
    use crate::workflow_dispatch::tests::RecordingDispatcher;

    fn handler() -> (Arc<InteractionRequestHandler>, Arc<RecordingDispatcher>) {
        let dispatcher = Arc::new(RecordingDispatcher::default());
        let config = BridgeConfig {
            discord_public_key: public_key_hex(),
            ..BridgeConfig::default()
        };
        let context = RuntimeContext::with_dispatcher(config, dispatcher.clone());
        (InteractionRequestHandler::new(&context), dispatcher)
    }

    #[tokio::test]
    async fn ping_is_acknowledged_without_dispatch() {
        let (handler, dispatcher) = handler();
        let request = signed_request("1700000000", br#"{"type":1}"#);
        let response = handler.handle_interaction_request(&request).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(body_text(&response), r#"{"type":1}"#);
        assert!(dispatcher.calls().is_empty());
    }

    #[tokio::test]
    async fn repeated_pings_are_identical() {
        let (handler, _) = handler();
        let request = signed_request("1700000000", br#"{"type":1}"#);
        let first = handler.handle_interaction_request(&request).await.unwrap();
        for _ in 0..5 {
            let again = handler.handle_interaction_request(&request).await.unwrap();
            assert_eq!(again.status(), first.status());
            assert_eq!(body_text(&again), body_text(&first));
        }
    }

    #[tokio::test]
    async fn trigger_command_dispatches_forcing_inputs() {
        let (handler, dispatcher) = handler();
        let request = signed_request("1700000000", br#"{"type":2,"data":{"name":"Trigger"}}"#);
        let response = handler.handle_interaction_request(&request).await.unwrap();
        assert_eq!(response.status(), 200);

        let calls = dispatcher.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "trigger");
        assert_eq!(calls[0].1.get("force"), Some("true"));
        assert_eq!(calls[0].1.get("photo"), Some("true"));

        let json: serde_json::Value = serde_json::from_str(body_text(&response)).unwrap();
        assert_eq!(json["type"], 4);
        assert_eq!(json["data"]["flags"], 64);
        assert!(json["data"]["content"].as_str().unwrap().contains("Triggered ✅ (trigger)"));
    }

    #[tokio::test]
    async fn check_command_dispatches_default_inputs() {
        let (handler, dispatcher) = handler();
        let request = signed_request("1700000000", br#"{"type":2,"data":{"name":"check"}}"#);
        handler.handle_interaction_request(&request).await.unwrap();

        let calls = dispatcher.calls();
        assert_eq!(calls[0].0, "check");
        assert_eq!(calls[0].1.get("force"), Some("false"));
        assert_eq!(calls[0].1.get("photo"), Some("true"));
    }

    #[tokio::test]
    async fn bad_signature_is_rejected_before_parsing() {
        let (handler, dispatcher) = handler();
        let signature = "00".repeat(64);
        let bodies: [&[u8]; 3] = [br#"{"type":1}"#, br#"{"type":2,"data":{"name":"trigger"}}"#, b"garbage"];
        for body in bodies {
            let request = request_with(&signature, "1700000000", body);
            let response = handler.handle_interaction_request(&request).await.unwrap();
            assert_eq!(response.status(), 401);
            assert_eq!(body_text(&response), "bad signature");
        }
        assert!(dispatcher.calls().is_empty());
    }

    #[tokio::test]
    async fn unsupported_type_is_bad_request() {
        let (handler, dispatcher) = handler();
        let request = signed_request("1700000000", br#"{"type":3}"#);
        let response = handler.handle_interaction_request(&request).await.unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(body_text(&response), "unsupported");
        assert!(dispatcher.calls().is_empty());
    }

    #[tokio::test]
    async fn authenticated_non_json_is_bad_request() {
        let (handler, dispatcher) = handler();
        let request = signed_request("1700000000", b"not json");
        let response = handler.handle_interaction_request(&request).await.unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(body_text(&response), "invalid json");
        assert!(dispatcher.calls().is_empty());
    }
}
