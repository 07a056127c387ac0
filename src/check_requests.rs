
use std::sync::Arc;

use lambda_http::{Body, Error, Response};
use tracing::info;

use crate::incoming_request::IncomingRequest;
use crate::responses::text_response;
use crate::runtime_context::RuntimeContext;
use crate::workflow_dispatch::DispatchInputs;

const CHECK_REASON: &str = "link";

// GET /check?key=SECRET[&force=1][&photo=0]
pub struct CheckRequestHandler {
    runtime_context: Arc<RuntimeContext>,
}

impl CheckRequestHandler {
    pub fn new(runtime_context: &Arc<RuntimeContext>) -> Arc<Self> {
        let runtime_context = Arc::clone(runtime_context);
        let handler = Self {
            runtime_context,
        };
        Arc::new(handler)
    }

    pub async fn handle_check_request(&self, request: &IncomingRequest) -> Result<Response<Body>, Error> {
        if !self.is_authorized(request) {
            info!("/check rejected");
            return text_response(403, "forbidden");
        }
        let inputs = DispatchInputs::new()
            .flag("force", request.query_param("force") == Some("1"))
            .flag("photo", request.query_param("photo") != Some("0"));
        let result = self.runtime_context.dispatcher().dispatch(CHECK_REASON, inputs).await;
        info!("/check dispatch success={}", result.success);
        text_response(200, result.message)
    }

    fn is_authorized(&self, request: &IncomingRequest) -> bool {
        match &self.runtime_context.config().secret_key {
            Some(secret) => request.query_param("key") == Some(secret.as_str()),
            None => false,
        }
    }
}
