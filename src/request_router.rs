
use std::sync::Arc;

use lambda_http::{Body, Error, Response, http::Method};

use crate::check_requests::CheckRequestHandler;
use crate::incoming_request::IncomingRequest;
use crate::interaction_requests::InteractionRequestHandler;
use crate::responses::text_response;
use crate::runtime_context::RuntimeContext;

pub struct RequestRouter {
    check_handler: Arc<CheckRequestHandler>,
    interaction_handler: Arc<InteractionRequestHandler>,
}

impl RequestRouter {
    pub fn new(runtime_context: &Arc<RuntimeContext>) -> Arc<Self> {
        let router = Self {
            check_handler: CheckRequestHandler::new(runtime_context),
            interaction_handler: InteractionRequestHandler::new(runtime_context),
        };
        Arc::new(router)
    }

    // Never hands an Err back to the runtime, which would surface as an opaque 502.
    pub async fn route(&self, request: IncomingRequest) -> Result<Response<Body>, Error> {
        let result = match (&request.method, request.path.as_str()) {
            (&Method::GET, "/check") => {
                self.check_handler.handle_check_request(&request).await
            },
            (&Method::POST, "/interactions") => {
                self.interaction_handler.handle_interaction_request(&request).await
            },
            _ => {
                // health checks and probes against the base path
                text_response(200, "ok")
            }
        };
        match result {
            Ok(response) => Ok(response),
            Err(error) => {
                tracing::warn!("{} {} error {:?}", request.method, request.path, error);
                text_response(500, "internal server error")
            }
        }
    }
}
