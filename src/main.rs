use std::sync::Arc;

use lambda_http::{run, service_fn, Body, Error, Request, Response};

mod bridge_config;
mod check_requests;
mod discord_interactions;
mod discord_verification;
mod github_client;
mod incoming_request;
mod interaction_requests;
mod request_router;
mod responses;
mod runtime_context;
mod workflow_dispatch;

use incoming_request::IncomingRequest;
use request_router::RequestRouter;
use runtime_context::RuntimeContext;

// https://github.com/awslabs/aws-lambda-rust-runtime/tree/main/examples
async fn function_handler(event: Request, router: &Arc<RequestRouter>) -> Result<Response<Body>, Error> {
    let request = IncomingRequest::from(event);
    tracing::info!("{} {}", request.method, request.path);
    router.route(request).await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();
    let runtime_context = RuntimeContext::new();
    let router = RequestRouter::new(&runtime_context);
    let func = |event| async {
        function_handler(event, &router).await
    };
    run(service_fn(func)).await
}
