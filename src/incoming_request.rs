
use std::collections::HashMap;

use lambda_http::http::{HeaderMap, Method};
use lambda_http::{Request, RequestExt};

// Captured once from the lambda event. The body is copied out here and every
// later step borrows these bytes instead of touching the event again.
#[derive(Debug, Clone)]
pub struct IncomingRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub query: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl IncomingRequest {
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

impl From<Request> for IncomingRequest {
    fn from(event: Request) -> Self {
        let mut path = event.raw_http_path().to_string();
        if path.is_empty() {
            path = event.uri().path().to_string();
        }
        // the first value wins when a parameter is repeated
        let mut query = HashMap::new();
        for (key, value) in event.query_string_parameters().iter() {
            query.entry(key.to_string()).or_insert_with(|| value.to_string());
        }
        let (parts, body) = event.into_parts();
        Self {
            method: parts.method,
            path,
            headers: parts.headers,
            query,
            body: body.as_ref().to_vec(),
        }
    }
}
