
use lambda_http::{Body, Error, Response};
use serde::Serialize;

pub fn text_response(status: u16, text: impl Into<String>) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "text/plain")
        .body(Body::Text(text.into()))
        .map_err(Box::new)?;
    Ok(response)
}

pub fn json_response<T: Serialize>(content: &T) -> Result<Response<Body>, Error> {
    let json = serde_json::to_string(content)?;
    let response = Response::builder()
        .status(200)
        .header("content-type", "application/json")
        .body(Body::Text(json))
        .map_err(Box::new)?;
    Ok(response)
}

#[cfg(test)]
pub(crate) fn body_text(response: &Response<Body>) -> &str {
    match response.body() {
        Body::Text(text) => text,
        _ => "",
    }
}
