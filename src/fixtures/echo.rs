//! Echo fixtures: reflect the request body back to the client.

use axum::{
    body::Bytes,
    http::{header, HeaderMap, StatusCode},
    response::Response,
    routing::{post, put},
    Router,
};

use crate::error::FixtureError;
use crate::http::request::header_str;
use crate::http::response::{empty, html};

/// The only content type `/put/bla` accepts, compared as the whole header.
const PUT_CONTENT_TYPE: &str = "text/html";

pub fn routes() -> Router {
    Router::new()
        .route("/put/bla", put(put_bla))
        .route("/post/bla", post(post_bla))
}

async fn put_bla(headers: HeaderMap, body: Bytes) -> Response {
    if header_str(&headers, header::CONTENT_TYPE.as_str()) != Some(PUT_CONTENT_TYPE) {
        tracing::debug!(
            content_type = ?headers.get(header::CONTENT_TYPE),
            "Rejecting PUT with unexpected content type"
        );
        return empty(StatusCode::BAD_REQUEST);
    }

    html(body)
}

async fn post_bla(headers: HeaderMap, body: Bytes) -> Result<Response, FixtureError> {
    let content_type =
        header_str(&headers, header::CONTENT_TYPE.as_str()).ok_or(FixtureError::MissingContentType)?;
    let text = String::from_utf8(body.to_vec())?;

    Ok(html(format!("Got data of type {content_type}: {text}")))
}
