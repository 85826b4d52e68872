//! Content-Length presence checks.
//!
//! GET requests must not carry a `Content-Length`; POST requests must.

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::Response,
    routing::get,
    Router,
};

use crate::error::FixtureError;
use crate::http::request::header_str;
use crate::http::response::{html, typed, TEXT_HTML};

pub fn routes() -> Router {
    Router::new().route(
        "/content-length",
        get(content_length_get).post(content_length_post),
    )
}

async fn content_length_get(headers: HeaderMap) -> Response {
    if headers.contains_key(header::CONTENT_LENGTH) {
        typed(
            StatusCode::BAD_REQUEST,
            TEXT_HTML,
            "Unexpected Content-Length in GET request",
        )
    } else {
        html("No Content-Length header in GET request.")
    }
}

async fn content_length_post(headers: HeaderMap) -> Result<Response, FixtureError> {
    if !headers.contains_key(header::CONTENT_LENGTH) {
        return Ok(typed(
            StatusCode::BAD_REQUEST,
            TEXT_HTML,
            "Content-Length header not found in POST request.",
        ));
    }

    let raw = header_str(&headers, header::CONTENT_LENGTH.as_str()).unwrap_or_default();
    let length: u64 = raw
        .parse()
        .map_err(|_| FixtureError::InvalidContentLength(raw.to_string()))?;

    Ok(html(format!("Content-Length: {length} bytes in POST request")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::testing::{get_request, send};
    use axum::{body::Body, http::Request};

    #[tokio::test]
    async fn test_get_without_length() {
        let res = send(routes(), get_request("/content-length")).await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body, "No Content-Length header in GET request.");
    }

    #[tokio::test]
    async fn test_get_with_length_is_rejected() {
        let req = Request::builder()
            .uri("/content-length")
            .header(header::CONTENT_LENGTH, "0")
            .body(Body::empty())
            .unwrap();

        let res = send(routes(), req).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.body, "Unexpected Content-Length in GET request");
    }

    #[tokio::test]
    async fn test_post_reports_length() {
        let req = Request::builder()
            .method("POST")
            .uri("/content-length")
            .header(header::CONTENT_LENGTH, "5")
            .body(Body::from("hello"))
            .unwrap();

        let res = send(routes(), req).await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body, "Content-Length: 5 bytes in POST request");
    }

    #[tokio::test]
    async fn test_post_without_length_is_rejected() {
        let req = Request::builder()
            .method("POST")
            .uri("/content-length")
            .body(Body::empty())
            .unwrap();

        let res = send(routes(), req).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.body, "Content-Length header not found in POST request.");
    }

    #[tokio::test]
    async fn test_post_with_unparsable_length_fails() {
        let req = Request::builder()
            .method("POST")
            .uri("/content-length")
            .header(header::CONTENT_LENGTH, "abc")
            .body(Body::empty())
            .unwrap();

        let res = send(routes(), req).await;
        assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(res.body.is_empty());
    }
}
