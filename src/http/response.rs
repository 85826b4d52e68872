//! Response construction helpers.
//!
//! Fixture clients compare headers byte for byte, so every textual response
//! names its content type explicitly instead of relying on axum's
//! `text/plain` default for strings.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// Content type of every response that does not ask for another one.
pub const TEXT_HTML: &str = "text/html; charset=utf-8";
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const TEXT_CALENDAR: &str = "text/calendar; charset=utf-8";

/// 200 with the default HTML content type.
pub fn html(body: impl Into<Body>) -> Response {
    typed(StatusCode::OK, TEXT_HTML, body)
}

/// Response with an explicit status and content type.
pub fn typed(status: StatusCode, content_type: &'static str, body: impl Into<Body>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(content_type))],
        body.into(),
    )
        .into_response()
}

/// Status-only response: empty body, default content type.
pub fn empty(status: StatusCode) -> Response {
    typed(status, TEXT_HTML, Body::empty())
}

/// Redirect to a path-only `location` with a small HTML page pointing at it.
pub fn redirect(status: StatusCode, location: &'static str) -> Response {
    let page = format!(
        "<!doctype html>\n\
         <html lang=en>\n\
         <title>Redirecting...</title>\n\
         <h1>Redirecting...</h1>\n\
         <p>You should be redirected automatically to the target URL: \
         <a href=\"{location}\">{location}</a>. If not, click the link.\n"
    );

    (
        status,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(TEXT_HTML)),
            (header::LOCATION, HeaderValue::from_static(location)),
        ],
        page,
    )
        .into_response()
}
