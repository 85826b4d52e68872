//! Request header checks.
//!
//! Each route answers only when the client sent an exact header value and
//! otherwise returns an empty 400.

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::Response,
    routing::get,
    Router,
};

use crate::http::request::header_is;
use crate::http::response::{empty, html};

const TEST_USER_AGENT: &str = "my test UA";
const RSS_ACCEPT: &str =
    "application/rss+xml;q=0.9, application/atom+xml;q=0.9, text/*;q=0.8, */*;q=0.7";
const TEST_REFERRER: &str = "http://kde.org";
const PIZZA_BODY: &str = "\u{1F90C}";

pub fn routes() -> Router {
    Router::new()
        .route("/useragent/enforce", get(useragent_enforce))
        .route("/accept/rss", get(accept_rss))
        .route("/referrer/test", get(referrer_test))
        .route("/headers/pineapple", get(headers_pineapple))
        .route("/headers/pizza", get(headers_pizza))
}

fn hello_if(accepted: bool) -> Response {
    if accepted {
        html("Hello")
    } else {
        empty(StatusCode::BAD_REQUEST)
    }
}

fn has_pineapple(headers: &HeaderMap) -> bool {
    header_is(headers, "pineapple", "Ananas")
}

async fn useragent_enforce(headers: HeaderMap) -> Response {
    hello_if(header_is(&headers, header::USER_AGENT.as_str(), TEST_USER_AGENT))
}

async fn accept_rss(headers: HeaderMap) -> Response {
    hello_if(header_is(&headers, header::ACCEPT.as_str(), RSS_ACCEPT))
}

async fn referrer_test(headers: HeaderMap) -> Response {
    hello_if(header_is(&headers, header::REFERER.as_str(), TEST_REFERRER))
}

async fn headers_pineapple(headers: HeaderMap) -> Response {
    hello_if(has_pineapple(&headers))
}

async fn headers_pizza(headers: HeaderMap) -> Response {
    if has_pineapple(&headers) && header_is(&headers, "pizza", "yes") {
        html(PIZZA_BODY)
    } else {
        empty(StatusCode::BAD_REQUEST)
    }
}
