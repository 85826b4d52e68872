//! Content-type fixtures: fixed bodies under fixed MIME types.

use axum::{http::StatusCode, response::Response, routing::get, Router};

use crate::http::response::{html, typed, TEXT_CALENDAR};

const HELLO_WORLD_HTML: &str = "<p>Hello, World!</p>";
const CALENDAR_LINES: &str = "Some data\nthat\nhas\nnew\nlines\n";

pub fn routes() -> Router {
    Router::new()
        .route("/mime/html", get(hello_html))
        .route("/mime/calendar", get(mime_calendar))
        .route("/get/html", get(hello_html))
        .route("/get/calendar", get(get_calendar))
}

async fn hello_html() -> Response {
    html(HELLO_WORLD_HTML)
}

async fn mime_calendar() -> Response {
    typed(StatusCode::OK, TEXT_CALENDAR, "bla")
}

async fn get_calendar() -> Response {
    typed(StatusCode::OK, TEXT_CALENDAR, CALENDAR_LINES)
}
