//! Static status-code routes under `/error/`.

use axum::{
    http::StatusCode,
    response::Response,
    routing::{get, MethodRouter},
    Router,
};

use crate::http::response::{empty, html};

/// Status codes served as `/error/{code}` with an empty body.
pub const ERROR_CODES: [StatusCode; 7] = [
    StatusCode::BAD_REQUEST,
    StatusCode::FORBIDDEN,
    StatusCode::METHOD_NOT_ALLOWED,
    StatusCode::UNAVAILABLE_FOR_LEGAL_REASONS,
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::INSUFFICIENT_STORAGE,
];

/// GET and PUT, answered identically.
fn get_and_put<H, T>(handler: H) -> MethodRouter
where
    H: axum::handler::Handler<T, ()>,
    T: 'static,
{
    get(handler.clone()).put(handler)
}

pub fn routes() -> Router {
    let mut router = Router::new().route("/error/no", get_and_put(error_no));

    for status in ERROR_CODES {
        router = router.route(
            &format!("/error/{}", status.as_u16()),
            get_and_put(move || async move { empty(status) }),
        );
    }

    router
}

async fn error_no() -> Response {
    html("Hello")
}
