//! Fixture endpoint catalog.
//!
//! # Data Flow
//! ```text
//! request
//!     → axum Router lookup by (path, method)
//!     → fixture handler (pure function of the request)
//!     → canned status / headers / body
//! ```
//!
//! Unknown paths get a 404 and known paths with an unregistered method get
//! a 405, both from the router. GET routes also answer HEAD. OPTIONS is
//! not registered anywhere, so it gets a 405 too.
//!
//! # Groups
//! - `content`: fixed bodies under fixed MIME types
//! - `redirect`: 301/302/303/307/308 chains for GET, POST and PUT
//! - `echo`: request body reflection
//! - `cookies`: `Set-Cookie` issuing and `Cookie` reporting
//! - `auth`: HTTP Basic challenge
//! - `checks`: exact request header matches
//! - `status`: literal error statuses
//! - `content_length`: `Content-Length` presence checks

pub mod auth;
pub mod checks;
pub mod content;
pub mod content_length;
pub mod cookies;
pub mod echo;
pub mod redirect;
pub mod status;

use axum::Router;

/// Build the full catalog. Called once at startup; the result is immutable.
pub fn catalog() -> Router {
    Router::new()
        .merge(content::routes())
        .merge(redirect::routes())
        .merge(echo::routes())
        .merge(cookies::routes())
        .merge(auth::routes())
        .merge(checks::routes())
        .merge(status::routes())
        .merge(content_length::routes())
}

#[cfg(test)]
pub(crate) mod testing {
    use axum::{
        body::Body,
        http::{HeaderMap, Method, Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    /// A fully buffered response.
    pub struct TestResponse {
        pub status: StatusCode,
        pub headers: HeaderMap,
        pub body: String,
    }

    pub fn request(method: Method, path: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap()
    }

    pub fn get_request(path: &str) -> Request<Body> {
        request(Method::GET, path)
    }

    /// Drive `router` in-process and buffer the response.
    pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
        let res = router.oneshot(request).await.unwrap();
        let status = res.status();
        let headers = res.headers().clone();
        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(body.to_vec()).unwrap(),
        }
    }
}
