//! Redirect family.
//!
//! Every method in [`METHODS`] gets the same five redirect routes. Codes that
//! preserve the method (307, 308) point at that method's own targets; codes
//! that allow a client to switch to GET (301, 302, 303) point at the GET
//! targets.

use axum::{
    http::{Method, StatusCode},
    response::Response,
    routing::{on, MethodFilter},
    Router,
};

use crate::http::response::{html, redirect};

const REDIRECTED_BODY: &str = "Itsa me, redirected\n";
const PERMANENT_REDIRECTED_BODY: &str = "Itsa me, redirected permanently\n";

/// Methods that carry a redirect family, with their target endpoints.
pub static METHODS: [RedirectMethod; 3] = [
    RedirectMethod::new(
        Method::GET,
        MethodFilter::GET,
        "/get/redirected",
        "/get/permanent_redirected",
    ),
    RedirectMethod::new(
        Method::POST,
        MethodFilter::POST,
        "/post/redirected",
        "/post/permanent_redirected",
    ),
    RedirectMethod::new(
        Method::PUT,
        MethodFilter::PUT,
        "/put/redirected",
        "/put/permanent_redirected",
    ),
];

/// Redirect endpoints for one request method.
#[derive(Debug, Clone)]
pub struct RedirectMethod {
    pub method: Method,
    filter: MethodFilter,
    pub redirected: &'static str,
    pub permanent_redirected: &'static str,
}

impl RedirectMethod {
    const fn new(
        method: Method,
        filter: MethodFilter,
        redirected: &'static str,
        permanent_redirected: &'static str,
    ) -> Self {
        Self {
            method,
            filter,
            redirected,
            permanent_redirected,
        }
    }

    /// Lowercase path segment for this method (`get`, `post`, `put`).
    pub fn segment(&self) -> String {
        self.method.as_str().to_ascii_lowercase()
    }

    /// The five redirect routes of this method.
    pub fn rules(&self) -> [RedirectRule; 5] {
        let get = &METHODS[0];
        let base = self.segment();
        [
            RedirectRule::new(
                format!("/{base}/permanent_redirect"),
                StatusCode::MOVED_PERMANENTLY,
                get.permanent_redirected,
            ),
            RedirectRule::new(
                format!("/{base}/redirect"),
                StatusCode::FOUND,
                get.redirected,
            ),
            RedirectRule::new(
                format!("/{base}/redirect_303"),
                StatusCode::SEE_OTHER,
                get.redirected,
            ),
            RedirectRule::new(
                format!("/{base}/redirect_307"),
                StatusCode::TEMPORARY_REDIRECT,
                self.redirected,
            ),
            RedirectRule::new(
                format!("/{base}/redirect_308"),
                StatusCode::PERMANENT_REDIRECT,
                self.permanent_redirected,
            ),
        ]
    }
}

/// A single `path → (status, Location)` redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    pub path: String,
    pub status: StatusCode,
    pub location: &'static str,
}

impl RedirectRule {
    fn new(path: String, status: StatusCode, location: &'static str) -> Self {
        Self {
            path,
            status,
            location,
        }
    }
}

pub fn routes() -> Router {
    let mut router = Router::new();

    for family in METHODS.iter() {
        for rule in family.rules() {
            let RedirectRule {
                path,
                status,
                location,
            } = rule;
            router = router.route(
                &path,
                on(family.filter, move || async move { redirect(status, location) }),
            );
        }

        router = router
            .route(family.redirected, on(family.filter, redirected))
            .route(
                family.permanent_redirected,
                on(family.filter, permanent_redirected),
            );
    }

    router
}

async fn redirected() -> Response {
    html(REDIRECTED_BODY)
}

async fn permanent_redirected() -> Response {
    html(PERMANENT_REDIRECTED_BODY)
}
