//! HTTP Basic authentication fixture.

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::http::request::header_str;
use crate::http::response::{html, typed, TEXT_HTML};

const USERNAME: &str = "nico";
const PASSWORD: &str = "1234";
const CHALLENGE: &str = "Basic realm=\"Authentication Required\"";

/// Decoded `Authorization: Basic` credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Parse the first `Authorization` header.
    ///
    /// The scheme is matched case-insensitively. A decoded value without a
    /// colon is a username with an empty password.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = header_str(headers, header::AUTHORIZATION.as_str())?;
        let (scheme, encoded) = value.trim().split_once(char::is_whitespace)?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':').unwrap_or((decoded.as_str(), ""));

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn verify(&self) -> bool {
        self.username == USERNAME && self.password == PASSWORD
    }
}

/// Rejects requests without valid credentials with a Basic challenge.
pub async fn require_basic_auth(request: Request<Body>, next: Next) -> Response {
    match Credentials::from_headers(request.headers()) {
        Some(credentials) if credentials.verify() => next.run(request).await,
        credentials => {
            tracing::debug!(
                username = ?credentials.as_ref().map(|c| c.username.as_str()),
                "Basic authentication failed"
            );
            unauthorized()
        }
    }
}

fn unauthorized() -> Response {
    let mut res = typed(StatusCode::UNAUTHORIZED, TEXT_HTML, "Unauthorized Access");
    res.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static(CHALLENGE),
    );
    res
}

pub fn routes() -> Router {
    Router::new()
        .route("/auth/test", get(auth_test))
        .route_layer(middleware::from_fn(require_basic_auth))
}

async fn auth_test() -> impl IntoResponse {
    html("Hello")
}
