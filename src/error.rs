//! Error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::config::ConfigError;
use crate::net::ListenerError;

/// A request the catalog cannot answer with a fixture response.
///
/// Rendered as a bare 500, the same way an unhandled failure in a handler
/// would surface.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("request has no Content-Type header")]
    MissingContentType,

    #[error("request body is not valid UTF-8")]
    InvalidUtf8Body(#[from] std::string::FromUtf8Error),

    #[error("Content-Length header `{0}` is not a number")]
    InvalidContentLength(String),
}

impl IntoResponse for FixtureError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Unhandled fixture request");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to install metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}
