//! Fixture HTTP server.
//!
//! Serves a fixed catalog of endpoints with canned statuses, redirects,
//! cookies and header checks, so an HTTP client's test suite can run
//! against real wire-level behavior.

// Core subsystems
pub mod config;
pub mod fixtures;
pub mod http;
pub mod net;

// Cross-cutting concerns
pub mod error;
pub mod lifecycle;
pub mod observability;

pub use config::FixtureConfig;
pub use error::{FixtureError, ServerError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
