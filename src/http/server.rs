//! HTTP server setup and serve loop.
//!
//! # Responsibilities
//! - Create the Axum Router from the fixture catalog
//! - Wire up middleware (tracing, request ID, timeout, body limit, metrics)
//! - Serve HTTP/1.1 and HTTP/2 connections from the bounded listener
//! - Drain open connections on shutdown
//!
//! HTTP/1 responses are written with title-case header names
//! (`Set-Cookie`, `Location`), which some fixture clients compare verbatim.

use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    middleware,
    Router,
};
use hyper_util::{
    rt::{TokioExecutor, TokioIo},
    server::conn::auto,
    service::TowerToHyperService,
};
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::FixtureConfig;
use crate::fixtures;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, X_REQUEST_ID};
use crate::net::{ConnectionTracker, Listener};
use crate::observability::metrics;

/// HTTP server for the fixture catalog.
pub struct HttpServer {
    router: Router,
    config: FixtureConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: FixtureConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers listed first in the `ServiceBuilder` see the request first.
    #[allow(deprecated)]
    fn build_router(config: &FixtureConfig) -> Router {
        fixtures::catalog()
            .route_layer(middleware::from_fn(metrics::track_requests))
            .layer(DefaultBodyLimit::disable())
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(request_span))
                    .layer(propagate_request_id_layer())
                    .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// The fully layered router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve connections from `listener` until `shutdown` fires, then drain.
    pub async fn run(
        self,
        listener: Listener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            max_connections = listener.max_connections(),
            "HTTP server starting"
        );

        let tracker = ConnectionTracker::new();
        let mut builder = auto::Builder::new(TokioExecutor::new());
        builder.http1().title_case_headers(true);

        loop {
            let (stream, peer_addr, permit) = tokio::select! {
                accepted = listener.accept() => match accepted {
                    Ok(accepted) => accepted,
                    Err(e) => {
                        tracing::warn!(error = %e, "Accept failed");
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        continue;
                    }
                },
                _ = shutdown.recv() => break,
            };

            let guard = tracker.track();
            let service = TowerToHyperService::new(self.router.clone());
            let builder = builder.clone();
            let mut conn_shutdown = shutdown.resubscribe();

            tokio::spawn(async move {
                let _permit = permit;
                let conn = builder.serve_connection(TokioIo::new(stream), service);
                tokio::pin!(conn);

                let result = tokio::select! {
                    res = conn.as_mut() => res,
                    _ = conn_shutdown.recv() => {
                        conn.as_mut().graceful_shutdown();
                        conn.as_mut().await
                    }
                };

                if let Err(e) = result {
                    tracing::debug!(
                        connection_id = %guard.id(),
                        peer_addr = %peer_addr,
                        error = %e,
                        "Connection ended with error"
                    );
                }
            });
        }

        tracing::info!(
            open_connections = tracker.active_count(),
            "Shutdown signal received, draining connections"
        );

        let grace = Duration::from_secs(self.config.timeouts.shutdown_grace_secs);
        if !tracker.drain(grace).await {
            tracing::warn!(
                open_connections = tracker.active_count(),
                "Connections still open after grace period"
            );
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Span wrapping every request, tagged with its request ID.
fn request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
