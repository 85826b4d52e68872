//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and layers produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (request counters, latency histograms)
//!
//! Consumers:
//!     → stdout via tracing-subscriber
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - Metrics are cheap to record even when not exported

pub mod logging;
pub mod metrics;
