//! In-process metrics.
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler.
//! `track` is the router middleware that feeds the per-endpoint series.

pub mod metrics;
pub mod track;

pub use metrics::ServerMetrics;
