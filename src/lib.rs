//! Minimal HTTP backend.
//!
//! Serves liveness and readiness probes, an informational `/api` endpoint
//! that reports the deployment environment, and Prometheus metrics:
//!
//! ```text
//! GET /health   -> {"status": "healthy"}
//! GET /ready    -> {"status": "ready"}
//! GET /api      -> {"message": "Hello from Backend!", "environment": "<APP_ENV>"}
//! GET /metrics  -> Prometheus text exposition
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`metrics`]: Request counters, latency histograms and the info gauge
//! - [`api`]: HTTP handlers, middleware and router
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
