//! Prometheus metrics for HTTP request tracking.
//!
//! Each [`HttpMetrics`] owns its own recorder rather than installing the
//! process-global one, so the `/metrics` endpoint renders exactly the series
//! recorded through the instance held in the application state.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{
    BuildError, Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder,
};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Static application info metric name.
pub const METRIC_APP_INFO: &str = "app_info";

/// Version reported in the `app_info` series.
pub const APP_VERSION: &str = "1.0.0";

/// Latency histogram buckets, in milliseconds.
const LATENCY_BUCKETS_MS: &[f64] = &[
    0.5, 1.0, 2.5, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0,
];

/// Request metrics collector backed by a dedicated Prometheus recorder.
#[derive(Clone)]
pub struct HttpMetrics {
    recorder: Arc<PrometheusRecorder>,
    handle: PrometheusHandle,
}

impl HttpMetrics {
    /// Build the recorder, register metric descriptions and set the
    /// `app_info` gauge for `environment`.
    pub fn new(environment: &str) -> Result<Self, BuildError> {
        let recorder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(METRIC_HTTP_REQUEST_LATENCY.to_string()),
                LATENCY_BUCKETS_MS,
            )?
            .build_recorder();
        let handle = recorder.handle();

        let metrics = Self {
            recorder: Arc::new(recorder),
            handle,
        };
        metrics.describe();
        metrics.record_app_info(environment);

        debug!("Metrics initialized");
        Ok(metrics)
    }

    fn describe(&self) {
        metrics::with_local_recorder(self.recorder.as_ref(), || {
            describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests handled");
            describe_histogram!(
                METRIC_HTTP_REQUEST_LATENCY,
                "HTTP request latency in milliseconds"
            );
            describe_gauge!(METRIC_APP_INFO, "Application info");
        });
    }

    fn record_app_info(&self, environment: &str) {
        let env = environment.to_string();
        metrics::with_local_recorder(self.recorder.as_ref(), || {
            gauge!(METRIC_APP_INFO, "version" => APP_VERSION, "env" => env).set(1.0);
        });
    }

    /// Count one handled request and record its latency since `start`.
    pub fn record_request(&self, method: &str, path: &str, status: u16, start: Instant) {
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        let labels = [
            ("method", method.to_string()),
            ("path", path.to_string()),
            ("status", status.to_string()),
        ];

        metrics::with_local_recorder(self.recorder.as_ref(), || {
            counter!(METRIC_HTTP_REQUESTS, &labels).increment(1);
            histogram!(METRIC_HTTP_REQUEST_LATENCY, &labels).record(latency_ms);
        });
    }

    /// Render all series in the Prometheus text exposition format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

impl fmt::Debug for HttpMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpMetrics").finish_non_exhaustive()
    }
}
