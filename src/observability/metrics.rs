//! Metrics collection and exposition.
//!
//! # Metrics
//! - `albums_requests_total` (counter): requests by route and status
//! - `albums_request_duration_seconds` (histogram): latency by route
//! - `albums_store_size` (gauge): number of albums in the store
//! - `albums_remote_calls_total` (counter): backend calls by outcome

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(route: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "albums_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("albums_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_store_size(len: usize) {
    metrics::gauge!("albums_store_size").set(len as f64);
}

pub fn record_remote_call(outcome: &'static str) {
    metrics::counter!("albums_remote_calls_total", "outcome" => outcome).increment(1);
}
