//! Metrics collection and exposition.
//!
//! # Metrics
//! - `greeting_requests_total` (counter): requests by method, path, status
//! - `greeting_request_duration_seconds` (histogram): latency by method, path
//!
//! `path` is the matched route pattern (`/SayHello2/{name}`), never the raw
//! request path, and `"unmatched"` when no pattern is attached.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REQUESTS_TOTAL: &str = "greeting_requests_total";
pub const REQUEST_DURATION: &str = "greeting_request_duration_seconds";
pub const UNMATCHED_PATH: &str = "unmatched";

/// Install the Prometheus recorder with its own HTTP listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one completed request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    metrics::counter!(
        REQUESTS_TOTAL,
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!(
        REQUEST_DURATION,
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Label for `request`: its matched route pattern, or [`UNMATCHED_PATH`].
pub fn path_label(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_PATH.to_owned())
}

/// Route-level middleware feeding [`record_request`].
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let path = path_label(&request);
    let method = request.method().to_string();

    let response = next.run(request).await;

    record_request(&method, &path, response.status().as_u16(), start);
    response
}
