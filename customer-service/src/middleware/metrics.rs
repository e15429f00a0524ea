use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use std::time::Instant;

/// Record one counter increment and one latency observation per request,
/// whatever the handler's exit path.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    // Label by route template so parameterized routes stay one series each;
    // the /api mount prefix is dropped from the label.
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let endpoint = route.strip_prefix("/api").unwrap_or(&route).to_string();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status().as_u16().to_string();

    let counter_labels = [
        ("method", method.clone()),
        ("endpoint", endpoint.clone()),
        ("status", status),
    ];
    let histogram_labels = [("method", method), ("endpoint", endpoint)];

    counter!("customer_service_requests_total", &counter_labels).increment(1);
    histogram!("customer_service_latency_seconds", &histogram_labels)
        .record(duration.as_secs_f64());

    response
}
