// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Prometheus metrics module
//!
//! Provides global metrics using the default Prometheus registry via macros
//! and an Axum-compatible metrics handler.

use std::sync::LazyLock;

use axum::{
    http::{StatusCode, header},
    response::Response,
};
use prometheus::{
    Encoder, Histogram, IntCounterVec, TextEncoder, register_histogram, register_int_counter_vec,
};

/// Total number of API requests received, labeled by endpoint.
pub static REQUESTS_BY_ENDPOINT: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "launcher_api_requests_total",
        "Total number of API requests, labeled by endpoint",
        &["endpoint"]
    )
    .expect("Failed to create launcher_api_requests_total counter vec")
});

/// Histogram of requested catalogue page sizes (normalized take values).
pub static CATALOGUE_PAGE_SIZE: LazyLock<Histogram> = LazyLock::new(|| {
    register_histogram!(
        "launcher_api_catalogue_page_size",
        "Requested catalogue page sizes after normalization",
        vec![1.0, 4.0, 12.0, 24.0, 48.0, 100.0, 250.0, 500.0]
    )
    .expect("Failed to create catalogue page size histogram")
});

/// Increment the requests counter for an endpoint
///
/// # Arguments
/// * `endpoint` - Short name of the endpoint serving the request
pub fn inc_requests(endpoint: &str) {
    REQUESTS_BY_ENDPOINT.with_label_values(&[endpoint]).inc();
}

/// Observe the page size of a catalogue request
///
/// # Arguments
/// * `take` - The normalized number of records requested
pub fn observe_page_size(take: u64) {
    #[allow(clippy::cast_precision_loss)]
    CATALOGUE_PAGE_SIZE.observe(take as f64);
}

/// Axum handler that exports metrics in Prometheus text format
///
/// # Panics
///
/// This function will panic if:
/// - The metrics encoder fails to encode the metrics data
/// - The UTF-8 conversion of the encoded buffer fails
/// - The HTTP response builder fails to create the response
pub async fn metrics_handler() -> Response<String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];
    encoder
        .encode(&metric_families, &mut buffer)
        .expect("Failed to encode metrics");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, encoder.format_type())
        .body(String::from_utf8(buffer).expect("metrics buffer should be valid UTF-8"))
        .expect("Failed to create metrics response")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exporter_includes_request_counter() {
        inc_requests("catalogue_hot");
        observe_page_size(12);

        let response = metrics_handler().await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().contains("launcher_api_requests_total"));
        assert!(response.body().contains("launcher_api_catalogue_page_size"));
    }
}
