//! Metrics and observability utilities
//!
//! Provides conversion-run counters and histograms with
//! standardized naming conventions.

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};

/// Metrics prefix for all CiteForge metrics
pub const METRICS_PREFIX: &str = "citeforge";

/// Register all metric descriptions
pub fn register_metrics() {
    describe_counter!(
        format!("{}_nodes_indexed_total", METRICS_PREFIX),
        Unit::Count,
        "Total nodes assigned a row index"
    );

    describe_counter!(
        format!("{}_edges_accepted_total", METRICS_PREFIX),
        Unit::Count,
        "Total input edges materialized into the edge index"
    );

    describe_counter!(
        format!("{}_edges_skipped_total", METRICS_PREFIX),
        Unit::Count,
        "Total input edges skipped due to unresolvable endpoints"
    );

    describe_counter!(
        format!("{}_keywords_assigned_total", METRICS_PREFIX),
        Unit::Count,
        "Total distinct keywords assigned a vocabulary id"
    );

    describe_histogram!(
        format!("{}_conversion_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Graph conversion latency in seconds"
    );

    tracing::info!("Metrics registered");
}

/// Helper to record a completed conversion run
pub fn record_conversion(
    duration_secs: f64,
    nodes: usize,
    edges_accepted: usize,
    edges_skipped: usize,
    keywords: usize,
) {
    counter!(format!("{}_nodes_indexed_total", METRICS_PREFIX)).increment(nodes as u64);

    counter!(format!("{}_edges_accepted_total", METRICS_PREFIX)).increment(edges_accepted as u64);

    counter!(format!("{}_edges_skipped_total", METRICS_PREFIX)).increment(edges_skipped as u64);

    counter!(format!("{}_keywords_assigned_total", METRICS_PREFIX)).increment(keywords as u64);

    histogram!(format!("{}_conversion_duration_seconds", METRICS_PREFIX)).record(duration_secs);
}
