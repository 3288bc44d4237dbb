use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "shopping_list_requests_total",
        "Requests handled per list operation",
        &["op"]
    )
    .expect("register requests_total")
});

pub static FAILURES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "shopping_list_failures_total",
        "Failed list operations by kind (validation, store, malformed)",
        &["op", "kind"]
    )
    .expect("register failures_total")
});

pub fn record_request(op: &str) {
    REQUESTS_TOTAL.with_label_values(&[op]).inc();
}

pub fn record_failure(op: &str, kind: &str) {
    FAILURES_TOTAL.with_label_values(&[op, kind]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    // make sure both families exist even before the first request
    Lazy::force(&REQUESTS_TOTAL);
    Lazy::force(&FAILURES_TOTAL);

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_up_in_exposition() {
        record_request("unit_list");
        record_failure("unit_list", "store");
        let (status, text) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(text.contains("shopping_list_requests_total{op=\"unit_list\"}"));
        let failure_line = text
            .lines()
            .find(|l| l.starts_with("shopping_list_failures_total{") && l.contains("op=\"unit_list\""))
            .expect("failure sample");
        assert!(failure_line.contains("kind=\"store\""));
    }
}
