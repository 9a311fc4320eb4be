use std::{net::SocketAddr, num::NonZero, time::Duration};

use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};

// Edges sized for the outbound path: most Monkeytype calls land well under
// a second, and the outbound client timeout caps the tail at 10 s.
const DURATION_BUCKETS_SECS: &[f64] = &[0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

/// Serves the Prometheus exposition endpoint on its own loopback listener,
/// away from the relay's public port.
pub fn init(addr: SocketAddr) {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .set_buckets_for_metric(
            Matcher::Suffix("duration_seconds".to_string()),
            DURATION_BUCKETS_SECS,
        )
        .unwrap()
        .set_bucket_duration(Duration::from_secs(60))
        .unwrap()
        .set_bucket_count(NonZero::new(5).unwrap())
        .install()
        .unwrap();
}
