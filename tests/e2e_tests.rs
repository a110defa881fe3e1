//! End-to-end measurement tests against mock and in-process peers
//!
//! These exercise the full fan-out / barrier / reduce pipeline without
//! touching a real network: wiremock stands in for the peer server, and
//! one test runs the client against the crate's own server router.

use lan_speed_tester::{
    error::AppError,
    server,
    types::Direction,
    Config, MeasurementOrchestrator, TransferRunner,
};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const MIB: u64 = 1024 * 1024;

/// Start a mock peer answering both endpoints instantly
async fn mock_peer(payload_bytes: usize) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/download"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/octet-stream")
                .set_body_bytes(vec![0u8; payload_bytes]),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    server
}

fn test_config(base_url: &str, payload_bytes: u64, concurrency: u32, round_count: u32) -> Config {
    let mut config = Config::default();
    config.base_url = base_url.to_string();
    config.payload_bytes = payload_bytes;
    config.concurrency = concurrency;
    config.round_count = round_count;
    config.timeout_seconds = 10;
    config.enable_color = false;
    config
}

#[tokio::test]
async fn test_download_series_has_expected_shape() {
    // 5 rounds, 4 concurrent transfers, 1 MiB payload against an
    // always-successful peer
    let peer = mock_peer(MIB as usize).await;
    let config = test_config(&peer.uri(), MIB, 4, 5);

    let runner = TransferRunner::new(&config).unwrap();
    let orchestrator = MeasurementOrchestrator::new(runner, &config);

    let measurement = orchestrator.measure(Direction::Download).await.unwrap();

    assert_eq!(measurement.series.len(), 5);
    for sample in measurement.series.samples() {
        assert!(sample.mbps.is_finite());
        assert!(sample.mbps > 0.0);
        assert_eq!(sample.completed_units, 4);
        assert_eq!(sample.failed_units, 0);
    }

    let values = measurement.series.mbps_values();
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    assert!(measurement.summary.average_mbps >= min);
    assert!(measurement.summary.average_mbps <= max);
    assert!(measurement.summary.median_mbps >= min);
    assert!(measurement.summary.median_mbps <= max);
}

#[tokio::test]
async fn test_upload_measurement_completes() {
    let peer = mock_peer(0).await;
    let config = test_config(&peer.uri(), 256 * 1024, 2, 3);

    let runner = TransferRunner::new(&config).unwrap();
    let orchestrator = MeasurementOrchestrator::new(runner, &config);

    let measurement = orchestrator.measure(Direction::Upload).await.unwrap();

    assert_eq!(measurement.series.len(), 3);
    for sample in measurement.series.samples() {
        assert!(sample.mbps > 0.0);
        assert_eq!(sample.completed_units, 2);
    }
}

#[tokio::test]
async fn test_partial_unit_failures_do_not_fail_the_round() {
    let peer = MockServer::start().await;

    // First two requests fail, the remaining two succeed
    Mock::given(method("GET"))
        .and(path("/download"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&peer)
        .await;

    Mock::given(method("GET"))
        .and(path("/download"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/octet-stream")
                .set_body_bytes(vec![0u8; 64 * 1024]),
        )
        .mount(&peer)
        .await;

    let config = test_config(&peer.uri(), 64 * 1024, 4, 1);
    let runner = TransferRunner::new(&config).unwrap();
    let orchestrator = MeasurementOrchestrator::new(runner, &config);

    let measurement = orchestrator.measure(Direction::Download).await.unwrap();

    assert_eq!(measurement.series.len(), 1);
    let sample = &measurement.series.samples()[0];
    assert_eq!(sample.completed_units, 2);
    assert_eq!(sample.failed_units, 2);
    // Throughput reflects the two completed transfers, not zero
    assert!(sample.mbps > 0.0);
}

#[tokio::test]
async fn test_unreachable_peer_aborts_direction() {
    // Bind and drop a listener to get a port nothing is listening on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = test_config(&format!("http://127.0.0.1:{}", port), 64 * 1024, 4, 2);
    let runner = TransferRunner::new(&config).unwrap();
    let orchestrator = MeasurementOrchestrator::new(runner, &config);

    let result = orchestrator.measure(Direction::Download).await;
    assert!(matches!(result, Err(AppError::Measurement(_))));
}

#[tokio::test]
async fn test_client_against_builtin_server() {
    // Full loop: the crate's own peer server on an ephemeral port, then
    // both measurement phases against it
    let payload = 256 * 1024u64;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, server::router(payload)).await.unwrap();
    });

    let config = test_config(&format!("http://{}", addr), payload, 4, 3);
    let runner = TransferRunner::new(&config).unwrap();
    let orchestrator = MeasurementOrchestrator::new(runner, &config);

    for direction in [Direction::Download, Direction::Upload] {
        let measurement = orchestrator.measure(direction).await.unwrap();
        assert_eq!(measurement.series.len(), 3);
        assert!(measurement.summary.average_mbps > 0.0);
        assert!(measurement.summary.median_mbps > 0.0);
    }
}
