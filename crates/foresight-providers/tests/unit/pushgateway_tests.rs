//! Pushgateway publisher against a mock HTTP server

use std::time::Duration;

use foresight_domain::constants::{DEFAULT_JOB_NAME, GAUGE_CPU, GAUGE_NETWORK};
use foresight_domain::entities::GaugeSet;
use foresight_domain::error::Error;
use foresight_domain::ports::MetricsPublisher;
use foresight_providers::publish::PushgatewayPublisher;
use mockito::Matcher;
use reqwest::Client;

fn publisher(url: String) -> PushgatewayPublisher {
    PushgatewayPublisher::new(url, Duration::from_secs(2), Client::new())
}

fn gauges() -> GaugeSet {
    let mut gauges = GaugeSet::new();
    gauges.declare(GAUGE_CPU, "Predicted CPU Usage %");
    gauges.declare(GAUGE_NETWORK, "Predicted Network Traffic (MB/s)");
    gauges.set(GAUGE_CPU, 37.5).unwrap();
    gauges
}

#[tokio::test]
async fn test_push_replaces_job_group() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/metrics/job/system_predictor")
        .match_header("content-type", Matcher::Regex("^text/plain".into()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("# TYPE cpu_usage_predicted_in_15_min gauge".into()),
            Matcher::Regex("cpu_usage_predicted_in_15_min 37.5".into()),
        ]))
        .with_status(200)
        .create_async()
        .await;

    publisher(server.url())
        .push(DEFAULT_JOB_NAME, &gauges())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_push_failed() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("PUT", "/metrics/job/system_predictor")
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let err = publisher(server.url())
        .push(DEFAULT_JOB_NAME, &gauges())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::PushFailed { .. }));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_unreachable_gateway_is_push_failed() {
    let err = publisher("http://127.0.0.1:9".to_string())
        .push(DEFAULT_JOB_NAME, &gauges())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::PushFailed { .. }));
}
