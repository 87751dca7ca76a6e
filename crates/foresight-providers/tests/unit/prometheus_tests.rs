//! Prometheus history source against a mock HTTP server

use std::time::Duration;

use chrono::{DateTime, TimeDelta};
use foresight_domain::error::Error;
use foresight_domain::ports::MetricHistorySource;
use foresight_domain::value_objects::QueryWindow;
use foresight_providers::history::PrometheusHistorySource;
use mockito::Matcher;
use reqwest::Client;

const QUERY: &str = "100 - (avg(rate(windows_cpu_time_total{mode=\"idle\"}[5m])) * 100)";

fn window() -> QueryWindow {
    QueryWindow::ending_at(
        DateTime::from_timestamp(1_700_000_600, 0).unwrap(),
        TimeDelta::minutes(10),
        TimeDelta::minutes(5),
    )
    .unwrap()
}

fn source(url: String) -> PrometheusHistorySource {
    PrometheusHistorySource::new(url, Duration::from_secs(2), Client::new())
}

#[tokio::test]
async fn test_query_range_parses_matrix() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/query_range")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), QUERY.into()),
            Matcher::UrlEncoded("start".into(), "1700000000.000".into()),
            Matcher::UrlEncoded("end".into(), "1700000600.000".into()),
            Matcher::UrlEncoded("step".into(), "300s".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"status":"success","data":{"resultType":"matrix","result":[
                {"metric":{"instance":"host:9182"},
                 "values":[[1700000000,"12.5"],[1700000300,"13"],[1700000600,"14.25"]]}
            ]}}"#,
        )
        .create_async()
        .await;

    let series = source(server.url()).query_range(QUERY, &window()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(series.len(), 1);
    let values: Vec<f64> = series[0].values().collect();
    assert_eq!(values, vec![12.5, 13.0, 14.25]);
    assert_eq!(series[0].step(), TimeDelta::minutes(5));
    assert_eq!(
        series[0].last_timestamp(),
        DateTime::from_timestamp(1_700_000_600, 0)
    );
}

#[tokio::test]
async fn test_empty_result_is_not_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/query_range")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status":"success","data":{"resultType":"matrix","result":[]}}"#)
        .create_async()
        .await;

    let series = source(server.url()).query_range(QUERY, &window()).await.unwrap();
    assert!(series.is_empty());
}

#[tokio::test]
async fn test_bad_request_is_query_unavailable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/query_range")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"status":"error","errorType":"bad_data","error":"parse error"}"#)
        .create_async()
        .await;

    let err = source(server.url())
        .query_range("sum(", &window())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::QueryUnavailable { .. }));
    assert!(err.to_string().contains("400"));
}

#[tokio::test]
async fn test_error_status_in_body_is_query_unavailable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/query_range")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status":"error","errorType":"timeout","error":"query timed out"}"#)
        .create_async()
        .await;

    let err = source(server.url()).query_range(QUERY, &window()).await.unwrap_err();
    assert!(matches!(err, Error::QueryUnavailable { .. }));
    assert!(err.to_string().contains("query timed out"));
}

#[tokio::test]
async fn test_vector_result_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/query_range")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status":"success","data":{"resultType":"vector","result":[]}}"#)
        .create_async()
        .await;

    let err = source(server.url()).query_range(QUERY, &window()).await.unwrap_err();
    assert!(matches!(err, Error::QueryUnavailable { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_query_unavailable() {
    // Nothing listens on port 9 of the loopback interface
    let err = source("http://127.0.0.1:9".to_string())
        .query_range(QUERY, &window())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::QueryUnavailable { .. }));
}
