//! Tests for history provisioning and its synthetic fallback

use chrono::TimeDelta;
use foresight_application::{
    HistoryOrigin, HistoryProvider, HistorySettings, SyntheticHistoryGenerator, SyntheticPattern,
};
use foresight_domain::{MetricKind, MetricSpec, ValueBounds};

use crate::fakes::{StaticSource, at, five_minutes};

fn network_spec() -> MetricSpec {
    MetricSpec::new(
        "network_usage_predicted_in_15_min",
        "Network Traffic",
        "sum(rate(bytes_total[5m]))",
        MetricKind::Network,
    )
    .with_unit_conversion(0.000001)
    .with_bounds(ValueBounds::non_negative())
}

fn cpu_spec() -> MetricSpec {
    MetricSpec::new("cpu_usage_predicted_in_15_min", "CPU Usage", "cpu", MetricKind::Cpu)
}

fn provider(source: std::sync::Arc<StaticSource>, clamp_history: bool) -> HistoryProvider {
    HistoryProvider::new(
        source,
        SyntheticHistoryGenerator::new(SyntheticPattern::Baseline, TimeDelta::days(7), five_minutes())
            .with_seed(1),
        HistorySettings {
            clamp_history,
            ..HistorySettings::default()
        },
    )
}

#[tokio::test]
async fn test_unit_conversion_applied_to_observed_values() {
    let source = StaticSource::with_values(vec![1e6, 2e6]);
    let history = provider(source.clone(), false)
        .history(&network_spec(), at(1_700_000_000))
        .await
        .unwrap();

    assert_eq!(history.origin, HistoryOrigin::Observed);
    let values: Vec<f64> = history.series.values().collect();
    assert_eq!(values.len(), 2);
    assert!((values[0] - 1.0).abs() < 1e-12);
    assert!((values[1] - 2.0).abs() < 1e-12);
    assert_eq!(
        source.queries.lock().unwrap().as_slice(),
        ["sum(rate(bytes_total[5m]))"]
    );
}

#[tokio::test]
async fn test_query_failure_falls_back_to_synthetic() {
    let history = provider(StaticSource::failing(), false)
        .history(&cpu_spec(), at(1_700_000_000))
        .await
        .unwrap();

    match history.origin {
        HistoryOrigin::Synthetic { reason } => assert!(reason.contains("connection refused")),
        HistoryOrigin::Observed => panic!("expected synthetic history"),
    }
    assert_eq!(history.series.len(), 7 * 288 + 1);
}

#[tokio::test]
async fn test_empty_result_falls_back_to_synthetic() {
    let history = provider(StaticSource::with_values(vec![]), false)
        .history(&cpu_spec(), at(1_700_000_000))
        .await
        .unwrap();
    assert!(history.origin.is_synthetic());
}

#[tokio::test]
async fn test_single_sample_is_insufficient() {
    let history = provider(StaticSource::with_values(vec![42.0]), false)
        .history(&cpu_spec(), at(1_700_000_000))
        .await
        .unwrap();
    assert!(history.origin.is_synthetic());
}

#[tokio::test]
async fn test_non_finite_samples_are_dropped() {
    let history = provider(StaticSource::with_values(vec![10.0, f64::NAN, 30.0]), false)
        .history(&cpu_spec(), at(1_700_000_000))
        .await
        .unwrap();
    assert_eq!(history.origin, HistoryOrigin::Observed);
    assert_eq!(history.series.values().collect::<Vec<_>>(), vec![10.0, 30.0]);
}

#[tokio::test]
async fn test_observed_values_not_clamped_by_default() {
    let history = provider(StaticSource::with_values(vec![120.0, 130.0]), false)
        .history(&cpu_spec(), at(1_700_000_000))
        .await
        .unwrap();
    assert_eq!(history.series.values().collect::<Vec<_>>(), vec![120.0, 130.0]);
}

#[tokio::test]
async fn test_clamp_history_bounds_values() {
    let history = provider(StaticSource::with_values(vec![-4.0, 130.0]), true)
        .history(&cpu_spec(), at(1_700_000_000))
        .await
        .unwrap();
    assert_eq!(history.series.values().collect::<Vec<_>>(), vec![0.0, 100.0]);
}

#[tokio::test]
async fn test_synthetic_other_metric_uses_its_bounds() {
    let spec = MetricSpec::new("queue_depth", "Queue Depth", "queue", MetricKind::Other)
        .with_bounds(ValueBounds::new(0.0, Some(1000.0)).unwrap());
    let history = provider(StaticSource::failing(), false)
        .history(&spec, at(1_700_000_000))
        .await
        .unwrap();

    assert!(matches!(history.origin, HistoryOrigin::Synthetic { .. }));
    assert!(history.series.values().all(|v| (0.0..1000.0).contains(&v)));
    assert!(history.series.values().any(|v| v > 100.0));
}
