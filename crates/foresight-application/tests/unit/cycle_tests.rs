//! Tests for the prediction cycle use case

use std::sync::Arc;

use chrono::TimeDelta;
use foresight_application::{
    HistoryProvider, HistorySettings, MetricOutcome, PredictionCycle, PushOutcome,
    SyntheticHistoryGenerator, SyntheticPattern,
};
use foresight_domain::{
    GAUGE_CPU, GAUGE_DISK, GAUGE_MEMORY, GAUGE_NETWORK, MetricKind, MetricSpec, ValueBounds,
    ports::{ForecastModel, MetricHistorySource, MetricsPublisher},
};

use crate::fakes::{
    FailingModel, LastValueModel, RecordingPublisher, ScriptedSource, StaticSource, at,
    five_minutes,
};

fn specs() -> Vec<MetricSpec> {
    vec![
        MetricSpec::new(GAUGE_DISK, "Disk Usage", "disk", MetricKind::Disk),
        MetricSpec::new(GAUGE_CPU, "CPU Usage", "cpu", MetricKind::Cpu),
        MetricSpec::new(GAUGE_MEMORY, "Memory Usage", "memory", MetricKind::Memory),
        MetricSpec::new(GAUGE_NETWORK, "Network Traffic", "network", MetricKind::Network)
            .with_unit_conversion(0.000001)
            .with_bounds(ValueBounds::non_negative()),
    ]
}

fn cycle(
    source: Arc<dyn MetricHistorySource>,
    model: Arc<dyn ForecastModel>,
    publisher: Arc<dyn MetricsPublisher>,
) -> PredictionCycle {
    let history = HistoryProvider::new(
        source,
        SyntheticHistoryGenerator::new(SyntheticPattern::Smart, TimeDelta::days(2), five_minutes())
            .with_seed(3),
        HistorySettings::default(),
    );
    PredictionCycle::new(history, model, publisher, specs(), "system_predictor")
}

fn scripted_source() -> Arc<ScriptedSource> {
    ScriptedSource::new(&[
        ("disk", vec![60.0, 61.0]),
        ("cpu", vec![20.0, 150.0]),
        ("memory", vec![50.0, 55.0]),
        ("network", vec![1e6, 2e6]),
    ])
}

#[tokio::test]
async fn test_all_metrics_published_and_clamped() {
    let publisher = RecordingPublisher::new();
    let cycle = cycle(
        scripted_source(),
        Arc::new(LastValueModel {
            fail_on_last_value: None,
        }),
        publisher.clone(),
    );
    let mut gauges = cycle.declare_gauges();

    let report = cycle.run(&mut gauges, at(1_700_000_000)).await;

    assert_eq!(report.published(), 4);
    assert_eq!(report.push, PushOutcome::Pushed);
    assert_eq!(gauges.get(GAUGE_DISK), Some(61.0));
    assert_eq!(gauges.get(GAUGE_CPU), Some(100.0));
    assert_eq!(gauges.get(GAUGE_MEMORY), Some(55.0));
    assert!((gauges.get(GAUGE_NETWORK).unwrap() - 2.0).abs() < 1e-12);

    let clamped: Vec<&str> = report
        .outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            MetricOutcome::Published { forecast, .. } if forecast.was_clamped() => {
                Some(forecast.metric.as_str())
            }
            _ => None,
        })
        .collect();
    assert_eq!(clamped, [GAUGE_CPU]);

    let pushes = publisher.pushes.lock().unwrap();
    assert_eq!(pushes.len(), 1);
    assert_eq!(pushes[0].0, "system_predictor");
    assert_eq!(pushes[0].1, gauges);
}

#[tokio::test]
async fn test_forecast_targets_fifteen_minutes_after_last_sample() {
    let cycle = cycle(
        scripted_source(),
        Arc::new(LastValueModel {
            fail_on_last_value: None,
        }),
        RecordingPublisher::new(),
    );
    let mut gauges = cycle.declare_gauges();
    let now = at(1_700_000_000);

    let report = cycle.run(&mut gauges, now).await;

    for outcome in &report.outcomes {
        match outcome {
            MetricOutcome::Published { forecast, .. } => {
                assert_eq!(forecast.target, now + TimeDelta::minutes(15));
            }
            MetricOutcome::Skipped { .. } => panic!("no metric should be skipped"),
        }
    }
}

#[tokio::test]
async fn test_fit_failure_skips_only_that_metric() {
    let publisher = RecordingPublisher::new();
    // memory series ends at 55.0
    let cycle = cycle(
        scripted_source(),
        Arc::new(LastValueModel {
            fail_on_last_value: Some(55.0),
        }),
        publisher.clone(),
    );
    let mut gauges = cycle.declare_gauges();
    gauges.set(GAUGE_MEMORY, 33.0).unwrap();

    let report = cycle.run(&mut gauges, at(1_700_000_000)).await;

    assert_eq!(report.published(), 3);
    assert_eq!(report.skipped(), 1);
    let skipped = report
        .outcomes
        .iter()
        .find(|o| !o.is_published())
        .unwrap();
    assert_eq!(skipped.metric(), GAUGE_MEMORY);
    assert_eq!(gauges.get(GAUGE_MEMORY), Some(33.0));
    assert_eq!(gauges.get(GAUGE_DISK), Some(61.0));
    assert_eq!(publisher.push_count(), 1);
}

#[tokio::test]
async fn test_first_cycle_failure_leaves_gauge_unset() {
    let publisher = RecordingPublisher::new();
    let cycle = cycle(scripted_source(), Arc::new(FailingModel), publisher.clone());
    let mut gauges = cycle.declare_gauges();

    let report = cycle.run(&mut gauges, at(1_700_000_000)).await;

    assert_eq!(report.published(), 0);
    assert!(gauges.iter().all(|(_, entry)| entry.value.is_none()));
    assert_eq!(publisher.push_count(), 1);
}

#[tokio::test]
async fn test_query_failure_still_reaches_push() {
    let publisher = RecordingPublisher::new();
    let cycle = cycle(
        StaticSource::failing(),
        Arc::new(LastValueModel {
            fail_on_last_value: None,
        }),
        publisher.clone(),
    );
    let mut gauges = cycle.declare_gauges();

    let report = cycle.run(&mut gauges, at(1_700_000_000)).await;

    assert_eq!(report.published(), 4);
    assert!(report.outcomes.iter().all(|o| match o {
        MetricOutcome::Published { origin, .. } => origin.is_synthetic(),
        MetricOutcome::Skipped { .. } => false,
    }));
    assert_eq!(publisher.push_count(), 1);
}

#[tokio::test]
async fn test_push_failure_completes_cycle_and_keeps_gauges() {
    let publisher = RecordingPublisher::unreachable();
    let cycle = cycle(
        scripted_source(),
        Arc::new(LastValueModel {
            fail_on_last_value: None,
        }),
        publisher.clone(),
    );
    let mut gauges = cycle.declare_gauges();

    let first = cycle.run(&mut gauges, at(1_700_000_000)).await;
    let second = cycle.run(&mut gauges, at(1_700_000_060)).await;

    assert!(matches!(first.push, PushOutcome::Failed(ref reason) if reason.contains("connection refused")));
    assert!(matches!(second.push, PushOutcome::Failed(_)));
    assert_eq!(gauges.get(GAUGE_DISK), Some(61.0));
    assert_eq!(publisher.push_count(), 2);
}
