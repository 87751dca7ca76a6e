//! Unit tests for the gauge set

use foresight_domain::{GaugeSet, MetricKind, MetricSpec, GAUGE_CPU, GAUGE_DISK};

fn specs() -> Vec<MetricSpec> {
    vec![
        MetricSpec::new(GAUGE_DISK, "Disk Usage", "disk_query", MetricKind::Disk),
        MetricSpec::new(GAUGE_CPU, "CPU Usage", "cpu_query", MetricKind::Cpu),
    ]
}

#[test]
fn test_declared_gauges_start_unset() {
    let gauges = GaugeSet::from_specs(&specs());
    assert_eq!(gauges.len(), 2);
    assert!(gauges.contains(GAUGE_DISK));
    assert_eq!(gauges.get(GAUGE_DISK), None);
}

#[test]
fn test_set_replaces_previous_value() {
    let mut gauges = GaugeSet::from_specs(&specs());
    gauges.set(GAUGE_CPU, 12.0).unwrap();
    gauges.set(GAUGE_CPU, 34.0).unwrap();
    assert_eq!(gauges.get(GAUGE_CPU), Some(34.0));
    assert_eq!(gauges.get(GAUGE_DISK), None);
}

#[test]
fn test_set_undeclared_gauge_fails() {
    let mut gauges = GaugeSet::new();
    assert!(gauges.set("missing", 1.0).is_err());
}

#[test]
fn test_redeclare_keeps_value() {
    let mut gauges = GaugeSet::from_specs(&specs());
    gauges.set(GAUGE_DISK, 55.0).unwrap();
    gauges.declare(GAUGE_DISK, "new help");
    assert_eq!(gauges.get(GAUGE_DISK), Some(55.0));
    let (_, entry) = gauges.iter().find(|(name, _)| *name == GAUGE_DISK).unwrap();
    assert_eq!(entry.help, "new help");
}

#[test]
fn test_iteration_is_name_ordered() {
    let gauges = GaugeSet::from_specs(&specs());
    let names: Vec<&str> = gauges.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec![GAUGE_CPU, GAUGE_DISK]);
}
