//! Tests for the synthetic history generators

use chrono::TimeDelta;
use foresight_application::{SyntheticHistoryGenerator, SyntheticPattern};
use foresight_domain::MetricKind;
use foresight_domain::value_objects::ValueBounds;

use crate::fakes::{at, five_minutes};

const ALL_KINDS: [MetricKind; 5] = [
    MetricKind::Cpu,
    MetricKind::Memory,
    MetricKind::Disk,
    MetricKind::Network,
    MetricKind::Other,
];

fn generator(pattern: SyntheticPattern, days: i64) -> SyntheticHistoryGenerator {
    SyntheticHistoryGenerator::new(pattern, TimeDelta::days(days), five_minutes()).with_seed(42)
}

fn default_bounds(kind: MetricKind) -> ValueBounds {
    match kind {
        MetricKind::Network => ValueBounds::non_negative(),
        _ => ValueBounds::percentage(),
    }
}

#[test]
fn test_two_day_window_has_577_evenly_spaced_samples() {
    let end = at(1_700_000_000);
    for pattern in [SyntheticPattern::Baseline, SyntheticPattern::Smart] {
        let generator = generator(pattern, 2);
        for kind in ALL_KINDS {
            let series = generator.generate(kind, &default_bounds(kind), end).unwrap();
            assert_eq!(series.len(), 577, "{pattern:?}/{kind}");
            assert_eq!(series.last_timestamp(), Some(end));
            assert!(
                series
                    .samples()
                    .windows(2)
                    .all(|pair| pair[1].timestamp - pair[0].timestamp == five_minutes()),
                "{pattern:?}/{kind} has a gap"
            );
        }
    }
}

#[test]
fn test_seven_day_window_length() {
    let series = generator(SyntheticPattern::Baseline, 7)
        .generate(MetricKind::Cpu, &default_bounds(MetricKind::Cpu), at(1_700_000_000))
        .unwrap();
    assert_eq!(series.len(), 7 * 288 + 1);
}

#[test]
fn test_smart_disk_ramp_is_monotonic_and_bounded() {
    let series = generator(SyntheticPattern::Smart, 2)
        .generate(MetricKind::Disk, &default_bounds(MetricKind::Disk), at(1_700_000_000))
        .unwrap();
    let values: Vec<f64> = series.values().collect();
    assert!(values.windows(2).all(|pair| pair[1] >= pair[0]));
    assert!(values.iter().all(|v| (40.0..=90.0).contains(v)));
    assert_eq!(values[0], 40.0);
}

#[test]
fn test_baseline_disk_ramp_spans_40_to_85() {
    let series = generator(SyntheticPattern::Baseline, 7)
        .generate(MetricKind::Disk, &default_bounds(MetricKind::Disk), at(1_700_000_000))
        .unwrap();
    let values: Vec<f64> = series.values().collect();
    assert!(values.windows(2).all(|pair| pair[1] >= pair[0]));
    assert_eq!(values[0], 40.0);
    assert!((values[values.len() - 1] - 85.0).abs() < 1e-9);
}

#[test]
fn test_baseline_cpu_stays_in_uniform_range() {
    let series = generator(SyntheticPattern::Baseline, 2)
        .generate(MetricKind::Cpu, &default_bounds(MetricKind::Cpu), at(1_700_000_000))
        .unwrap();
    assert!(series.values().all(|v| (10.0..60.0).contains(&v)));
}

#[test]
fn test_unknown_kind_covers_full_range() {
    for pattern in [SyntheticPattern::Baseline, SyntheticPattern::Smart] {
        let series = generator(pattern, 7)
            .generate(MetricKind::Other, &default_bounds(MetricKind::Other), at(1_700_000_000))
            .unwrap();
        assert!(series.values().all(|v| (0.0..100.0).contains(&v)));
    }
}

#[test]
fn test_unknown_kind_follows_configured_bounds() {
    let wide = ValueBounds::new(0.0, Some(1000.0)).unwrap();
    for pattern in [SyntheticPattern::Baseline, SyntheticPattern::Smart] {
        let series = generator(pattern, 7)
            .generate(MetricKind::Other, &wide, at(1_700_000_000))
            .unwrap();
        assert!(series.values().all(|v| (0.0..1000.0).contains(&v)));
        assert!(
            series.values().any(|v| v > 100.0),
            "{pattern:?} never left the percentage range"
        );
    }
}

#[test]
fn test_unknown_kind_without_upper_bound_starts_at_lower() {
    let bounds = ValueBounds::new(50.0, None).unwrap();
    let series = generator(SyntheticPattern::Baseline, 2)
        .generate(MetricKind::Other, &bounds, at(1_700_000_000))
        .unwrap();
    assert!(series.values().all(|v| (50.0..150.0).contains(&v)));
}

#[test]
fn test_network_baseline_is_non_negative() {
    let series = generator(SyntheticPattern::Baseline, 2)
        .generate(MetricKind::Network, &default_bounds(MetricKind::Network), at(1_700_000_000))
        .unwrap();
    assert!(series.values().all(|v| v >= 0.0));
}

#[test]
fn test_same_seed_same_history() {
    let end = at(1_700_000_000);
    let a = generator(SyntheticPattern::Smart, 2)
        .generate(MetricKind::Cpu, &default_bounds(MetricKind::Cpu), end)
        .unwrap();
    let b = generator(SyntheticPattern::Smart, 2)
        .generate(MetricKind::Cpu, &default_bounds(MetricKind::Cpu), end)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_lookback_shorter_than_step_fails() {
    let generator =
        SyntheticHistoryGenerator::new(SyntheticPattern::Smart, TimeDelta::minutes(1), five_minutes());
    assert!(generator.generate(MetricKind::Cpu, &default_bounds(MetricKind::Cpu), at(0)).is_err());
}
