//! Default metric catalogue
//!
//! Disk, CPU, memory and network of a host scraped by the Windows exporter.

use foresight_domain::constants::{GAUGE_CPU, GAUGE_DISK, GAUGE_MEMORY, GAUGE_NETWORK};
use foresight_domain::entities::{MetricKind, MetricSpec};
use foresight_domain::value_objects::ValueBounds;

use crate::constants::{
    BYTES_TO_MEGABYTES, QUERY_CPU_USAGE, QUERY_DISK_USAGE, QUERY_MEMORY_USAGE,
    QUERY_NETWORK_TRAFFIC,
};

/// The four published forecasts, in processing order
pub fn default_metric_specs() -> Vec<MetricSpec> {
    vec![
        MetricSpec::new(GAUGE_DISK, "Disk Usage", QUERY_DISK_USAGE, MetricKind::Disk)
            .with_help("Predicted Disk Usage %"),
        MetricSpec::new(GAUGE_CPU, "CPU Usage", QUERY_CPU_USAGE, MetricKind::Cpu)
            .with_help("Predicted CPU Usage %"),
        MetricSpec::new(
            GAUGE_MEMORY,
            "Memory Usage",
            QUERY_MEMORY_USAGE,
            MetricKind::Memory,
        )
        .with_help("Predicted Memory Usage %"),
        MetricSpec::new(
            GAUGE_NETWORK,
            "Network Traffic",
            QUERY_NETWORK_TRAFFIC,
            MetricKind::Network,
        )
        .with_help("Predicted Network Traffic (MB/s)")
        .with_unit_conversion(BYTES_TO_MEGABYTES)
        .with_bounds(ValueBounds::non_negative()),
    ]
}
