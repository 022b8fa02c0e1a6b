//! Counters and histograms for the lookup workflow.
//!
//! Recording goes through the `metrics` facade, so every call is a no-op
//! until [`init`] installs a Prometheus recorder.

use std::fmt;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

use crate::error::{IndicatorError, Result};

/// All metric names used in the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Catalog metrics
    CatalogLookupsFound,
    CatalogLookupsNotFound,
    CatalogLookupsError,
    CatalogFetchDuration,
    CatalogRecordsScanned,

    // SIMBAD metrics
    SimbadResolved,
    SimbadUnresolved,
    SimbadError,

    // Aggregation metrics
    AggregateRuns,
    AggregateHipShortCircuit,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::CatalogLookupsFound => "youth_catalog_lookups_found_total",
            MetricName::CatalogLookupsNotFound => "youth_catalog_lookups_not_found_total",
            MetricName::CatalogLookupsError => "youth_catalog_lookups_error_total",
            MetricName::CatalogFetchDuration => "youth_catalog_fetch_duration_seconds",
            MetricName::CatalogRecordsScanned => "youth_catalog_records_scanned",

            MetricName::SimbadResolved => "youth_simbad_resolved_total",
            MetricName::SimbadUnresolved => "youth_simbad_unresolved_total",
            MetricName::SimbadError => "youth_simbad_error_total",

            MetricName::AggregateRuns => "youth_aggregate_runs_total",
            MetricName::AggregateHipShortCircuit => "youth_aggregate_hip_short_circuit_total",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [
            CatalogLookupsFound,
            CatalogLookupsNotFound,
            CatalogLookupsError,
            CatalogFetchDuration,
            CatalogRecordsScanned,
            SimbadResolved,
            SimbadUnresolved,
            SimbadError,
            AggregateRuns,
            AggregateHipShortCircuit,
        ]
        .into_iter()
    }

    pub fn is_histogram(&self) -> bool {
        matches!(
            self,
            MetricName::CatalogFetchDuration | MetricName::CatalogRecordsScanned
        )
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Install the Prometheus recorder and pre-register every metric so they all
/// show up in the rendered output, even before first use.
pub fn init() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| IndicatorError::Config(format!("Failed to install Prometheus recorder: {}", e)))?;

    for name in MetricName::all_metrics() {
        if name.is_histogram() {
            let _ = ::metrics::histogram!(name.as_str());
        } else {
            let _ = ::metrics::counter!(name.as_str());
        }
    }

    info!("Metrics system initialized");
    Ok(handle)
}

pub mod catalog {
    use super::MetricName;

    pub fn lookup_found() {
        ::metrics::counter!(MetricName::CatalogLookupsFound.as_str()).increment(1);
    }

    pub fn lookup_not_found() {
        ::metrics::counter!(MetricName::CatalogLookupsNotFound.as_str()).increment(1);
    }

    pub fn lookup_error(kind: &'static str) {
        ::metrics::counter!(MetricName::CatalogLookupsError.as_str(), "kind" => kind).increment(1);
    }

    pub fn fetch_duration(duration_secs: f64) {
        ::metrics::histogram!(MetricName::CatalogFetchDuration.as_str()).record(duration_secs);
    }

    pub fn records_scanned(count: usize) {
        ::metrics::histogram!(MetricName::CatalogRecordsScanned.as_str()).record(count as f64);
    }
}

pub mod simbad {
    use super::MetricName;

    pub fn resolved() {
        ::metrics::counter!(MetricName::SimbadResolved.as_str()).increment(1);
    }

    pub fn unresolved() {
        ::metrics::counter!(MetricName::SimbadUnresolved.as_str()).increment(1);
    }

    pub fn error(kind: &'static str) {
        ::metrics::counter!(MetricName::SimbadError.as_str(), "kind" => kind).increment(1);
    }
}

pub mod aggregate {
    use super::MetricName;

    pub fn run() {
        ::metrics::counter!(MetricName::AggregateRuns.as_str()).increment(1);
    }

    pub fn hip_short_circuit() {
        ::metrics::counter!(MetricName::AggregateHipShortCircuit.as_str()).increment(1);
    }
}
