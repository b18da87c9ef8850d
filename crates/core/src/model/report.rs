use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::lenient;

/// Aggregated statistics from `GET /reports/global`.
///
/// `summary` is optional on purpose: a bundle without it still decodes, and
/// consumers decide whether that is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ReportBundleWire")]
pub struct ReportBundle {
    pub summary: Option<ReportSummary>,
    #[serde(rename = "dailyTrend")]
    pub daily_trend: Vec<DailyTotal>,
    #[serde(rename = "groupPerformance")]
    pub group_performance: Vec<GroupPerformance>,
}

#[derive(Deserialize)]
struct ReportBundleWire {
    #[serde(default)]
    summary: Option<ReportSummary>,
    #[serde(default, rename = "dailyTrend")]
    daily_trend_camel: Option<Vec<DailyTotal>>,
    #[serde(default)]
    daily_trend: Option<Vec<DailyTotal>>,
    #[serde(default, rename = "groupPerformance")]
    group_performance_camel: Option<Vec<GroupPerformance>>,
    #[serde(default)]
    group_performance: Option<Vec<GroupPerformance>>,
}

impl From<ReportBundleWire> for ReportBundle {
    fn from(wire: ReportBundleWire) -> Self {
        Self {
            summary: wire.summary,
            daily_trend: wire
                .daily_trend_camel
                .or(wire.daily_trend)
                .unwrap_or_default(),
            group_performance: wire
                .group_performance_camel
                .or(wire.group_performance)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_instituciones: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub meta_estudiantes: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_entregado: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_voluntarios: u64,
}

/// Deliveries summed for one day.
///
/// `fecha` stays textual: the backend may send a date or a full timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub fecha: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total: u64,
}

impl DailyTotal {
    /// Calendar day of the entry, if the prefix is an ISO date.
    #[must_use]
    pub fn day(&self) -> Option<NaiveDate> {
        let prefix = self.fecha.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GroupPerformanceWire")]
pub struct GroupPerformance {
    pub nombre: String,
    pub total_entregado: u64,
}

#[derive(Deserialize)]
struct GroupPerformanceWire {
    nombre: String,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    total_entregado: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    entregado: Option<u64>,
}

impl From<GroupPerformanceWire> for GroupPerformance {
    fn from(wire: GroupPerformanceWire) -> Self {
        Self {
            nombre: wire.nombre,
            total_entregado: wire.total_entregado.or(wire.entregado).unwrap_or(0),
        }
    }
}
