//! Chart shaping. Views draw bars from these values with plain CSS.

use blitz_core::format::format_count;
use blitz_core::model::{DailyTotal, GroupDelivery, Institution, ProgressSnapshot};
use blitz_core::progress::remaining;

/// Per-group series colors, cycled by index.
pub const PALETTE: [&str; 5] = ["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6"];
pub const MUTED: &str = "#e5e7eb";
pub const HIGHLIGHT: &str = "#4f46e5";

#[derive(Clone, Debug, PartialEq)]
pub struct BarVm {
    pub label: String,
    pub value: String,
    /// Bar length relative to the largest bar, 0–100.
    pub fill_pct: f64,
    pub color: &'static str,
}

/// Institution row for the "population vs delivered" chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PairedBarVm {
    pub label: String,
    pub target: u64,
    pub delivered: u64,
    pub target_pct: f64,
    pub delivered_pct: f64,
}

#[allow(clippy::cast_precision_loss)]
fn scale(value: u64, max: u64) -> f64 {
    if max == 0 {
        0.0
    } else {
        value as f64 / max as f64 * 100.0
    }
}

/// Delivered vs remaining toward the global goal.
#[must_use]
pub fn progress_bars(progress: &ProgressSnapshot) -> Vec<BarVm> {
    let missing = remaining(progress);
    let max = progress.entregado.max(missing);
    vec![
        BarVm {
            label: "Entregado".into(),
            value: format_count(progress.entregado),
            fill_pct: scale(progress.entregado, max),
            color: PALETTE[0],
        },
        BarVm {
            label: "Faltante".into(),
            value: format_count(missing),
            fill_pct: scale(missing, max),
            color: MUTED,
        },
    ]
}

#[must_use]
pub fn group_bars(groups: &[GroupDelivery]) -> Vec<BarVm> {
    let max = groups.iter().map(|g| g.entregado).max().unwrap_or(0);
    groups
        .iter()
        .enumerate()
        .map(|(i, g)| BarVm {
            label: g.grupo.clone(),
            value: format_count(g.entregado),
            fill_pct: scale(g.entregado, max),
            color: PALETTE[i % PALETTE.len()],
        })
        .collect()
}

/// Daily delivery flow, labelled `dd/mm` when the date parses.
#[must_use]
pub fn trend_bars(trend: &[DailyTotal]) -> Vec<BarVm> {
    let max = trend.iter().map(|d| d.total).max().unwrap_or(0);
    trend
        .iter()
        .map(|d| BarVm {
            label: d
                .day()
                .map_or_else(|| d.fecha.clone(), |day| day.format("%d/%m").to_string()),
            value: format_count(d.total),
            fill_pct: scale(d.total, max),
            color: HIGHLIGHT,
        })
        .collect()
}

/// Ranking bars; the leader is highlighted, the rest muted.
#[must_use]
pub fn ranking_bars(ranking: &[(String, u64)]) -> Vec<BarVm> {
    let max = ranking.iter().map(|(_, v)| *v).max().unwrap_or(0);
    ranking
        .iter()
        .enumerate()
        .map(|(i, (label, value))| BarVm {
            label: label.clone(),
            value: format_count(*value),
            fill_pct: scale(*value, max),
            color: if i == 0 { HIGHLIGHT } else { MUTED },
        })
        .collect()
}

#[must_use]
pub fn institution_bars(institutions: &[Institution]) -> Vec<PairedBarVm> {
    let max = institutions
        .iter()
        .map(|i| i.target().max(i.delivered()))
        .max()
        .unwrap_or(0);
    institutions
        .iter()
        .map(|i| PairedBarVm {
            label: i.nombre.clone(),
            target: i.target(),
            delivered: i.delivered(),
            target_pct: scale(i.target(), max),
            delivered_pct: scale(i.delivered(), max),
        })
        .collect()
}
