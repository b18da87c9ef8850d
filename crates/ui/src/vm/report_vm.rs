use blitz_core::format::{format_count, format_percent};
use blitz_core::model::ReportBundle;
use blitz_core::progress::percentage;
use blitz_core::report::{ReportOptions, effective_target};

use crate::vm::chart_vm::{BarVm, ranking_bars, trend_bars};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KpiCardVm {
    pub label: &'static str,
    pub value: String,
}

/// Everything the statistics screen shows.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportOverviewVm {
    pub kpis: Vec<KpiCardVm>,
    pub volunteers: String,
    pub trend: Vec<BarVm>,
    pub ranking: Vec<BarVm>,
}

/// Build the overview, or `None` when the bundle has no summary.
#[must_use]
pub fn map_report_overview(
    bundle: &ReportBundle,
    options: ReportOptions,
) -> Option<ReportOverviewVm> {
    let summary = bundle.summary.as_ref()?;
    let target = effective_target(summary, options);

    let mut ranking: Vec<(String, u64)> = bundle
        .group_performance
        .iter()
        .map(|g| (g.nombre.clone(), g.total_entregado))
        .collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1));

    Some(ReportOverviewVm {
        kpis: vec![
            KpiCardVm {
                label: "Escuelas",
                value: format_count(summary.total_instituciones),
            },
            KpiCardVm {
                label: "Meta Global",
                value: format_count(target),
            },
            KpiCardVm {
                label: "Entregados",
                value: format_count(summary.total_entregado),
            },
            KpiCardVm {
                label: "Avance",
                value: format_percent(percentage(summary.total_entregado, target)),
            },
        ],
        volunteers: format_count(summary.total_voluntarios),
        trend: trend_bars(&bundle.daily_trend),
        ranking: ranking_bars(&ranking),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use blitz_core::model::{GroupPerformance, ReportSummary};

    fn bundle() -> ReportBundle {
        ReportBundle {
            summary: Some(ReportSummary {
                total_instituciones: 2,
                meta_estudiantes: 130,
                total_entregado: 50,
                total_voluntarios: 1_200,
            }),
            daily_trend: Vec::new(),
            group_performance: vec![
                GroupPerformance {
                    nombre: "Sur".into(),
                    total_entregado: 20,
                },
                GroupPerformance {
                    nombre: "Norte".into(),
                    total_entregado: 30,
                },
            ],
        }
    }

    #[test]
    fn overview_ranks_groups_and_formats_kpis() {
        let vm = map_report_overview(&bundle(), ReportOptions::default()).unwrap();
        assert_eq!(vm.kpis[3].value, "38.5%");
        assert_eq!(vm.volunteers, "1,200");
        assert_eq!(vm.ranking[0].label, "Norte");
        assert_eq!(vm.ranking[0].color, crate::vm::chart_vm::HIGHLIGHT);
    }

    #[test]
    fn no_summary_no_overview() {
        let mut b = bundle();
        b.summary = None;
        assert_eq!(map_report_overview(&b, ReportOptions::default()), None);
    }
}
