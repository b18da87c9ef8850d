use blitz_core::model::ReportBundle;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::components::{BarList, ErrorPanel, KpiCard, Notice};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{failure_notice, map_report_overview};

const MISSING_SUMMARY: &str = "El servidor no devolvió el resumen de estadísticas.";

#[component]
pub fn ReportsView() -> Element {
    let ctx = use_context::<AppContext>();
    let reports = ctx.reports();

    let mut resource = use_resource({
        let reports = reports.clone();
        move || {
            let reports = reports.clone();
            async move { reports.fetch().await.map_err(|_| ViewError::Unknown) }
        }
    });
    let mut notice = use_signal(|| None::<String>);

    let on_export = {
        let reports = reports.clone();
        use_callback(move |bundle: ReportBundle| {
            let mut notice = notice;
            let message = match reports.export(Some(&bundle), reports.output_dir()) {
                Ok(path) => format!("Reporte guardado en {}", path.display()),
                Err(err) => failure_notice(&err).to_string(),
            };
            notice.set(Some(message));
        })
    };

    let state = view_state_from_resource(resource);
    let options = reports.options();

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Estadísticas Globales" }
            }

            if let Some(message) = notice() {
                Notice { message, on_dismiss: move |()| notice.set(None) }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Cargando estadísticas..." }
                },
                ViewState::Ready(bundle) => match map_report_overview(&bundle, options) {
                    Some(overview) => rsx! {
                        div { class: "page-actions",
                            button {
                                class: "primary",
                                r#type: "button",
                                onclick: move |_| on_export.call(bundle.clone()),
                                "EXPORTAR PDF"
                            }
                        }
                        div { class: "kpi-grid",
                            for kpi in overview.kpis {
                                KpiCard { key: "{kpi.label}", label: kpi.label, value: kpi.value }
                            }
                        }
                        div { class: "chart-grid",
                            section { class: "chart-card",
                                h3 { "Flujo de Entregas" }
                                if overview.trend.is_empty() {
                                    p { class: "empty", "Sin entregas registradas." }
                                } else {
                                    BarList { bars: overview.trend }
                                }
                            }
                            section { class: "chart-card",
                                h3 { "Ranking por Grupo" }
                                if overview.ranking.is_empty() {
                                    p { class: "empty", "Sin grupos con entregas." }
                                } else {
                                    BarList { bars: overview.ranking }
                                }
                            }
                        }
                        section { class: "kpi-card kpi-card--wide",
                            p { class: "kpi-label", "Voluntarios Activos" }
                            p { class: "kpi-value", "{overview.volunteers}" }
                        }
                    },
                    None => rsx! {
                        ErrorPanel {
                            message: MISSING_SUMMARY,
                            on_retry: move |()| resource.restart(),
                        }
                    },
                },
                ViewState::Error(err) => rsx! {
                    ErrorPanel {
                        message: err.message(),
                        on_retry: move |()| resource.restart(),
                    }
                },
            }
        }
    }
}
