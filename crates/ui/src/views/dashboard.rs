use blitz_core::format::{format_count, format_percent};
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::components::{BarList, ErrorPanel, KpiCard};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{BarVm, group_bars, progress_bars};

#[derive(Clone, Debug, PartialEq)]
struct DashboardVm {
    delivered: String,
    target: String,
    percentage: String,
    progress: Vec<BarVm>,
    groups: Vec<BarVm>,
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.dashboard();

    let mut resource = use_resource(move || {
        let dashboard = dashboard.clone();
        async move {
            let data = dashboard.load().await.map_err(|_| ViewError::Unknown)?;
            Ok(DashboardVm {
                delivered: format_count(data.progress.entregado),
                target: format_count(data.progress.meta),
                percentage: format_percent(data.progress.porcentaje),
                progress: progress_bars(&data.progress),
                groups: group_bars(&data.groups),
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Dashboard Blitz" }
                span { class: "badge", "Admin Mode" }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Cargando Dashboard..." }
                },
                ViewState::Ready(vm) => rsx! {
                    div { class: "kpi-grid",
                        KpiCard { label: "Total Entregado", value: vm.delivered }
                        KpiCard { label: "Meta Global", value: vm.target }
                        KpiCard { label: "% Avance", value: vm.percentage }
                    }
                    div { class: "chart-grid",
                        section { class: "chart-card",
                            h3 { "Progreso Global" }
                            BarList { bars: vm.progress }
                        }
                        section { class: "chart-card",
                            h3 { "Entregas por Grupo" }
                            if vm.groups.is_empty() {
                                p { class: "empty", "Aún no hay entregas registradas." }
                            } else {
                                BarList { bars: vm.groups }
                            }
                        }
                    }
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
