use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::components::{ErrorPanel, ExternalLink};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{MarkerVm, VIEW_HEIGHT, VIEW_WIDTH, legend_counts, project_markers};

#[derive(Clone, Debug, PartialEq)]
struct MapVm {
    markers: Vec<MarkerVm>,
    delivered: usize,
    pending: usize,
}

#[component]
pub fn MapView() -> Element {
    let ctx = use_context::<AppContext>();
    let map = ctx.map();

    let mut resource = use_resource(move || {
        let map = map.clone();
        async move {
            let points = map.points().await.map_err(|_| ViewError::Unknown)?;
            let [(_, delivered), (_, pending)] = legend_counts(&points);
            Ok(MapVm {
                markers: project_markers(&points),
                delivered,
                pending,
            })
        }
    });
    let mut selected = use_signal(|| None::<MarkerVm>);

    let state = view_state_from_resource(resource);
    let view_box = format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}");

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Mapa en Tiempo Real" }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Cargando mapa..." }
                },
                ViewState::Ready(vm) => rsx! {
                    div { class: "map-legend",
                        span { class: "legend-item legend-item--delivered",
                            "Entregados: {vm.delivered}"
                        }
                        span { class: "legend-item legend-item--pending",
                            "Pendientes: {vm.pending}"
                        }
                    }
                    if vm.markers.is_empty() {
                        p { class: "empty", "No hay ubicaciones registradas." }
                    } else {
                        svg {
                            class: "map-canvas",
                            "viewBox": "{view_box}",
                            rect {
                                class: "map-background",
                                width: "{VIEW_WIDTH}",
                                height: "{VIEW_HEIGHT}",
                            }
                            for marker in vm.markers.clone() {
                                circle {
                                    key: "{marker.id}",
                                    class: "marker marker--{marker.class}",
                                    cx: "{marker.x:.1}",
                                    cy: "{marker.y:.1}",
                                    r: "8",
                                    onclick: {
                                        let marker = marker.clone();
                                        move |_| selected.set(Some(marker.clone()))
                                    },
                                }
                            }
                        }
                    }
                    if let Some(marker) = selected() {
                        div { class: "marker-popup",
                            p { class: "institution-name", "{marker.nombre}" }
                            p { class: "muted", "Grupo: {marker.grupo}" }
                            span { class: "status status--{marker.class}", "{marker.status}" }
                            if let Some(url) = marker.maps_url.clone() {
                                ExternalLink { href: url, label: "Abrir en Maps" }
                            }
                            button {
                                class: "link",
                                r#type: "button",
                                onclick: move |_| selected.set(None),
                                "Cerrar"
                            }
                        }
                    }
                    ul { class: "point-list",
                        for marker in vm.markers {
                            li { key: "{marker.id}", class: "point-row",
                                span { class: "dot dot--{marker.class}" }
                                span { "{marker.nombre}" }
                                span { class: "muted", "{marker.grupo}" }
                                span { class: "status status--{marker.class}", "{marker.status}" }
                                if let Some(url) = marker.maps_url.clone() {
                                    ExternalLink { href: url, label: "Abrir en Maps" }
                                }
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
