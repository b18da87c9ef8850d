use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::BarVm;

#[component]
pub fn KpiCard(#[props(into)] label: String, #[props(into)] value: String) -> Element {
    rsx! {
        div { class: "kpi-card",
            p { class: "kpi-label", "{label}" }
            p { class: "kpi-value", "{value}" }
        }
    }
}

/// Horizontal bars with their value at the end.
#[component]
pub fn BarList(bars: Vec<BarVm>) -> Element {
    rsx! {
        ul { class: "bar-list",
            for bar in bars {
                li { class: "bar-row",
                    span { class: "bar-label", "{bar.label}" }
                    span { class: "bar-track",
                        span {
                            class: "bar-fill",
                            style: "width: {bar.fill_pct:.1}%; background: {bar.color};",
                        }
                    }
                    span { class: "bar-value", "{bar.value}" }
                }
            }
        }
    }
}

#[component]
pub fn ConfirmDialog(
    #[props(into)] prompt: String,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog",
                p { "{prompt}" }
                div { class: "modal-actions",
                    button { class: "secondary", onclick: move |_| on_cancel.call(()), "Cancelar" }
                    button { class: "danger", onclick: move |_| on_confirm.call(()), "Eliminar" }
                }
            }
        }
    }
}

#[component]
pub fn Notice(#[props(into)] message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "notice", role: "status",
            span { "{message}" }
            button { class: "link", onclick: move |_| on_dismiss.call(()), "Cerrar" }
        }
    }
}

#[component]
pub fn ErrorPanel(#[props(into)] message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "error-panel",
            h3 { "Error de conexión" }
            p { "{message}" }
            if let Some(retry) = on_retry {
                button { onclick: move |_| retry.call(()), "Reintentar Conexión" }
            }
        }
    }
}

/// Link that leaves the app and opens in the system browser.
#[component]
pub fn ExternalLink(
    #[props(into)] href: String,
    #[props(into)] label: String,
    #[props(into, default)] class: String,
) -> Element {
    let links = use_context::<AppContext>().links();
    let url = href.clone();
    rsx! {
        a {
            class: "external-link {class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                links.open_url(&url);
            },
            "{label}"
        }
    }
}
