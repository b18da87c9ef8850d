use blitz_core::model::Group;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::{ConfirmDialog, ErrorPanel, Notice};
use crate::views::{Refreshed, ViewError, ViewState, delete_target, view_state_with_latest};
use crate::vm::{DeleteConfirmation, DeleteTarget, DialogChoice, failure_notice};

#[component]
pub fn GroupsView() -> Element {
    let ctx = use_context::<AppContext>();
    let groups = ctx.groups();

    let mut resource = use_resource({
        let groups = groups.clone();
        move || {
            let groups = groups.clone();
            async move { groups.list().await.map_err(|_| ViewError::Unknown) }
        }
    });
    let latest = use_signal(|| None::<Vec<Group>>);
    let mut nombre = use_signal(String::new);
    let mut lider = use_signal(String::new);
    let saving = use_signal(|| false);
    let mut notice = use_signal(|| None::<String>);
    let mut confirmation = use_signal(DeleteConfirmation::default);

    let on_create = {
        let groups = groups.clone();
        use_callback(move |()| {
            let groups = groups.clone();
            let mut latest = latest;
            let mut saving = saving;
            let mut notice = notice;
            let mut nombre = nombre;
            let mut lider = lider;
            let nombre_value = nombre();
            let lider_value = lider();
            spawn(async move {
                saving.set(true);
                match groups.create(&nombre_value, &lider_value).await {
                    Ok(list) => {
                        latest.set(Some(list));
                        nombre.set(String::new());
                        lider.set(String::new());
                        notice.set(None);
                    }
                    Err(err) => notice.set(Some(failure_notice(&err).to_string())),
                }
                saving.set(false);
            });
        })
    };

    let on_resolve_delete = {
        let ctx = ctx.clone();
        use_callback(move |choice: DialogChoice| {
            let Some(target) = confirmation.write().resolve(choice) else {
                return;
            };
            let ctx = ctx.clone();
            let mut latest = latest;
            let mut notice = notice;
            spawn(async move {
                match delete_target(&ctx, target, None).await {
                    Ok(Refreshed::Groups(list)) => latest.set(Some(list)),
                    Ok(_) => {}
                    Err(message) => notice.set(Some(message.to_string())),
                }
            });
        })
    };

    let state = view_state_with_latest(latest(), resource);
    let pending_prompt = confirmation.read().pending().map(DeleteTarget::prompt);

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Grupos e Instituciones" }
            }

            if let Some(message) = notice() {
                Notice { message, on_dismiss: move |()| notice.set(None) }
            }

            section { class: "form-card",
                h3 { "Nuevo grupo" }
                div { class: "form-row",
                    input {
                        r#type: "text",
                        placeholder: "Nombre del grupo",
                        value: "{nombre}",
                        oninput: move |evt| nombre.set(evt.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Líder (opcional)",
                        value: "{lider}",
                        oninput: move |evt| lider.set(evt.value()),
                    }
                    button {
                        class: "primary",
                        r#type: "button",
                        disabled: saving(),
                        onclick: move |_| on_create.call(()),
                        "Crear grupo"
                    }
                }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Cargando grupos..." }
                },
                ViewState::Ready(list) => rsx! {
                    if list.is_empty() {
                        p { class: "empty", "Todavía no hay grupos registrados." }
                    } else {
                        ul { class: "group-list",
                            for group in list {
                                GroupRow {
                                    key: "{group.id}",
                                    group: group.clone(),
                                    on_delete: move |target| confirmation.write().request(target),
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

            if let Some(prompt) = pending_prompt {
                ConfirmDialog {
                    prompt,
                    on_cancel: move |()| on_resolve_delete.call(DialogChoice::Cancel),
                    on_confirm: move |()| on_resolve_delete.call(DialogChoice::Confirm),
                }
            }
        }
    }
}

#[component]
fn GroupRow(group: Group, on_delete: EventHandler<DeleteTarget>) -> Element {
    let target = DeleteTarget::group(&group);
    let group_id = group.id.to_string();
    rsx! {
        li { class: "group-row",
            div { class: "group-info",
                Link { class: "group-link", to: Route::GroupDetail { group_id },
                    "{group.nombre}"
                }
                span { class: "muted", "Líder: {group.leader_label()}" }
            }
            button {
                class: "danger",
                r#type: "button",
                onclick: move |_| on_delete.call(target.clone()),
                "Eliminar"
            }
        }
    }
}
