use blitz_core::model::{GroupId, Institution, InstitutionForm, InstitutionId, Jornada, Member};
use dioxus::prelude::*;
use dioxus_router::Link;
use services::load_group_workspace;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::{ConfirmDialog, ErrorPanel, ExternalLink, Notice};
use crate::views::{Refreshed, ViewError, ViewState, delete_target, view_state_from_resource};
use crate::vm::{
    DeleteConfirmation, DeleteTarget, DialogChoice, InstitutionRowVm, PairedBarVm, failure_notice,
    institution_bars, map_institution_rows, map_totals,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DetailTab {
    Institutions,
    Team,
}

/// Both halves of the screen. A failure in one leaves the other usable.
#[derive(Clone, Debug, PartialEq)]
struct WorkspaceData {
    institutions: Result<Vec<Institution>, ViewError>,
    members: Result<Vec<Member>, ViewError>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct DeliveryTarget {
    id: InstitutionId,
    nombre: String,
}

fn half<T: Clone>(
    latest: Option<T>,
    loaded: &ViewState<WorkspaceData>,
    pick: impl Fn(&WorkspaceData) -> &Result<T, ViewError>,
) -> ViewState<T> {
    if let Some(data) = latest {
        return ViewState::Ready(data);
    }
    match loaded {
        ViewState::Idle => ViewState::Idle,
        ViewState::Loading => ViewState::Loading,
        ViewState::Ready(workspace) => match pick(workspace) {
            Ok(data) => ViewState::Ready(data.clone()),
            Err(err) => ViewState::Error(*err),
        },
        ViewState::Error(err) => ViewState::Error(*err),
    }
}

#[component]
pub fn GroupDetailView(group_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let institutions = ctx.institutions();
    let members = ctx.members();
    let deliveries = ctx.deliveries();
    let group = GroupId::new(group_id.clone());

    let mut workspace = use_resource({
        let institutions = institutions.clone();
        let members = members.clone();
        use_reactive((&group_id,), move |(group_id,)| {
            let institutions = institutions.clone();
            let members = members.clone();
            async move {
                let group = GroupId::new(group_id);
                let loaded = load_group_workspace(&institutions, &members, &group).await;
                Ok::<_, ViewError>(WorkspaceData {
                    institutions: loaded.institutions.map_err(|_| ViewError::Unknown),
                    members: loaded.members.map_err(|_| ViewError::Unknown),
                })
            }
        })
    });

    let mut tab = use_signal(|| DetailTab::Institutions);
    let latest_institutions = use_signal(|| None::<Vec<Institution>>);
    let latest_members = use_signal(|| None::<Vec<Member>>);
    let mut notice = use_signal(|| None::<String>);
    let mut confirmation = use_signal(DeleteConfirmation::default);

    let mut form = use_signal(InstitutionForm::default);
    let mut editing = use_signal(|| None::<InstitutionId>);
    let mut delivery_target = use_signal(|| None::<DeliveryTarget>);
    let mut cantidad = use_signal(String::new);
    let mut fecha = use_signal(String::new);
    let mut member_nombre = use_signal(String::new);
    let mut member_telefono = use_signal(String::new);

    let on_save_institution = {
        let institutions = institutions.clone();
        let group = group.clone();
        use_callback(move |()| {
            let institutions = institutions.clone();
            let group = group.clone();
            let mut latest = latest_institutions;
            let mut notice = notice;
            let mut form = form;
            let mut editing = editing;
            let form_value = form();
            let editing_id = editing();
            spawn(async move {
                let result = match &editing_id {
                    Some(id) => institutions.update(id, &form_value, &group).await,
                    None => institutions.create(&form_value, &group).await,
                };
                match result {
                    Ok(list) => {
                        latest.set(Some(list));
                        form.set(InstitutionForm::default());
                        editing.set(None);
                        notice.set(None);
                    }
                    Err(err) => notice.set(Some(failure_notice(&err).to_string())),
                }
            });
        })
    };

    let on_record_delivery = {
        let deliveries = deliveries.clone();
        let group = group.clone();
        use_callback(move |()| {
            let Some(target) = delivery_target() else {
                return;
            };
            let deliveries = deliveries.clone();
            let group = group.clone();
            let mut latest = latest_institutions;
            let mut notice = notice;
            let mut delivery_target = delivery_target;
            let cantidad_value = cantidad();
            let fecha_value = fecha();
            spawn(async move {
                match deliveries
                    .record(&cantidad_value, &fecha_value, &target.id, &group)
                    .await
                {
                    Ok(list) => {
                        latest.set(Some(list));
                        delivery_target.set(None);
                        notice.set(None);
                    }
                    Err(err) => notice.set(Some(failure_notice(&err).to_string())),
                }
            });
        })
    };

    let on_add_member = {
        let members = members.clone();
        let group = group.clone();
        use_callback(move |()| {
            let members = members.clone();
            let group = group.clone();
            let mut latest = latest_members;
            let mut notice = notice;
            let mut member_nombre = member_nombre;
            let mut member_telefono = member_telefono;
            let nombre_value = member_nombre();
            let telefono_value = member_telefono();
            spawn(async move {
                match members.create(&nombre_value, &telefono_value, &group).await {
                    Ok(list) => {
                        latest.set(Some(list));
                        member_nombre.set(String::new());
                        member_telefono.set(String::new());
                        notice.set(None);
                    }
                    Err(err) => notice.set(Some(failure_notice(&err).to_string())),
                }
            });
        })
    };

    let on_resolve_delete = {
        let ctx = ctx.clone();
        let group = group.clone();
        use_callback(move |choice: DialogChoice| {
            let Some(target) = confirmation.write().resolve(choice) else {
                return;
            };
            let ctx = ctx.clone();
            let group = group.clone();
            let mut latest_institutions = latest_institutions;
            let mut latest_members = latest_members;
            let mut notice = notice;
            spawn(async move {
                match delete_target(&ctx, target, Some(&group)).await {
                    Ok(Refreshed::Institutions(list)) => latest_institutions.set(Some(list)),
                    Ok(Refreshed::Members(list)) => latest_members.set(Some(list)),
                    Ok(Refreshed::Groups(_)) => {}
                    Err(message) => notice.set(Some(message.to_string())),
                }
            });
        })
    };

    let on_edit = move |institution: Institution| {
        form.set(InstitutionForm::from_institution(&institution));
        editing.set(Some(institution.id));
        tab.set(DetailTab::Institutions);
    };

    let default_date = deliveries.default_date();
    let on_open_delivery = move |institution: Institution| {
        cantidad.set(String::new());
        fecha.set(default_date.clone());
        delivery_target.set(Some(DeliveryTarget {
            id: institution.id,
            nombre: institution.nombre,
        }));
    };

    let loaded = view_state_from_resource(workspace);
    let institutions_state = half(latest_institutions(), &loaded, |w| &w.institutions);
    let members_state = half(latest_members(), &loaded, |w| &w.members);
    let pending_prompt = confirmation.read().pending().map(DeleteTarget::prompt);
    let form_value = form();
    let is_editing = editing().is_some();

    rsx! {
        div { class: "page",
            header { class: "page-header",
                Link { class: "back-link", to: Route::Groups {}, "← Volver a grupos" }
                h2 { "Detalle del grupo" }
            }

            if let Some(message) = notice() {
                Notice { message, on_dismiss: move |()| notice.set(None) }
            }

            nav { class: "tabs",
                button {
                    class: if tab() == DetailTab::Institutions { "tab tab--active" } else { "tab" },
                    r#type: "button",
                    onclick: move |_| tab.set(DetailTab::Institutions),
                    "Instituciones"
                }
                button {
                    class: if tab() == DetailTab::Team { "tab tab--active" } else { "tab" },
                    r#type: "button",
                    onclick: move |_| tab.set(DetailTab::Team),
                    "Equipo"
                }
            }

            if tab() == DetailTab::Institutions {
                section { class: "form-card",
                    h3 { if is_editing { "Editar institución" } else { "Nueva institución" } }
                    div { class: "form-grid",
                        input {
                            r#type: "text",
                            placeholder: "Nombre",
                            value: "{form_value.nombre}",
                            oninput: move |evt| form.write().nombre = evt.value(),
                        }
                        input {
                            r#type: "text",
                            placeholder: "Dirección",
                            value: "{form_value.direccion}",
                            oninput: move |evt| form.write().direccion = evt.value(),
                        }
                        select {
                            value: form_value.jornada.wire(),
                            onchange: move |evt| form.write().jornada = Jornada::from_wire(&evt.value()),
                            for jornada in Jornada::ALL {
                                option { value: jornada.wire(), "{jornada.label()}" }
                            }
                        }
                        input {
                            r#type: "number",
                            min: "0",
                            placeholder: "Estudiantes",
                            value: "{form_value.estudiantes}",
                            oninput: move |evt| form.write().estudiantes = evt.value(),
                        }
                        input {
                            r#type: "url",
                            placeholder: "Enlace de Google Maps",
                            value: "{form_value.maps_url}",
                            oninput: move |evt| form.write().maps_url = evt.value(),
                        }
                    }
                    div { class: "form-actions",
                        button {
                            class: "primary",
                            r#type: "button",
                            onclick: move |_| on_save_institution.call(()),
                            if is_editing { "Guardar cambios" } else { "Agregar institución" }
                        }
                        if is_editing {
                            button {
                                class: "secondary",
                                r#type: "button",
                                onclick: move |_| {
                                    form.set(InstitutionForm::default());
                                    editing.set(None);
                                },
                                "Cancelar edición"
                            }
                        }
                    }
                }

                match institutions_state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { class: "loading", "Cargando instituciones..." }
                    },
                    ViewState::Ready(list) => rsx! {
                        InstitutionsPanel {
                            institutions: list,
                            on_edit,
                            on_deliver: on_open_delivery,
                            on_delete: move |target| confirmation.write().request(target),
                        }
                    },
                    ViewState::Error(err) => rsx! {
                        ErrorPanel {
                            message: err.message(),
                            on_retry: move |()| workspace.restart(),
                        }
                    },
                }
            } else {
                section { class: "form-card",
                    h3 { "Agregar miembro" }
                    div { class: "form-row",
                        input {
                            r#type: "text",
                            placeholder: "Nombre",
                            value: "{member_nombre}",
                            oninput: move |evt| member_nombre.set(evt.value()),
                        }
                        input {
                            r#type: "tel",
                            placeholder: "Teléfono",
                            value: "{member_telefono}",
                            oninput: move |evt| member_telefono.set(evt.value()),
                        }
                        button {
                            class: "primary",
                            r#type: "button",
                            onclick: move |_| on_add_member.call(()),
                            "Agregar"
                        }
                    }
                }

                match members_state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { class: "loading", "Cargando equipo..." }
                    },
                    ViewState::Ready(list) => rsx! {
                        if list.is_empty() {
                            p { class: "empty", "Este grupo aún no tiene miembros." }
                        } else {
                            ul { class: "member-list",
                                for member in list {
                                    MemberRow {
                                        key: "{member.id}",
                                        member: member.clone(),
                                        on_delete: move |target| confirmation.write().request(target),
                                    }
                                }
                            }
                        }
                    },
                    ViewState::Error(err) => rsx! {
                        ErrorPanel {
                            message: err.message(),
                            on_retry: move |()| workspace.restart(),
                        }
                    },
                }
            }

            if let Some(target) = delivery_target() {
                div { class: "modal-backdrop",
                    div { class: "modal", role: "dialog",
                        h3 { "Registrar entrega" }
                        p { class: "muted", "{target.nombre}" }
                        label { "Cantidad"
                            input {
                                r#type: "number",
                                min: "1",
                                value: "{cantidad}",
                                oninput: move |evt| cantidad.set(evt.value()),
                            }
                        }
                        label { "Fecha"
                            input {
                                r#type: "date",
                                value: "{fecha}",
                                oninput: move |evt| fecha.set(evt.value()),
                            }
                        }
                        div { class: "modal-actions",
                            button {
                                class: "secondary",
                                r#type: "button",
                                onclick: move |_| delivery_target.set(None),
                                "Cancelar"
                            }
                            button {
                                class: "primary",
                                r#type: "button",
                                onclick: move |_| on_record_delivery.call(()),
                                "Registrar"
                            }
                        }
                    }
                }
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
fn InstitutionsPanel(
    institutions: Vec<Institution>,
    on_edit: EventHandler<Institution>,
    on_deliver: EventHandler<Institution>,
    on_delete: EventHandler<DeleteTarget>,
) -> Element {
    let totals = map_totals(&institutions);
    let bars = institution_bars(&institutions);
    let rows: Vec<(Institution, InstitutionRowVm)> = institutions
        .iter()
        .cloned()
        .zip(map_institution_rows(&institutions))
        .collect();

    rsx! {
        div { class: "kpi-grid",
            div { class: "kpi-card",
                p { class: "kpi-label", "Meta" }
                p { class: "kpi-value", "{totals.target}" }
            }
            div { class: "kpi-card",
                p { class: "kpi-label", "Entregado" }
                p { class: "kpi-value", "{totals.delivered}" }
            }
            div { class: "kpi-card",
                p { class: "kpi-label", "Avance" }
                p { class: "kpi-value", "{totals.percentage}" }
            }
        }

        if rows.is_empty() {
            p { class: "empty", "Este grupo aún no tiene instituciones." }
        } else {
            section { class: "chart-card",
                h3 { "Población vs Entregado" }
                ul { class: "paired-bars",
                    for bar in bars {
                        PairedBar { bar }
                    }
                }
            }
            ul { class: "institution-list",
                for (institution, row) in rows {
                    InstitutionRow {
                        key: "{row.id}",
                        institution,
                        row: row.clone(),
                        on_edit,
                        on_deliver,
                        on_delete,
                    }
                }
            }
        }
    }
}

#[component]
fn PairedBar(bar: PairedBarVm) -> Element {
    rsx! {
        li { class: "bar-row",
            span { class: "bar-label", "{bar.label}" }
            span { class: "bar-track",
                span { class: "bar-fill bar-fill--target", style: "width: {bar.target_pct:.1}%;" }
                span { class: "bar-fill bar-fill--delivered", style: "width: {bar.delivered_pct:.1}%;" }
            }
            span { class: "bar-value", "{bar.delivered} / {bar.target}" }
        }
    }
}

#[component]
fn InstitutionRow(
    institution: Institution,
    row: InstitutionRowVm,
    on_edit: EventHandler<Institution>,
    on_deliver: EventHandler<Institution>,
    on_delete: EventHandler<DeleteTarget>,
) -> Element {
    let target = DeleteTarget::institution(&institution);
    let for_edit = institution.clone();
    let for_delivery = institution.clone();

    rsx! {
        li { class: "institution-row",
            div { class: "institution-info",
                p { class: "institution-name", "{row.nombre}" }
                p { class: "muted", "{row.address} · {row.jornada}" }
                p { class: "muted", "Entregado {row.delivered} de {row.target}" }
            }
            span { class: "status status--{row.tone}", "{row.status}" }
            div { class: "row-actions",
                if let Some(url) = row.maps_url.clone() {
                    ExternalLink { href: url, label: "Ver mapa" }
                }
                button {
                    class: "primary",
                    r#type: "button",
                    onclick: move |_| on_deliver.call(for_delivery.clone()),
                    "Registrar entrega"
                }
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    "Editar"
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
}

#[component]
fn MemberRow(member: Member, on_delete: EventHandler<DeleteTarget>) -> Element {
    let target = DeleteTarget::member(&member);
    let initial = member.initial();
    let telefono = member.telefono.clone().unwrap_or_default();

    rsx! {
        li { class: "member-row",
            span { class: "avatar", "{initial}" }
            div { class: "member-info",
                p { "{member.nombre}" }
                p { class: "muted", "{telefono}" }
            }
            if let Some(url) = member.whatsapp_url() {
                ExternalLink { class: "whatsapp", href: url, label: "WhatsApp" }
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
