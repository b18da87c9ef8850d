use std::sync::Arc;

use api::repository::{GroupRepository, MemberRepository, ReportRepository};
use api::{ApiError, Backend, InMemoryRepository};
use async_trait::async_trait;
use blitz_core::model::{
    GroupId, Institution, InstitutionId, Jornada, MapPoint, Member, MemberDraft, MemberId,
    PointId, ReportBundle, ReportSummary,
};

use crate::views::{Refreshed, delete_target};
use crate::vm::{DeleteConfirmation, DeleteTarget, DialogChoice, GENERIC_FAILURE};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_backend};

fn institution(nombre: &str, group: &GroupId, estudiantes: u64, entregados: u64) -> Institution {
    Institution {
        id: InstitutionId::new("0"),
        nombre: nombre.to_string(),
        direccion: Some("Av. Loja".to_string()),
        jornada: Jornada::Manana,
        estudiantes,
        maps_url: None,
        group_id: Some(group.clone()),
        entregados,
    }
}

fn point(id: &str, lat: f64, lng: f64, estado: &str) -> MapPoint {
    MapPoint {
        id: PointId::new(id),
        lat: Some(lat),
        lng: Some(lng),
        nombre: format!("Escuela {id}"),
        grupo: "Norte".to_string(),
        estado: estado.to_string(),
        maps_url: Some("https://maps.google.com/?q=1".to_string()),
    }
}

struct DownReports;

#[async_trait]
impl ReportRepository for DownReports {
    async fn global_report(&self) -> Result<ReportBundle, ApiError> {
        Err(ApiError::Network("connection refused".to_string()))
    }
}

struct DownMembers;

#[async_trait]
impl MemberRepository for DownMembers {
    async fn list_members(&self, _group: &GroupId) -> Result<Vec<Member>, ApiError> {
        Err(ApiError::Status(500))
    }

    async fn create_member(&self, _draft: &MemberDraft) -> Result<(), ApiError> {
        Err(ApiError::Status(500))
    }

    async fn delete_member(&self, _id: &MemberId) -> Result<(), ApiError> {
        Err(ApiError::Status(500))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_renders_global_progress() {
    let repo = InMemoryRepository::new();
    let group = repo.insert_group("Norte", Some("Ana"));
    repo.insert_institution(institution("Escuela A", &group, 1_000, 385));
    repo.insert_institution(institution("Escuela B", &group, 0, 0));

    let mut harness = setup_view_harness(ViewKind::Dashboard, &repo);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Dashboard Blitz"), "missing title in {html}");
    assert!(html.contains("1,000"), "missing goal in {html}");
    assert!(html.contains("38.5%"), "missing percentage in {html}");
    assert!(html.contains("Entregas por Grupo"), "missing chart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn groups_view_lists_roster() {
    let repo = InMemoryRepository::new();
    repo.insert_group("Norte", Some("Ana"));
    repo.insert_group("Sur", None);

    let mut harness = setup_view_harness(ViewKind::Groups, &repo);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Norte"), "missing group in {html}");
    assert!(html.contains("Líder: Ana"), "missing leader in {html}");
    assert!(html.contains("Sin asignar"), "missing placeholder in {html}");
    assert!(!html.contains("modal-backdrop"), "dialog open without request in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn group_detail_shows_institution_status() {
    let repo = InMemoryRepository::new();
    let group = repo.insert_group("Norte", None);
    repo.insert_institution(institution("Escuela A", &group, 50, 50));

    let mut harness = setup_view_harness(ViewKind::GroupDetail(group.to_string()), &repo);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Escuela A"), "missing institution in {html}");
    assert!(html.contains("Nueva institución"), "missing form in {html}");
    assert!(html.contains("Registrar entrega"), "missing delivery action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn group_detail_institutions_survive_member_failure() {
    let repo = InMemoryRepository::new();
    let group = repo.insert_group("Norte", None);
    repo.insert_institution(institution("Escuela A", &group, 50, 10));
    let backend = Backend {
        members: Arc::new(DownMembers),
        ..Backend::from_in_memory(&repo)
    };

    let mut harness =
        setup_view_harness_with_backend(ViewKind::GroupDetail(group.to_string()), backend);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Escuela A"), "missing institution in {html}");
    assert!(!html.contains("Error de conexión"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn map_view_renders_markers_and_legend() {
    let repo = InMemoryRepository::new();
    repo.insert_point(point("1", -2.90, -79.00, "entregado"));
    repo.insert_point(point("2", -2.80, -78.90, "pendiente"));

    let mut harness = setup_view_harness(ViewKind::Map, &repo);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Entregados: 1"), "missing legend in {html}");
    assert!(html.contains("Pendientes: 1"), "missing legend in {html}");
    assert!(html.contains("<circle"), "missing markers in {html}");
    assert!(html.contains("Abrir en Maps"), "missing maps link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reports_view_offers_retry_when_backend_is_down() {
    let backend = Backend {
        reports: Arc::new(DownReports),
        ..Backend::in_memory()
    };

    let mut harness = setup_view_harness_with_backend(ViewKind::Reports, backend);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Error de conexión"), "missing error in {html}");
    assert!(html.contains("Reintentar Conexión"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reports_view_treats_missing_summary_as_error() {
    let repo = InMemoryRepository::new();
    repo.set_report(ReportBundle::default());

    let mut harness = setup_view_harness(ViewKind::Reports, &repo);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Reintentar Conexión"), "missing retry in {html}");
    assert!(!html.contains("EXPORTAR PDF"), "export offered without data in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reports_view_renders_overview() {
    let repo = InMemoryRepository::new();
    repo.set_report(ReportBundle {
        summary: Some(ReportSummary {
            total_instituciones: 2,
            meta_estudiantes: 130,
            total_entregado: 50,
            total_voluntarios: 12,
        }),
        ..ReportBundle::default()
    });

    let mut harness = setup_view_harness(ViewKind::Reports, &repo);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("EXPORTAR PDF"), "missing export in {html}");
    assert!(html.contains("Voluntarios Activos"), "missing volunteers in {html}");
    assert!(html.contains("38.5%"), "missing progress in {html}");
    assert!(harness.report_dir.path().read_dir().unwrap().next().is_none());
}

fn delete_calls(repo: &InMemoryRepository) -> Vec<String> {
    repo.calls()
        .into_iter()
        .filter(|call| call.starts_with("delete_"))
        .collect()
}

#[tokio::test(flavor = "current_thread")]
async fn cancelled_group_delete_leaves_roster_untouched() {
    let repo = InMemoryRepository::new();
    let norte = repo.insert_group("Norte", Some("Ana"));
    repo.insert_group("Sur", None);

    let mut harness = setup_view_harness(ViewKind::Groups, &repo);
    harness.settle().await;
    let before = harness.render();
    let roster = repo.list_groups().await.unwrap();

    let mut confirmation = DeleteConfirmation::default();
    confirmation.request(DeleteTarget::group(&roster[0]));
    assert_eq!(confirmation.resolve(DialogChoice::Cancel), None);
    harness.drive_async().await;

    assert!(delete_calls(&repo).is_empty(), "delete sent after cancel");
    assert_eq!(repo.list_groups().await.unwrap(), roster);
    assert_eq!(harness.render(), before);

    confirmation.request(DeleteTarget::group(&roster[0]));
    let target = confirmation.resolve(DialogChoice::Confirm).unwrap();
    let refreshed = delete_target(&harness.context, target, None).await.unwrap();
    let Refreshed::Groups(left) = refreshed else {
        panic!("group delete refreshed {refreshed:?}");
    };
    assert_eq!(left.len(), 1);
    assert_eq!(delete_calls(&repo), vec![format!("delete_group {norte}")]);
}

#[tokio::test(flavor = "current_thread")]
async fn cancelled_member_delete_leaves_team_untouched() {
    let repo = InMemoryRepository::new();
    let group = repo.insert_group("Norte", None);
    let draft = MemberDraft::new("Luis", "0991234567", group.clone()).unwrap();
    repo.create_member(&draft).await.unwrap();

    let mut harness = setup_view_harness(ViewKind::GroupDetail(group.to_string()), &repo);
    harness.settle().await;
    let team = repo.list_members(&group).await.unwrap();

    let mut confirmation = DeleteConfirmation::default();
    confirmation.request(DeleteTarget::member(&team[0]));
    assert_eq!(confirmation.resolve(DialogChoice::Cancel), None);
    harness.drive_async().await;

    assert!(delete_calls(&repo).is_empty(), "delete sent after cancel");
    assert_eq!(repo.list_members(&group).await.unwrap(), team);

    let target = DeleteTarget::member(&team[0]);
    assert_eq!(
        delete_target(&harness.context, target.clone(), None).await,
        Err(GENERIC_FAILURE)
    );
    assert!(delete_calls(&repo).is_empty(), "unscoped delete reached the backend");

    confirmation.request(target);
    let target = confirmation.resolve(DialogChoice::Confirm).unwrap();
    let refreshed = delete_target(&harness.context, target, Some(&group)).await;
    assert_eq!(refreshed, Ok(Refreshed::Members(Vec::new())));
    assert_eq!(delete_calls(&repo), vec![format!("delete_member {}", team[0].id)]);
}
