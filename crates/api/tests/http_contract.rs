use std::sync::{Arc, Mutex};

use api::repository::{
    DashboardRepository, DeliveryRepository, GroupRepository, InstitutionRepository,
    MapRepository, MemberRepository, ReportRepository,
};
use api::{ApiConfig, ApiError, Backend, Endpoints};
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use blitz_core::model::{
    DeliveryDraft, GroupDraft, GroupId, InstitutionDraft, InstitutionForm, InstitutionId, Jornada,
    MemberDraft, MemberId,
};
use serde_json::{Value, json};

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    authorization: Option<String>,
    body: String,
}

#[derive(Clone, Default)]
struct Fake {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Fake {
    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn last(&self) -> Recorded {
        self.requests().last().cloned().unwrap()
    }
}

async fn handle(
    State(fake): State<Fake>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    fake.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        body,
    });

    let payload: Value = match (method.as_str(), path.as_str()) {
        ("GET", "/groups") => json!([
            {"id": 1, "nombre": "Norte", "lider": "Ana"},
            {"id": "b7", "nombre": "Sur", "lider": null}
        ]),
        ("GET", "/institutions/group/1") => json!([
            {"id": 10, "nombre": "Escuela A", "direccion": "Av. 1", "jornada": "Tarde",
             "estudiantes": "50", "maps_url": "", "group_id": 1, "total_entregado": "20"}
        ]),
        ("GET", "/members/group/1") => Value::Null,
        ("GET", "/deliveries/progress") => json!({"entregado": 50, "meta": 130}),
        ("GET", "/deliveries/groups") => json!([{"grupo": "Norte", "total_entregado": "50"}]),
        ("GET", "/api/map/locations") => json!([
            {"id": 1, "latitud": -0.18, "longitud": -78.47, "nombre": "Escuela A",
             "grupo": "Norte", "estado": "ENTREGADO"}
        ]),
        ("GET", "/reports/global") => json!({
            "summary": {"total_instituciones": 2, "meta_estudiantes": 130,
                        "total_entregado": 50, "total_voluntarios": 4},
            "dailyTrend": [{"fecha": "2026-02-20", "total": 50}],
            "groupPerformance": [{"nombre": "Norte", "total_entregado": 50}]
        }),
        ("GET", "/broken") => return (StatusCode::OK, "not json").into_response(),
        ("GET", _) => return StatusCode::NOT_FOUND.into_response(),
        ("DELETE", "/members/404") => return StatusCode::NOT_FOUND.into_response(),
        _ => json!({"ok": true}),
    };
    axum::Json(payload).into_response()
}

async fn serve(config: impl FnOnce(String) -> ApiConfig) -> (Backend, Fake) {
    let fake = Fake::default();
    let app = Router::new().fallback(handle).with_state(fake.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let backend = Backend::http(config(format!("http://{addr}"))).unwrap();
    (backend, fake)
}

async fn serve_default() -> (Backend, Fake) {
    serve(|base| ApiConfig::new(&base).unwrap()).await
}

#[tokio::test]
async fn decodes_lenient_collections() {
    let (backend, _) = serve_default().await;

    let groups = backend.groups.list_groups().await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].id, GroupId::new("1"));
    assert_eq!(groups[1].id, GroupId::new("b7"));
    assert_eq!(groups[1].leader_label(), "Sin asignar");

    let institutions = backend
        .institutions
        .list_institutions(&GroupId::new("1"))
        .await
        .unwrap();
    assert_eq!(institutions[0].estudiantes, 50);
    assert_eq!(institutions[0].entregados, 20);
    assert_eq!(institutions[0].jornada, Jornada::Tarde);
    assert_eq!(institutions[0].maps_url, None);

    let members = backend.members.list_members(&GroupId::new("1")).await.unwrap();
    assert!(members.is_empty());
}

#[tokio::test]
async fn reads_dashboard_map_and_report() {
    let (backend, _) = serve_default().await;

    let progress = backend.dashboard.progress().await.unwrap();
    assert_eq!(progress.porcentaje, 38.5);
    let per_group = backend.dashboard.group_deliveries().await.unwrap();
    assert_eq!(per_group[0].entregado, 50);

    let points = backend.map.list_points().await.unwrap();
    assert_eq!(points[0].lat, Some(-0.18));

    let report = backend.reports.global_report().await.unwrap();
    assert_eq!(report.summary.unwrap().total_voluntarios, 4);
    assert_eq!(report.group_performance[0].nombre, "Norte");
}

#[tokio::test]
async fn write_paths_match_backend_routes() {
    let (backend, fake) = serve_default().await;

    backend
        .groups
        .create_group(&GroupDraft::new("Norte", "Ana").unwrap())
        .await
        .unwrap();
    let created = fake.last();
    assert_eq!((created.method, created.path.as_str()), (Method::POST, "/groups"));
    let body: Value = serde_json::from_str(&created.body).unwrap();
    assert_eq!(body, json!({"nombre": "Norte", "lider": "Ana"}));

    backend.groups.delete_group(&GroupId::new("7")).await.unwrap();
    assert_eq!(fake.last().path, "/groups7");

    let form = InstitutionForm {
        nombre: "Escuela A".into(),
        estudiantes: "50".into(),
        ..InstitutionForm::default()
    };
    let draft = InstitutionDraft::from_form(&form, GroupId::new("1")).unwrap();
    backend
        .institutions
        .update_institution(&InstitutionId::new("10"), &draft)
        .await
        .unwrap();
    let updated = fake.last();
    assert_eq!((updated.method, updated.path.as_str()), (Method::PUT, "/institutions/10"));

    backend
        .members
        .create_member(&MemberDraft::new("Luis", "099", GroupId::new("1")).unwrap())
        .await
        .unwrap();
    assert_eq!(fake.last().path, "/api/members");

    let delivery = DeliveryDraft::from_form(
        "25",
        "2026-02-20",
        InstitutionId::new("10"),
        GroupId::new("1"),
    )
    .unwrap();
    backend.deliveries.record_delivery(&delivery).await.unwrap();
    let posted = fake.last();
    assert_eq!(posted.path, "/deliveries");
    let body: Value = serde_json::from_str(&posted.body).unwrap();
    assert_eq!(body["cantidad"], 25);
    assert_eq!(body["fecha"], "2026-02-20");
}

#[tokio::test]
async fn configurable_paths_and_bearer_token() {
    let (backend, fake) = serve(|base| {
        ApiConfig::new(&base)
            .unwrap()
            .with_token(Some("secret".into()))
            .with_endpoints(Endpoints {
                members_create: "/members".into(),
                map_locations: "/map/locations".into(),
            })
    })
    .await;

    backend
        .members
        .create_member(&MemberDraft::new("Luis", "", GroupId::new("1")).unwrap())
        .await
        .unwrap();
    let created = fake.last();
    assert_eq!(created.path, "/members");
    assert_eq!(created.authorization.as_deref(), Some("Bearer secret"));

    // Unknown GET routes answer 404 on the fake.
    assert_eq!(backend.map.list_points().await, Err(ApiError::NotFound));
    assert_eq!(fake.last().path, "/map/locations");
}

#[tokio::test]
async fn no_token_sends_no_authorization() {
    let (backend, fake) = serve_default().await;
    backend.groups.list_groups().await.unwrap();
    assert_eq!(fake.last().authorization, None);
}

#[tokio::test]
async fn failures_are_classified() {
    let (backend, _) = serve_default().await;
    assert_eq!(
        backend.members.delete_member(&MemberId::new("404")).await,
        Err(ApiError::NotFound)
    );

    let (broken, _) = serve(|base| {
        ApiConfig::new(&base).unwrap().with_endpoints(Endpoints {
            map_locations: "/broken".into(),
            ..Endpoints::default()
        })
    })
    .await;
    assert!(matches!(broken.map.list_points().await, Err(ApiError::Decode(_))));

    let (unreachable, _) = serve(|_| ApiConfig::new("http://127.0.0.1:9").unwrap()).await;
    assert!(matches!(
        unreachable.groups.list_groups().await,
        Err(ApiError::Network(_))
    ));
}
