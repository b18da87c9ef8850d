use async_trait::async_trait;
use blitz_core::model::{
    DailyTotal, DeliveryDraft, Group, GroupDelivery, GroupDraft, GroupId, GroupPerformance,
    Institution, InstitutionDraft, InstitutionId, MapPoint, Member, MemberDraft, MemberId,
    ProgressSnapshot, ReportBundle, ReportSummary,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Errors surfaced by backend adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    #[error("not found")]
    NotFound,

    #[error("backend unreachable: {0}")]
    Network(String),

    #[error("backend answered with status {0}")]
    Status(u16),

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the backend cannot be read.
    async fn list_groups(&self) -> Result<Vec<Group>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the backend rejects the write.
    async fn create_group(&self, draft: &GroupDraft) -> Result<(), ApiError>;

    /// Remove a group. The backend cascades to its institutions and members.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the backend rejects the delete.
    async fn delete_group(&self, id: &GroupId) -> Result<(), ApiError>;
}

#[async_trait]
pub trait InstitutionRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the backend cannot be read.
    async fn list_institutions(&self, group: &GroupId) -> Result<Vec<Institution>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the backend rejects the write.
    async fn create_institution(&self, draft: &InstitutionDraft) -> Result<(), ApiError>;

    /// Replace the editable fields of an institution. Delivered counts are
    /// left alone.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id, or other backend errors.
    async fn update_institution(
        &self,
        id: &InstitutionId,
        draft: &InstitutionDraft,
    ) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the backend rejects the delete.
    async fn delete_institution(&self, id: &InstitutionId) -> Result<(), ApiError>;
}

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the backend cannot be read.
    async fn list_members(&self, group: &GroupId) -> Result<Vec<Member>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the backend rejects the write.
    async fn create_member(&self, draft: &MemberDraft) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the backend rejects the delete.
    async fn delete_member(&self, id: &MemberId) -> Result<(), ApiError>;
}

#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    /// Record a delivery event against an institution.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the backend rejects the write.
    async fn record_delivery(&self, draft: &DeliveryDraft) -> Result<(), ApiError>;
}

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the backend cannot be read.
    async fn progress(&self) -> Result<ProgressSnapshot, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the backend cannot be read.
    async fn group_deliveries(&self) -> Result<Vec<GroupDelivery>, ApiError>;
}

#[async_trait]
pub trait MapRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the backend cannot be read.
    async fn list_points(&self) -> Result<Vec<MapPoint>, ApiError>;
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the backend cannot be read.
    async fn global_report(&self) -> Result<ReportBundle, ApiError>;
}

#[derive(Default)]
struct State {
    next_id: u64,
    groups: Vec<Group>,
    institutions: Vec<Institution>,
    members: Vec<Member>,
    deliveries: Vec<DeliveryDraft>,
    points: Vec<MapPoint>,
    report: Option<ReportBundle>,
    calls: Vec<String>,
}

impl State {
    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }

    fn delivered_by_group(&self, group: &GroupId) -> u64 {
        self.institutions
            .iter()
            .filter(|inst| inst.group_id.as_ref() == Some(group))
            .map(Institution::delivered)
            .sum()
    }

    fn derived_report(&self) -> ReportBundle {
        let mut by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for delivery in &self.deliveries {
            *by_day.entry(delivery.fecha).or_default() += delivery.cantidad;
        }

        let mut group_performance: Vec<GroupPerformance> = self
            .groups
            .iter()
            .map(|group| GroupPerformance {
                nombre: group.nombre.clone(),
                total_entregado: self.delivered_by_group(&group.id),
            })
            .collect();
        group_performance.sort_by(|a, b| b.total_entregado.cmp(&a.total_entregado));

        ReportBundle {
            summary: Some(ReportSummary {
                total_instituciones: self.institutions.len() as u64,
                meta_estudiantes: self.institutions.iter().map(Institution::target).sum(),
                total_entregado: self.institutions.iter().map(Institution::delivered).sum(),
                total_voluntarios: self.members.len() as u64,
            }),
            daily_trend: by_day
                .into_iter()
                .map(|(day, total)| DailyTotal {
                    fecha: day.format("%Y-%m-%d").to_string(),
                    total,
                })
                .collect(),
            group_performance,
        }
    }
}

/// In-memory backend for tests and offline demos.
///
/// Dashboard, report and group totals are derived from the stored
/// institutions and recorded deliveries, the way the real backend aggregates
/// them. Every trait call is appended to a call log.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn log(&self, call: String) -> MutexGuard<'_, State> {
        let mut state = self.state();
        state.calls.push(call);
        state
    }

    /// Store a group as-is, returning its id.
    pub fn insert_group(&self, nombre: &str, lider: Option<&str>) -> GroupId {
        let mut state = self.state();
        let id = GroupId::new(state.allocate_id());
        state.groups.push(Group {
            id: id.clone(),
            nombre: nombre.to_string(),
            lider: lider.map(str::to_owned),
        });
        id
    }

    /// Store an institution as-is; its id is replaced with a fresh one.
    pub fn insert_institution(&self, mut institution: Institution) -> InstitutionId {
        let mut state = self.state();
        institution.id = InstitutionId::new(state.allocate_id());
        let id = institution.id.clone();
        state.institutions.push(institution);
        id
    }

    pub fn insert_point(&self, point: MapPoint) {
        self.state().points.push(point);
    }

    /// Serve `bundle` from `global_report` instead of deriving one.
    pub fn set_report(&self, bundle: ReportBundle) {
        self.state().report = Some(bundle);
    }

    /// Trait calls made so far, as `"<method> <argument>"` strings.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    #[must_use]
    pub fn deliveries(&self) -> Vec<DeliveryDraft> {
        self.state().deliveries.clone()
    }
}

#[async_trait]
impl GroupRepository for InMemoryRepository {
    async fn list_groups(&self) -> Result<Vec<Group>, ApiError> {
        Ok(self.log("list_groups".into()).groups.clone())
    }

    async fn create_group(&self, draft: &GroupDraft) -> Result<(), ApiError> {
        let mut state = self.log(format!("create_group {}", draft.nombre()));
        let id = GroupId::new(state.allocate_id());
        state.groups.push(Group {
            id,
            nombre: draft.nombre().to_string(),
            lider: draft.lider().map(str::to_owned),
        });
        Ok(())
    }

    async fn delete_group(&self, id: &GroupId) -> Result<(), ApiError> {
        let mut state = self.log(format!("delete_group {id}"));
        let before = state.groups.len();
        state.groups.retain(|g| &g.id != id);
        if state.groups.len() == before {
            return Err(ApiError::NotFound);
        }
        state
            .institutions
            .retain(|inst| inst.group_id.as_ref() != Some(id));
        state.members.retain(|m| m.group_id.as_ref() != Some(id));
        state.deliveries.retain(|d| &d.group_id != id);
        Ok(())
    }
}

#[async_trait]
impl InstitutionRepository for InMemoryRepository {
    async fn list_institutions(&self, group: &GroupId) -> Result<Vec<Institution>, ApiError> {
        let state = self.log(format!("list_institutions {group}"));
        Ok(state
            .institutions
            .iter()
            .filter(|inst| inst.group_id.as_ref() == Some(group))
            .cloned()
            .collect())
    }

    async fn create_institution(&self, draft: &InstitutionDraft) -> Result<(), ApiError> {
        let mut state = self.log(format!("create_institution {}", draft.nombre));
        let id = InstitutionId::new(state.allocate_id());
        state.institutions.push(Institution {
            id,
            nombre: draft.nombre.clone(),
            direccion: Some(draft.direccion.clone()).filter(|d| !d.is_empty()),
            jornada: draft.jornada,
            estudiantes: draft.estudiantes,
            maps_url: Some(draft.maps_url.clone()).filter(|u| !u.is_empty()),
            group_id: Some(draft.group_id.clone()),
            entregados: 0,
        });
        Ok(())
    }

    async fn update_institution(
        &self,
        id: &InstitutionId,
        draft: &InstitutionDraft,
    ) -> Result<(), ApiError> {
        let mut state = self.log(format!("update_institution {id}"));
        let inst = state
            .institutions
            .iter_mut()
            .find(|inst| &inst.id == id)
            .ok_or(ApiError::NotFound)?;
        inst.nombre = draft.nombre.clone();
        inst.direccion = Some(draft.direccion.clone()).filter(|d| !d.is_empty());
        inst.jornada = draft.jornada;
        inst.estudiantes = draft.estudiantes;
        inst.maps_url = Some(draft.maps_url.clone()).filter(|u| !u.is_empty());
        inst.group_id = Some(draft.group_id.clone());
        Ok(())
    }

    async fn delete_institution(&self, id: &InstitutionId) -> Result<(), ApiError> {
        let mut state = self.log(format!("delete_institution {id}"));
        let before = state.institutions.len();
        state.institutions.retain(|inst| &inst.id != id);
        if state.institutions.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for InMemoryRepository {
    async fn list_members(&self, group: &GroupId) -> Result<Vec<Member>, ApiError> {
        let state = self.log(format!("list_members {group}"));
        Ok(state
            .members
            .iter()
            .filter(|m| m.group_id.as_ref() == Some(group))
            .cloned()
            .collect())
    }

    async fn create_member(&self, draft: &MemberDraft) -> Result<(), ApiError> {
        let mut state = self.log(format!("create_member {}", draft.nombre));
        let id = MemberId::new(state.allocate_id());
        state.members.push(Member {
            id,
            nombre: draft.nombre.clone(),
            telefono: Some(draft.telefono.clone()).filter(|t| !t.is_empty()),
            group_id: Some(draft.group_id.clone()),
        });
        Ok(())
    }

    async fn delete_member(&self, id: &MemberId) -> Result<(), ApiError> {
        let mut state = self.log(format!("delete_member {id}"));
        let before = state.members.len();
        state.members.retain(|m| &m.id != id);
        if state.members.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl DeliveryRepository for InMemoryRepository {
    async fn record_delivery(&self, draft: &DeliveryDraft) -> Result<(), ApiError> {
        let mut state = self.log(format!("record_delivery {}", draft.institution_id));
        let inst = state
            .institutions
            .iter_mut()
            .find(|inst| inst.id == draft.institution_id)
            .ok_or(ApiError::NotFound)?;
        inst.entregados = inst.entregados.saturating_add(draft.cantidad);
        state.deliveries.push(draft.clone());
        Ok(())
    }
}

#[async_trait]
impl DashboardRepository for InMemoryRepository {
    async fn progress(&self) -> Result<ProgressSnapshot, ApiError> {
        let state = self.log("progress".into());
        let delivered = state.institutions.iter().map(Institution::delivered).sum();
        let target = state.institutions.iter().map(Institution::target).sum();
        Ok(ProgressSnapshot::from_counts(delivered, target))
    }

    async fn group_deliveries(&self) -> Result<Vec<GroupDelivery>, ApiError> {
        let state = self.log("group_deliveries".into());
        Ok(state
            .groups
            .iter()
            .map(|group| GroupDelivery {
                grupo: group.nombre.clone(),
                entregado: state.delivered_by_group(&group.id),
            })
            .collect())
    }
}

#[async_trait]
impl MapRepository for InMemoryRepository {
    async fn list_points(&self) -> Result<Vec<MapPoint>, ApiError> {
        Ok(self.log("list_points".into()).points.clone())
    }
}

#[async_trait]
impl ReportRepository for InMemoryRepository {
    async fn global_report(&self) -> Result<ReportBundle, ApiError> {
        let state = self.log("global_report".into());
        Ok(state
            .report
            .clone()
            .unwrap_or_else(|| state.derived_report()))
    }
}

/// Aggregates every backend resource behind trait objects for easy swapping.
#[derive(Clone)]
pub struct Backend {
    pub groups: Arc<dyn GroupRepository>,
    pub institutions: Arc<dyn InstitutionRepository>,
    pub members: Arc<dyn MemberRepository>,
    pub deliveries: Arc<dyn DeliveryRepository>,
    pub dashboard: Arc<dyn DashboardRepository>,
    pub map: Arc<dyn MapRepository>,
    pub reports: Arc<dyn ReportRepository>,
}

impl Backend {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_in_memory(&InMemoryRepository::new())
    }

    /// Share one in-memory store across every resource.
    #[must_use]
    pub fn from_in_memory(repo: &InMemoryRepository) -> Self {
        Self {
            groups: Arc::new(repo.clone()),
            institutions: Arc::new(repo.clone()),
            members: Arc::new(repo.clone()),
            deliveries: Arc::new(repo.clone()),
            dashboard: Arc::new(repo.clone()),
            map: Arc::new(repo.clone()),
            reports: Arc::new(repo.clone()),
        }
    }
}
