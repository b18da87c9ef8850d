use std::path::PathBuf;
use std::sync::Arc;

use api::{ApiConfig, Backend};
use blitz_core::report::ReportOptions;

use crate::Clock;
use crate::dashboard_service::DashboardService;
use crate::delivery_service::DeliveryService;
use crate::error::AppServicesError;
use crate::group_service::GroupService;
use crate::institution_service::InstitutionService;
use crate::map_service::MapService;
use crate::member_service::MemberService;
use crate::report::ReportService;

/// Where and how reports are exported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSettings {
    pub output_dir: PathBuf,
    pub options: ReportOptions,
}

/// Assembles app-facing services over one backend.
#[derive(Clone)]
pub struct AppServices {
    groups: Arc<GroupService>,
    institutions: Arc<InstitutionService>,
    members: Arc<MemberService>,
    deliveries: Arc<DeliveryService>,
    dashboard: Arc<DashboardService>,
    map: Arc<MapService>,
    reports: Arc<ReportService>,
}

impl AppServices {
    /// Build services backed by the REST API.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the HTTP client cannot be built.
    pub fn new_http(
        config: ApiConfig,
        clock: Clock,
        report: ReportSettings,
    ) -> Result<Self, AppServicesError> {
        let backend = Backend::http(config)?;
        Ok(Self::from_backend(&backend, clock, report))
    }

    #[must_use]
    pub fn from_backend(backend: &Backend, clock: Clock, report: ReportSettings) -> Self {
        Self {
            groups: Arc::new(GroupService::new(Arc::clone(&backend.groups))),
            institutions: Arc::new(InstitutionService::new(Arc::clone(&backend.institutions))),
            members: Arc::new(MemberService::new(Arc::clone(&backend.members))),
            deliveries: Arc::new(DeliveryService::new(
                clock,
                Arc::clone(&backend.deliveries),
                Arc::clone(&backend.institutions),
            )),
            dashboard: Arc::new(DashboardService::new(Arc::clone(&backend.dashboard))),
            map: Arc::new(MapService::new(Arc::clone(&backend.map))),
            reports: Arc::new(ReportService::new(
                clock,
                Arc::clone(&backend.reports),
                report.options,
                report.output_dir,
            )),
        }
    }

    #[must_use]
    pub fn groups(&self) -> Arc<GroupService> {
        Arc::clone(&self.groups)
    }

    #[must_use]
    pub fn institutions(&self) -> Arc<InstitutionService> {
        Arc::clone(&self.institutions)
    }

    #[must_use]
    pub fn members(&self) -> Arc<MemberService> {
        Arc::clone(&self.members)
    }

    #[must_use]
    pub fn deliveries(&self) -> Arc<DeliveryService> {
        Arc::clone(&self.deliveries)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn map(&self) -> Arc<MapService> {
        Arc::clone(&self.map)
    }

    #[must_use]
    pub fn reports(&self) -> Arc<ReportService> {
        Arc::clone(&self.reports)
    }
}
