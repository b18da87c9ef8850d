use std::sync::Arc;

use services::{
    AppServices, DashboardService, DeliveryService, GroupService, InstitutionService, MapService,
    MemberService, ReportService,
};

use crate::platform::{LinkOpenerRef, SystemLinkOpener};

pub trait UiApp: Send + Sync {
    fn groups(&self) -> Arc<GroupService>;
    fn institutions(&self) -> Arc<InstitutionService>;
    fn members(&self) -> Arc<MemberService>;
    fn deliveries(&self) -> Arc<DeliveryService>;
    fn dashboard(&self) -> Arc<DashboardService>;
    fn map(&self) -> Arc<MapService>;
    fn reports(&self) -> Arc<ReportService>;
}

impl UiApp for AppServices {
    fn groups(&self) -> Arc<GroupService> {
        AppServices::groups(self)
    }

    fn institutions(&self) -> Arc<InstitutionService> {
        AppServices::institutions(self)
    }

    fn members(&self) -> Arc<MemberService> {
        AppServices::members(self)
    }

    fn deliveries(&self) -> Arc<DeliveryService> {
        AppServices::deliveries(self)
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        AppServices::dashboard(self)
    }

    fn map(&self) -> Arc<MapService> {
        AppServices::map(self)
    }

    fn reports(&self) -> Arc<ReportService> {
        AppServices::reports(self)
    }
}

/// Services reachable from every view through `use_context`.
#[derive(Clone)]
pub struct AppContext {
    groups: Arc<GroupService>,
    institutions: Arc<InstitutionService>,
    members: Arc<MemberService>,
    deliveries: Arc<DeliveryService>,
    dashboard: Arc<DashboardService>,
    map: Arc<MapService>,
    reports: Arc<ReportService>,
    links: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            groups: app.groups(),
            institutions: app.institutions(),
            members: app.members(),
            deliveries: app.deliveries(),
            dashboard: app.dashboard(),
            map: app.map(),
            reports: app.reports(),
            links: Arc::new(SystemLinkOpener),
        }
    }

    #[must_use]
    pub fn with_link_opener(mut self, links: LinkOpenerRef) -> Self {
        self.links = links;
        self
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

    #[must_use]
    pub fn links(&self) -> LinkOpenerRef {
        Arc::clone(&self.links)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
