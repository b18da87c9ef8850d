use std::sync::Arc;

use api::ApiError;
use api::repository::DashboardRepository;
use blitz_core::model::{GroupDelivery, ProgressSnapshot};
use futures::try_join;
use tracing::warn;

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub progress: ProgressSnapshot,
    pub groups: Vec<GroupDelivery>,
}

#[derive(Clone)]
pub struct DashboardService {
    dashboard: Arc<dyn DashboardRepository>,
}

impl DashboardService {
    #[must_use]
    pub fn new(dashboard: Arc<dyn DashboardRepository>) -> Self {
        Self { dashboard }
    }

    /// Fetch the global progress and the per-group breakdown concurrently.
    /// Both must succeed.
    ///
    /// # Errors
    ///
    /// Returns the first `ApiError` either request produced.
    pub async fn load(&self) -> Result<DashboardData, ApiError> {
        let (progress, groups) = try_join!(
            self.dashboard.progress(),
            self.dashboard.group_deliveries()
        )
        .inspect_err(|err| warn!(error = %err, "dashboard load failed"))?;
        Ok(DashboardData { progress, groups })
    }
}
