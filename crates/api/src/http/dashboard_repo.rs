use async_trait::async_trait;
use blitz_core::model::{GroupDelivery, ProgressSnapshot};

use super::HttpRepository;
use crate::repository::{ApiError, DashboardRepository};

#[async_trait]
impl DashboardRepository for HttpRepository {
    async fn progress(&self) -> Result<ProgressSnapshot, ApiError> {
        self.get_json("/deliveries/progress").await
    }

    async fn group_deliveries(&self) -> Result<Vec<GroupDelivery>, ApiError> {
        self.get_list("/deliveries/groups").await
    }
}
