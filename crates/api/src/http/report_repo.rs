use async_trait::async_trait;
use blitz_core::model::ReportBundle;

use super::HttpRepository;
use crate::repository::{ApiError, ReportRepository};

#[async_trait]
impl ReportRepository for HttpRepository {
    async fn global_report(&self) -> Result<ReportBundle, ApiError> {
        self.get_json("/reports/global").await
    }
}
