use async_trait::async_trait;
use blitz_core::model::DeliveryDraft;
use reqwest::Method;

use super::HttpRepository;
use crate::repository::{ApiError, DeliveryRepository};

#[async_trait]
impl DeliveryRepository for HttpRepository {
    async fn record_delivery(&self, draft: &DeliveryDraft) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/deliveries", draft).await
    }
}
