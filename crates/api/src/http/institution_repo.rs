use async_trait::async_trait;
use blitz_core::model::{GroupId, Institution, InstitutionDraft, InstitutionId};
use reqwest::Method;

use super::HttpRepository;
use crate::repository::{ApiError, InstitutionRepository};

#[async_trait]
impl InstitutionRepository for HttpRepository {
    async fn list_institutions(&self, group: &GroupId) -> Result<Vec<Institution>, ApiError> {
        self.get_list(&format!("/institutions/group/{group}")).await
    }

    async fn create_institution(&self, draft: &InstitutionDraft) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/institutions", draft).await
    }

    async fn update_institution(
        &self,
        id: &InstitutionId,
        draft: &InstitutionDraft,
    ) -> Result<(), ApiError> {
        self.send_json(Method::PUT, &format!("/institutions/{id}"), draft)
            .await
    }

    async fn delete_institution(&self, id: &InstitutionId) -> Result<(), ApiError> {
        self.delete(&format!("/institutions/{id}")).await
    }
}
