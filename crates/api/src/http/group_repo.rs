use async_trait::async_trait;
use blitz_core::model::{Group, GroupDraft, GroupId};
use reqwest::Method;

use super::HttpRepository;
use crate::repository::{ApiError, GroupRepository};

#[async_trait]
impl GroupRepository for HttpRepository {
    async fn list_groups(&self) -> Result<Vec<Group>, ApiError> {
        self.get_list("/groups").await
    }

    async fn create_group(&self, draft: &GroupDraft) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/groups", draft).await
    }

    async fn delete_group(&self, id: &GroupId) -> Result<(), ApiError> {
        // The deployed route has no slash between the collection and the id.
        self.delete(&format!("/groups{id}")).await
    }
}
