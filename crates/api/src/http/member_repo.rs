use async_trait::async_trait;
use blitz_core::model::{GroupId, Member, MemberDraft, MemberId};
use reqwest::Method;

use super::HttpRepository;
use crate::repository::{ApiError, MemberRepository};

#[async_trait]
impl MemberRepository for HttpRepository {
    async fn list_members(&self, group: &GroupId) -> Result<Vec<Member>, ApiError> {
        self.get_list(&format!("/members/group/{group}")).await
    }

    async fn create_member(&self, draft: &MemberDraft) -> Result<(), ApiError> {
        let path = self.config().endpoints().members_create.clone();
        self.send_json(Method::POST, &path, draft).await
    }

    async fn delete_member(&self, id: &MemberId) -> Result<(), ApiError> {
        self.delete(&format!("/members/{id}")).await
    }
}
