use std::sync::Arc;

use api::repository::MemberRepository;
use blitz_core::model::{GroupId, Member, MemberDraft, MemberId};
use tracing::info;

use crate::error::MemberServiceError;

/// Team roster of a group.
#[derive(Clone)]
pub struct MemberService {
    members: Arc<dyn MemberRepository>,
}

impl MemberService {
    #[must_use]
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    /// # Errors
    ///
    /// Returns `MemberServiceError::Api` if the backend cannot be read.
    pub async fn list(&self, group: &GroupId) -> Result<Vec<Member>, MemberServiceError> {
        Ok(self.members.list_members(group).await?)
    }

    /// # Errors
    ///
    /// Returns `MemberServiceError::Member` for a blank name.
    /// Returns `MemberServiceError::Api` if the write or the reload fails.
    pub async fn create(
        &self,
        nombre: &str,
        telefono: &str,
        group: &GroupId,
    ) -> Result<Vec<Member>, MemberServiceError> {
        let draft = MemberDraft::new(nombre, telefono, group.clone())?;
        self.members.create_member(&draft).await?;
        info!(%group, "member added");
        self.list(group).await
    }

    /// # Errors
    ///
    /// Returns `MemberServiceError::Api` if the delete or the reload fails.
    pub async fn delete(
        &self,
        id: &MemberId,
        group: &GroupId,
    ) -> Result<Vec<Member>, MemberServiceError> {
        self.members.delete_member(id).await?;
        info!(%id, "member removed");
        self.list(group).await
    }
}
