use std::sync::Arc;

use api::repository::GroupRepository;
use blitz_core::model::{Group, GroupDraft, GroupId};
use tracing::info;

use crate::error::GroupServiceError;

/// Group roster operations. Every write returns the re-listed roster.
#[derive(Clone)]
pub struct GroupService {
    groups: Arc<dyn GroupRepository>,
}

impl GroupService {
    #[must_use]
    pub fn new(groups: Arc<dyn GroupRepository>) -> Self {
        Self { groups }
    }

    /// # Errors
    ///
    /// Returns `GroupServiceError::Api` if the backend cannot be read.
    pub async fn list(&self) -> Result<Vec<Group>, GroupServiceError> {
        Ok(self.groups.list_groups().await?)
    }

    /// Validate and create a group, then reload the roster.
    ///
    /// # Errors
    ///
    /// Returns `GroupServiceError::Group` for a blank name (nothing is sent).
    /// Returns `GroupServiceError::Api` if the write or the reload fails.
    pub async fn create(&self, nombre: &str, lider: &str) -> Result<Vec<Group>, GroupServiceError> {
        let draft = GroupDraft::new(nombre, lider)?;
        self.groups.create_group(&draft).await?;
        info!(nombre = draft.nombre(), "group created");
        self.list().await
    }

    /// Delete a confirmed group, then reload the roster.
    ///
    /// # Errors
    ///
    /// Returns `GroupServiceError::Api` if the delete or the reload fails.
    pub async fn delete(&self, id: &GroupId) -> Result<Vec<Group>, GroupServiceError> {
        self.groups.delete_group(id).await?;
        info!(%id, "group deleted");
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::InMemoryRepository;

    #[tokio::test]
    async fn writes_return_fresh_roster() {
        let repo = InMemoryRepository::new();
        let service = GroupService::new(Arc::new(repo.clone()));

        let after_create = service.create(" Norte ", "Ana").await.unwrap();
        assert_eq!(after_create, service.list().await.unwrap());
        assert_eq!(after_create[0].nombre, "Norte");

        let id = after_create[0].id.clone();
        let after_delete = service.delete(&id).await.unwrap();
        assert!(after_delete.is_empty());
    }

    #[tokio::test]
    async fn blank_name_never_reaches_backend() {
        let repo = InMemoryRepository::new();
        let service = GroupService::new(Arc::new(repo.clone()));

        let err = service.create("  ", "Ana").await.unwrap_err();
        assert!(matches!(err, GroupServiceError::Group(_)));
        assert!(repo.calls().is_empty());
    }
}
