use std::sync::Arc;

use api::repository::InstitutionRepository;
use blitz_core::model::{GroupId, Institution, InstitutionDraft, InstitutionForm, InstitutionId};
use tracing::info;

use crate::error::InstitutionServiceError;

/// Institution registry for one group at a time.
#[derive(Clone)]
pub struct InstitutionService {
    institutions: Arc<dyn InstitutionRepository>,
}

impl InstitutionService {
    #[must_use]
    pub fn new(institutions: Arc<dyn InstitutionRepository>) -> Self {
        Self { institutions }
    }

    /// # Errors
    ///
    /// Returns `InstitutionServiceError::Api` if the backend cannot be read.
    pub async fn list(&self, group: &GroupId) -> Result<Vec<Institution>, InstitutionServiceError> {
        Ok(self.institutions.list_institutions(group).await?)
    }

    /// # Errors
    ///
    /// Returns `InstitutionServiceError::Institution` for invalid form input.
    /// Returns `InstitutionServiceError::Api` if the write or the reload fails.
    pub async fn create(
        &self,
        form: &InstitutionForm,
        group: &GroupId,
    ) -> Result<Vec<Institution>, InstitutionServiceError> {
        let draft = InstitutionDraft::from_form(form, group.clone())?;
        self.institutions.create_institution(&draft).await?;
        info!(%group, nombre = %draft.nombre, "institution created");
        self.list(group).await
    }

    /// # Errors
    ///
    /// Returns `InstitutionServiceError::Institution` for invalid form input.
    /// Returns `InstitutionServiceError::Api` if the write or the reload fails.
    pub async fn update(
        &self,
        id: &InstitutionId,
        form: &InstitutionForm,
        group: &GroupId,
    ) -> Result<Vec<Institution>, InstitutionServiceError> {
        let draft = InstitutionDraft::from_form(form, group.clone())?;
        self.institutions.update_institution(id, &draft).await?;
        info!(%id, "institution updated");
        self.list(group).await
    }

    /// # Errors
    ///
    /// Returns `InstitutionServiceError::Api` if the delete or the reload fails.
    pub async fn delete(
        &self,
        id: &InstitutionId,
        group: &GroupId,
    ) -> Result<Vec<Institution>, InstitutionServiceError> {
        self.institutions.delete_institution(id).await?;
        info!(%id, "institution deleted");
        self.list(group).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::InMemoryRepository;
    use blitz_core::model::Jornada;
    use blitz_core::progress::{Classification, classify};

    fn form(nombre: &str, estudiantes: &str, jornada: Jornada) -> InstitutionForm {
        InstitutionForm {
            nombre: nombre.into(),
            direccion: "Av. Amazonas".into(),
            jornada,
            estudiantes: estudiantes.into(),
            maps_url: String::new(),
        }
    }

    #[tokio::test]
    async fn created_institution_lists_as_pending() {
        let repo = InMemoryRepository::new();
        let group = repo.insert_group("Norte", None);
        let service = InstitutionService::new(Arc::new(repo));

        let listed = service
            .create(&form("Escuela A", "50", Jornada::Tarde), &group)
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        let inst = &listed[0];
        assert_eq!(inst.nombre, "Escuela A");
        assert_eq!(inst.estudiantes, 50);
        assert_eq!(inst.jornada, Jornada::Tarde);
        assert_eq!(inst.entregados, 0);
        assert_eq!(classify(inst), Classification::Pending);
    }

    #[tokio::test]
    async fn update_keeps_delivered_count() {
        let repo = InMemoryRepository::new();
        let group = repo.insert_group("Norte", None);
        let service = InstitutionService::new(Arc::new(repo));

        let listed = service
            .create(&form("Escuela A", "50", Jornada::Manana), &group)
            .await
            .unwrap();
        let mut edit = InstitutionForm::from_institution(&listed[0]);
        edit.estudiantes = "abc".into();

        let updated = service.update(&listed[0].id, &edit, &group).await.unwrap();
        assert_eq!(updated[0].estudiantes, 0);
        assert_eq!(updated[0].nombre, "Escuela A");
        assert_eq!(updated, service.list(&group).await.unwrap());
    }

    #[tokio::test]
    async fn invalid_maps_url_is_rejected_locally() {
        let repo = InMemoryRepository::new();
        let group = repo.insert_group("Norte", None);
        let service = InstitutionService::new(Arc::new(repo.clone()));

        let mut bad = form("Escuela A", "10", Jornada::Noche);
        bad.maps_url = "maps/escuela".into();
        let err = service.create(&bad, &group).await.unwrap_err();
        assert!(matches!(err, InstitutionServiceError::Institution(_)));
        assert!(repo.calls().is_empty());
    }
}
