use std::sync::Arc;

use api::repository::{DeliveryRepository, InstitutionRepository};
use blitz_core::model::{DeliveryDraft, GroupId, Institution, InstitutionId};
use tracing::info;

use crate::Clock;
use crate::error::DeliveryServiceError;

/// Records delivery events and reloads the affected institutions.
#[derive(Clone)]
pub struct DeliveryService {
    clock: Clock,
    deliveries: Arc<dyn DeliveryRepository>,
    institutions: Arc<dyn InstitutionRepository>,
}

impl DeliveryService {
    #[must_use]
    pub fn new(
        clock: Clock,
        deliveries: Arc<dyn DeliveryRepository>,
        institutions: Arc<dyn InstitutionRepository>,
    ) -> Self {
        Self {
            clock,
            deliveries,
            institutions,
        }
    }

    /// Date pre-filled in the delivery form.
    #[must_use]
    pub fn default_date(&self) -> String {
        self.clock.today().format("%Y-%m-%d").to_string()
    }

    /// Validate and record a delivery, then reload the group's institutions so
    /// the new delivered count shows.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryServiceError::Delivery` for an invalid quantity or
    /// date (nothing is sent).
    /// Returns `DeliveryServiceError::Api` if the write or the reload fails.
    pub async fn record(
        &self,
        cantidad: &str,
        fecha: &str,
        institution: &InstitutionId,
        group: &GroupId,
    ) -> Result<Vec<Institution>, DeliveryServiceError> {
        let draft = DeliveryDraft::from_form(cantidad, fecha, institution.clone(), group.clone())?;
        self.deliveries.record_delivery(&draft).await?;
        info!(%institution, cantidad = draft.cantidad, "delivery recorded");
        Ok(self.institutions.list_institutions(group).await?)
    }
}
