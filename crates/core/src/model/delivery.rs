use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::model::ids::{GroupId, InstitutionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeliveryError {
    #[error("quantity must be a whole number of at least 1")]
    InvalidQuantity,

    #[error("date must be formatted as YYYY-MM-DD")]
    InvalidDate,
}

/// A delivery event as posted to `POST /deliveries`.
///
/// Delivery events are write-only here: the backend folds them into each
/// institution's delivered count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryDraft {
    pub cantidad: u64,
    pub fecha: NaiveDate,
    pub institution_id: InstitutionId,
    pub group_id: GroupId,
}

impl DeliveryDraft {
    /// Validate the delivery form.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError::InvalidQuantity` unless `cantidad` is an
    /// integer ≥ 1, and `DeliveryError::InvalidDate` for an unparseable date.
    pub fn from_form(
        cantidad: &str,
        fecha: &str,
        institution_id: InstitutionId,
        group_id: GroupId,
    ) -> Result<Self, DeliveryError> {
        let cantidad: u64 = cantidad
            .trim()
            .parse()
            .map_err(|_| DeliveryError::InvalidQuantity)?;
        if cantidad < 1 {
            return Err(DeliveryError::InvalidQuantity);
        }
        let fecha = NaiveDate::parse_from_str(fecha.trim(), "%Y-%m-%d")
            .map_err(|_| DeliveryError::InvalidDate)?;

        Ok(Self {
            cantidad,
            fecha,
            institution_id,
            group_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(cantidad: &str, fecha: &str) -> Result<DeliveryDraft, DeliveryError> {
        DeliveryDraft::from_form(cantidad, fecha, InstitutionId::new("5"), GroupId::new("2"))
    }

    #[test]
    fn rejects_missing_or_zero_quantity() {
        assert_eq!(draft("", "2026-02-20").unwrap_err(), DeliveryError::InvalidQuantity);
        assert_eq!(draft("0", "2026-02-20").unwrap_err(), DeliveryError::InvalidQuantity);
        assert_eq!(draft("-4", "2026-02-20").unwrap_err(), DeliveryError::InvalidQuantity);
        assert_eq!(draft("2.5", "2026-02-20").unwrap_err(), DeliveryError::InvalidQuantity);
    }

    #[test]
    fn rejects_bad_date() {
        assert_eq!(draft("10", "20/02/2026").unwrap_err(), DeliveryError::InvalidDate);
    }

    #[test]
    fn serializes_payload_shape() {
        let d = draft(" 50 ", "2026-02-20").unwrap();
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["cantidad"], 50);
        assert_eq!(json["fecha"], "2026-02-20");
        assert_eq!(json["institution_id"], "5");
        assert_eq!(json["group_id"], "2");
    }
}
