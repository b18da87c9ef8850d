//! User-facing text for failed submissions.

use blitz_core::Error;
use blitz_core::model::{DeliveryError, GroupError, InstitutionError, MemberError};
use blitz_core::report::ReportError;
use services::{
    DeliveryServiceError, GroupServiceError, InstitutionServiceError, MemberServiceError,
    ReportServiceError,
};

pub const GENERIC_FAILURE: &str = "No se pudo completar la operación. Intenta de nuevo.";

/// Service errors that may carry a domain validation failure.
pub trait ValidationSource {
    fn validation(&self) -> Option<Error>;
}

impl ValidationSource for GroupServiceError {
    fn validation(&self) -> Option<Error> {
        match self {
            GroupServiceError::Group(err) => Some(err.clone().into()),
            _ => None,
        }
    }
}

impl ValidationSource for InstitutionServiceError {
    fn validation(&self) -> Option<Error> {
        match self {
            InstitutionServiceError::Institution(err) => Some(err.clone().into()),
            _ => None,
        }
    }
}

impl ValidationSource for MemberServiceError {
    fn validation(&self) -> Option<Error> {
        match self {
            MemberServiceError::Member(err) => Some(err.clone().into()),
            _ => None,
        }
    }
}

impl ValidationSource for DeliveryServiceError {
    fn validation(&self) -> Option<Error> {
        match self {
            DeliveryServiceError::Delivery(err) => Some(err.clone().into()),
            _ => None,
        }
    }
}

impl ValidationSource for ReportServiceError {
    fn validation(&self) -> Option<Error> {
        match self {
            ReportServiceError::Report(err) => Some((*err).into()),
            _ => None,
        }
    }
}

#[must_use]
pub fn validation_message(err: &Error) -> &'static str {
    match err {
        Error::Group(GroupError::EmptyName) => "El nombre del grupo es obligatorio.",
        Error::Institution(InstitutionError::EmptyName) => {
            "El nombre de la institución es obligatorio."
        }
        Error::Institution(InstitutionError::InvalidMapsUrl) => {
            "El enlace de Google Maps debe empezar con http:// o https://."
        }
        Error::Member(MemberError::EmptyName) => "El nombre del miembro es obligatorio.",
        Error::Delivery(DeliveryError::InvalidQuantity) => {
            "Ingresa una cantidad entera mayor o igual a 1."
        }
        Error::Delivery(DeliveryError::InvalidDate) => "Ingresa una fecha válida (AAAA-MM-DD).",
        Error::Report(ReportError::MissingSummary | ReportError::MissingBundle) => {
            "No hay datos de resumen para exportar."
        }
        _ => GENERIC_FAILURE,
    }
}

/// Text shown after a failed submission.
#[must_use]
pub fn failure_notice(err: &impl ValidationSource) -> &'static str {
    err.validation()
        .as_ref()
        .map_or(GENERIC_FAILURE, validation_message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ApiError;

    #[test]
    fn validation_errors_get_specific_text() {
        let err = DeliveryServiceError::Delivery(DeliveryError::InvalidQuantity);
        assert_eq!(
            failure_notice(&err),
            "Ingresa una cantidad entera mayor o igual a 1."
        );
        let err = ReportServiceError::Report(ReportError::MissingSummary);
        assert_eq!(failure_notice(&err), "No hay datos de resumen para exportar.");
    }

    #[test]
    fn backend_errors_get_generic_text() {
        let err = GroupServiceError::Api(ApiError::Status(500));
        assert_eq!(failure_notice(&err), GENERIC_FAILURE);
    }
}
