//! Shared error types for the services crate.

use thiserror::Error;

use api::http::HttpInitError;
use api::{ApiError, ConfigError};
use blitz_core::model::{DeliveryError, GroupError, InstitutionError, MemberError};
use blitz_core::report::ReportError;

/// Errors emitted by `GroupService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GroupServiceError {
    #[error(transparent)]
    Group(#[from] GroupError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `InstitutionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstitutionServiceError {
    #[error(transparent)]
    Institution(#[from] InstitutionError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `MemberService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MemberServiceError {
    #[error(transparent)]
    Member(#[from] MemberError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `DeliveryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeliveryServiceError {
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `ReportService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportServiceError {
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to render PDF: {0}")]
    Pdf(String),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<printpdf::Error> for ReportServiceError {
    fn from(err: printpdf::Error) -> Self {
        ReportServiceError::Pdf(err.to_string())
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Http(#[from] HttpInitError),
}
