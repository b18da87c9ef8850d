use thiserror::Error;

use crate::model::{DeliveryError, GroupError, InstitutionError, MemberError};
use crate::report::ReportError;

/// Any validation failure raised by the domain layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Group(#[from] GroupError),
    #[error(transparent)]
    Institution(#[from] InstitutionError),
    #[error(transparent)]
    Member(#[from] MemberError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
