#![forbid(unsafe_code)]

pub mod app_services;
pub mod dashboard_service;
pub mod delivery_service;
pub mod error;
pub mod group_service;
pub mod group_workspace;
pub mod institution_service;
pub mod map_service;
pub mod member_service;
pub mod report;

pub use blitz_core::Clock;

pub use app_services::{AppServices, ReportSettings};
pub use dashboard_service::{DashboardData, DashboardService};
pub use delivery_service::DeliveryService;
pub use error::{
    AppServicesError, DeliveryServiceError, GroupServiceError, InstitutionServiceError,
    MemberServiceError, ReportServiceError,
};
pub use group_service::GroupService;
pub use group_workspace::{GroupWorkspace, load_group_workspace};
pub use institution_service::InstitutionService;
pub use map_service::MapService;
pub use member_service::MemberService;
pub use report::ReportService;
