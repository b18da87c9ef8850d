mod components;
mod dashboard;
mod delete_flow;
mod group_detail;
mod groups;
mod map;
mod reports;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use components::{BarList, ConfirmDialog, ErrorPanel, ExternalLink, KpiCard, Notice};
pub use dashboard::DashboardView;
pub use delete_flow::{Refreshed, delete_target};
pub use group_detail::GroupDetailView;
pub use groups::GroupsView;
pub use map::MapView;
pub use reports::ReportsView;
pub use state::{ViewError, ViewState, view_state_from_resource, view_state_with_latest};
