pub mod chart_vm;
mod confirm_vm;
mod institution_vm;
mod map_vm;
mod notice_vm;
mod report_vm;

pub use chart_vm::{
    BarVm, PairedBarVm, group_bars, institution_bars, progress_bars, ranking_bars, trend_bars,
};
pub use confirm_vm::{DeleteConfirmation, DeleteTarget, DialogChoice};
pub use institution_vm::{InstitutionRowVm, TotalsVm, map_institution_rows, map_totals};
pub use map_vm::{MarkerVm, VIEW_HEIGHT, VIEW_WIDTH, legend_counts, project_markers};
pub use notice_vm::{GENERIC_FAILURE, ValidationSource, failure_notice, validation_message};
pub use report_vm::{KpiCardVm, ReportOverviewVm, map_report_overview};
