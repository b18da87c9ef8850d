mod dashboard;
mod delivery;
mod group;
mod ids;
mod institution;
pub mod lenient;
mod map;
mod member;
mod report;

pub use ids::{GroupId, InstitutionId, MemberId, ParseIdError, PointId};

pub use dashboard::{GroupDelivery, ProgressSnapshot};
pub use delivery::{DeliveryDraft, DeliveryError};
pub use group::{Group, GroupDraft, GroupError};
pub use institution::{Institution, InstitutionDraft, InstitutionError, InstitutionForm, Jornada};
pub use map::{MapPoint, MapPointStatus};
pub use member::{Member, MemberDraft, MemberError};
pub use report::{DailyTotal, GroupPerformance, ReportBundle, ReportSummary};
