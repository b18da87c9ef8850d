use blitz_core::model::{GroupId, Institution, Member};
use futures::join;

use crate::error::{InstitutionServiceError, MemberServiceError};
use crate::institution_service::InstitutionService;
use crate::member_service::MemberService;

/// Both lists of the group detail screen.
///
/// Each half succeeds or fails on its own, so a broken member list still
/// leaves the institutions usable.
#[derive(Debug)]
pub struct GroupWorkspace {
    pub institutions: Result<Vec<Institution>, InstitutionServiceError>,
    pub members: Result<Vec<Member>, MemberServiceError>,
}

/// Fetch institutions and members of `group` concurrently.
pub async fn load_group_workspace(
    institutions: &InstitutionService,
    members: &MemberService,
    group: &GroupId,
) -> GroupWorkspace {
    let (institutions, members) = join!(institutions.list(group), members.list(group));
    GroupWorkspace {
        institutions,
        members,
    }
}
