use blitz_core::model::{Group, GroupId, Institution, Member};
use tracing::warn;

use crate::context::AppContext;
use crate::vm::{DeleteTarget, GENERIC_FAILURE, failure_notice};

/// The list a completed delete hands back.
#[derive(Clone, Debug, PartialEq)]
pub enum Refreshed {
    Groups(Vec<Group>),
    Institutions(Vec<Institution>),
    Members(Vec<Member>),
}

/// Send the DELETE for a confirmed target.
///
/// Institutions and members are re-listed for `scope`, the group page they
/// were deleted from; a group delete re-lists every group.
///
/// # Errors
///
/// Returns the notice text for a failed delete or reload.
pub async fn delete_target(
    ctx: &AppContext,
    target: DeleteTarget,
    scope: Option<&GroupId>,
) -> Result<Refreshed, &'static str> {
    match (target, scope) {
        (DeleteTarget::Group { id, .. }, _) => ctx
            .groups()
            .delete(&id)
            .await
            .map(Refreshed::Groups)
            .map_err(|err| failure_notice(&err)),
        (DeleteTarget::Institution { id, .. }, Some(group)) => ctx
            .institutions()
            .delete(&id, group)
            .await
            .map(Refreshed::Institutions)
            .map_err(|err| failure_notice(&err)),
        (DeleteTarget::Member { id, .. }, Some(group)) => ctx
            .members()
            .delete(&id, group)
            .await
            .map(Refreshed::Members)
            .map_err(|err| failure_notice(&err)),
        (target, None) => {
            warn!(?target, "delete requested outside a group page");
            Err(GENERIC_FAILURE)
        }
    }
}
