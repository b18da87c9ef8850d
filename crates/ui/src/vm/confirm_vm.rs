use blitz_core::model::{Group, GroupId, Institution, InstitutionId, Member, MemberId};

/// Something the user asked to delete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteTarget {
    Group { id: GroupId, nombre: String },
    Institution { id: InstitutionId, nombre: String },
    Member { id: MemberId, nombre: String },
}

impl DeleteTarget {
    #[must_use]
    pub fn group(group: &Group) -> Self {
        Self::Group {
            id: group.id.clone(),
            nombre: group.nombre.clone(),
        }
    }

    #[must_use]
    pub fn institution(institution: &Institution) -> Self {
        Self::Institution {
            id: institution.id.clone(),
            nombre: institution.nombre.clone(),
        }
    }

    #[must_use]
    pub fn member(member: &Member) -> Self {
        Self::Member {
            id: member.id.clone(),
            nombre: member.nombre.clone(),
        }
    }

    /// Question shown in the confirmation dialog.
    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            Self::Group { nombre, .. } => format!(
                "¿Eliminar el grupo \"{nombre}\"? Se eliminarán también sus instituciones y miembros."
            ),
            Self::Institution { nombre, .. } => {
                format!("¿Eliminar la institución \"{nombre}\"?")
            }
            Self::Member { nombre, .. } => format!("¿Eliminar a \"{nombre}\" del equipo?"),
        }
    }
}

/// How the confirmation dialog was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogChoice {
    Confirm,
    Cancel,
}

/// Two-step delete: `request` only remembers the target, nothing is sent
/// until `confirm` hands it back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pending: Option<DeleteTarget>,
}

impl DeleteConfirmation {
    pub fn request(&mut self, target: DeleteTarget) {
        self.pending = Some(target);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the pending target. A second call returns `None`.
    pub fn confirm(&mut self) -> Option<DeleteTarget> {
        self.pending.take()
    }

    /// Close the dialog. Only a confirmed choice yields the target.
    pub fn resolve(&mut self, choice: DialogChoice) -> Option<DeleteTarget> {
        match choice {
            DialogChoice::Confirm => self.confirm(),
            DialogChoice::Cancel => {
                self.cancel();
                None
            }
        }
    }

    #[must_use]
    pub fn pending(&self) -> Option<&DeleteTarget> {
        self.pending.as_ref()
    }
}
