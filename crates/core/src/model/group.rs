use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::GroupId;
use crate::model::lenient;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GroupError {
    #[error("group name cannot be empty")]
    EmptyName,
}

/// An organizational team responsible for one or more institutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub nombre: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub lider: Option<String>,
}

impl Group {
    /// Leader name for display, with the placeholder used by the roster.
    #[must_use]
    pub fn leader_label(&self) -> &str {
        self.lider.as_deref().unwrap_or("Sin asignar")
    }
}

/// Validated payload for `POST /groups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupDraft {
    nombre: String,
    lider: String,
}

impl GroupDraft {
    /// Build a draft from raw form input.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::EmptyName` if the trimmed name is empty.
    pub fn new(nombre: impl Into<String>, lider: impl Into<String>) -> Result<Self, GroupError> {
        let nombre = nombre.into().trim().to_string();
        if nombre.is_empty() {
            return Err(GroupError::EmptyName);
        }
        Ok(Self {
            nombre,
            lider: lider.into().trim().to_string(),
        })
    }

    #[must_use]
    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    #[must_use]
    pub fn lider(&self) -> Option<&str> {
        Some(self.lider.as_str()).filter(|l| !l.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_and_requires_name() {
        assert_eq!(GroupDraft::new("   ", "Ana").unwrap_err(), GroupError::EmptyName);

        let draft = GroupDraft::new("  Norte ", "  ").unwrap();
        assert_eq!(draft.nombre(), "Norte");
        assert_eq!(draft.lider(), None);
    }

    #[test]
    fn group_decodes_without_leader() {
        let group: Group = serde_json::from_str(r#"{"id": 1, "nombre": "Sur", "lider": null}"#)
            .unwrap();
        assert_eq!(group.id, GroupId::new("1"));
        assert_eq!(group.leader_label(), "Sin asignar");
    }
}
