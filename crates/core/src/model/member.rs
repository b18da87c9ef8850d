use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{GroupId, MemberId};
use crate::model::lenient;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MemberError {
    #[error("member name cannot be empty")]
    EmptyName,
}

/// A volunteer on a group's team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub nombre: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub telefono: Option<String>,
    #[serde(default)]
    pub group_id: Option<GroupId>,
}

impl Member {
    /// Upper-cased first letter, used as the avatar.
    #[must_use]
    pub fn initial(&self) -> String {
        self.nombre
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// WhatsApp deep link built from the digits of the phone number.
    #[must_use]
    pub fn whatsapp_url(&self) -> Option<String> {
        let digits: String = self
            .telefono
            .as_deref()?
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if digits.is_empty() {
            None
        } else {
            Some(format!("https://wa.me/{digits}"))
        }
    }
}

/// Validated payload for the member create endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDraft {
    pub nombre: String,
    pub telefono: String,
    pub group_id: GroupId,
}

impl MemberDraft {
    /// # Errors
    ///
    /// Returns `MemberError::EmptyName` if the trimmed name is empty.
    pub fn new(
        nombre: &str,
        telefono: &str,
        group_id: GroupId,
    ) -> Result<Self, MemberError> {
        let nombre = nombre.trim();
        if nombre.is_empty() {
            return Err(MemberError::EmptyName);
        }
        Ok(Self {
            nombre: nombre.to_string(),
            telefono: telefono.trim().to_string(),
            group_id,
        })
    }
}
