use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use url::Url;

use crate::model::ids::{GroupId, InstitutionId};
use crate::model::lenient;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InstitutionError {
    #[error("institution name cannot be empty")]
    EmptyName,

    #[error("maps link must be an absolute http(s) URL")]
    InvalidMapsUrl,
}

//
// ─── SHIFT ─────────────────────────────────────────────────────────────────────
//

/// School shift. The wire value is the Spanish time-of-day word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Jornada {
    #[default]
    #[serde(rename = "Mañana")]
    Manana,
    #[serde(rename = "Tarde")]
    Tarde,
    #[serde(rename = "Noche")]
    Noche,
}

impl Jornada {
    pub const ALL: [Jornada; 3] = [Jornada::Manana, Jornada::Tarde, Jornada::Noche];

    /// Value sent to and received from the backend.
    #[must_use]
    pub fn wire(self) -> &'static str {
        match self {
            Jornada::Manana => "Mañana",
            Jornada::Tarde => "Tarde",
            Jornada::Noche => "Noche",
        }
    }

    /// Label shown in the shift selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Jornada::Manana => "Matutina",
            Jornada::Tarde => "Vespertina",
            Jornada::Noche => "Nocturna",
        }
    }

    /// Parse a wire value; anything unrecognised falls back to the morning shift.
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "tarde" => Jornada::Tarde,
            "noche" => Jornada::Noche,
            _ => Jornada::Manana,
        }
    }
}

impl fmt::Display for Jornada {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

impl<'de> Deserialize<'de> for Jornada {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Jornada::from_wire).unwrap_or_default())
    }
}

//
// ─── INSTITUTION ───────────────────────────────────────────────────────────────
//

/// A delivery target site with a population goal.
///
/// `entregados` is computed by the backend from delivery events; older
/// revisions send it as `total_entregado`, some send both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "InstitutionWire")]
pub struct Institution {
    pub id: InstitutionId,
    pub nombre: String,
    pub direccion: Option<String>,
    pub jornada: Jornada,
    pub estudiantes: u64,
    pub maps_url: Option<String>,
    pub group_id: Option<GroupId>,
    pub entregados: u64,
}

#[derive(Deserialize)]
struct InstitutionWire {
    id: InstitutionId,
    nombre: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    direccion: Option<String>,
    #[serde(default)]
    jornada: Jornada,
    #[serde(default, deserialize_with = "lenient::count")]
    estudiantes: u64,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    maps_url: Option<String>,
    #[serde(default)]
    group_id: Option<GroupId>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    entregados: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    total_entregado: Option<u64>,
}

impl From<InstitutionWire> for Institution {
    fn from(wire: InstitutionWire) -> Self {
        Self {
            id: wire.id,
            nombre: wire.nombre,
            direccion: wire.direccion,
            jornada: wire.jornada,
            estudiantes: wire.estudiantes,
            maps_url: wire.maps_url,
            group_id: wire.group_id,
            entregados: wire.entregados.or(wire.total_entregado).unwrap_or(0),
        }
    }
}

impl Institution {
    /// Target population used by the progress aggregator.
    #[must_use]
    pub fn target(&self) -> u64 {
        self.estudiantes
    }

    /// Delivered count used by the progress aggregator.
    #[must_use]
    pub fn delivered(&self) -> u64 {
        self.entregados
    }

    #[must_use]
    pub fn address_label(&self) -> &str {
        self.direccion.as_deref().unwrap_or("Sin dirección")
    }
}

//
// ─── FORM / DRAFT ──────────────────────────────────────────────────────────────
//

/// Raw text state of the institution form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstitutionForm {
    pub nombre: String,
    pub direccion: String,
    pub jornada: Jornada,
    pub estudiantes: String,
    pub maps_url: String,
}

impl InstitutionForm {
    /// Pre-fill the form for editing an existing institution.
    #[must_use]
    pub fn from_institution(institution: &Institution) -> Self {
        Self {
            nombre: institution.nombre.clone(),
            direccion: institution.direccion.clone().unwrap_or_default(),
            jornada: institution.jornada,
            estudiantes: institution.estudiantes.to_string(),
            maps_url: institution.maps_url.clone().unwrap_or_default(),
        }
    }
}

/// Validated payload for `POST /institutions` and `PUT /institutions/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstitutionDraft {
    pub nombre: String,
    pub direccion: String,
    pub jornada: Jornada,
    pub estudiantes: u64,
    pub maps_url: String,
    pub group_id: GroupId,
}

impl InstitutionDraft {
    /// Validate form input for the given group.
    ///
    /// `estudiantes` falls back to 0 when it does not parse.
    ///
    /// # Errors
    ///
    /// Returns `InstitutionError::EmptyName` for a blank name and
    /// `InstitutionError::InvalidMapsUrl` for a non-http(s) maps link.
    pub fn from_form(form: &InstitutionForm, group_id: GroupId) -> Result<Self, InstitutionError> {
        let nombre = form.nombre.trim().to_string();
        if nombre.is_empty() {
            return Err(InstitutionError::EmptyName);
        }

        let maps_url = form.maps_url.trim().to_string();
        if !maps_url.is_empty() {
            validate_maps_url(&maps_url)?;
        }

        Ok(Self {
            nombre,
            direccion: form.direccion.trim().to_string(),
            jornada: form.jornada,
            estudiantes: lenient::parse_count(&form.estudiantes),
            maps_url,
            group_id,
        })
    }
}

fn validate_maps_url(raw: &str) -> Result<(), InstitutionError> {
    let parsed = Url::parse(raw).map_err(|_| InstitutionError::InvalidMapsUrl)?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(InstitutionError::InvalidMapsUrl),
    }
}
