use serde::{Deserialize, Serialize};

use crate::model::ids::PointId;
use crate::model::lenient;

/// Two-way marker status. Map points are single locations, so there is no
/// partial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapPointStatus {
    Delivered,
    Pending,
}

impl MapPointStatus {
    #[must_use]
    pub fn from_estado(estado: &str) -> Self {
        if estado.trim().eq_ignore_ascii_case("entregado") {
            Self::Delivered
        } else {
            Self::Pending
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Delivered => "Entregado",
            Self::Pending => "Pendiente",
        }
    }
}

/// A delivery location. Coordinates arrive as numbers or numeric strings;
/// points the backend has not geocoded yet decode with `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub id: PointId,
    #[serde(default, alias = "latitud", deserialize_with = "lenient::opt_decimal")]
    pub lat: Option<f64>,
    #[serde(default, alias = "longitud", deserialize_with = "lenient::opt_decimal")]
    pub lng: Option<f64>,
    pub nombre: String,
    #[serde(default)]
    pub grupo: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub maps_url: Option<String>,
}

impl MapPoint {
    #[must_use]
    pub fn status(&self) -> MapPointStatus {
        MapPointStatus::from_estado(&self.estado)
    }

    /// `(lat, lng)` when both are present and finite.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some((lat, lng)),
            _ => None,
        }
    }
}
