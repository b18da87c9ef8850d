use serde::{Deserialize, Serialize};

use crate::model::lenient;
use crate::progress::percentage;

/// Global delivery progress from `GET /deliveries/progress`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProgressWire")]
pub struct ProgressSnapshot {
    pub entregado: u64,
    pub meta: u64,
    pub porcentaje: f64,
}

impl ProgressSnapshot {
    /// Build a snapshot, deriving the percentage from the counts.
    #[must_use]
    pub fn from_counts(entregado: u64, meta: u64) -> Self {
        Self {
            entregado,
            meta,
            porcentaje: percentage(entregado, meta),
        }
    }
}

#[derive(Deserialize)]
struct ProgressWire {
    #[serde(default, deserialize_with = "lenient::count")]
    entregado: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    meta: u64,
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    porcentaje: Option<f64>,
}

impl From<ProgressWire> for ProgressSnapshot {
    fn from(wire: ProgressWire) -> Self {
        let derived = Self::from_counts(wire.entregado, wire.meta);
        match wire.porcentaje {
            Some(porcentaje) => Self {
                porcentaje,
                ..derived
            },
            None => derived,
        }
    }
}

/// One slice of the per-group breakdown from `GET /deliveries/groups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GroupDeliveryWire")]
pub struct GroupDelivery {
    pub grupo: String,
    pub entregado: u64,
}

#[derive(Deserialize)]
struct GroupDeliveryWire {
    grupo: String,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    entregado: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    total_entregado: Option<u64>,
}

impl From<GroupDeliveryWire> for GroupDelivery {
    fn from(wire: GroupDeliveryWire) -> Self {
        Self {
            grupo: wire.grupo,
            entregado: wire.entregado.or(wire.total_entregado).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_backend_percentage_when_present() {
        let p: ProgressSnapshot =
            serde_json::from_str(r#"{"entregado": 50, "meta": 130, "porcentaje": "40.0"}"#).unwrap();
        assert_eq!(p.porcentaje, 40.0);
    }

    #[test]
    fn derives_percentage_when_missing() {
        let p: ProgressSnapshot =
            serde_json::from_str(r#"{"entregado": "50", "meta": 130}"#).unwrap();
        assert_eq!(p.porcentaje, 38.5);

        let empty: ProgressSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.porcentaje, 0.0);
    }

    #[test]
    fn group_delivery_accepts_alias() {
        let g: GroupDelivery =
            serde_json::from_str(r#"{"grupo": "Norte", "total_entregado": "12"}"#).unwrap();
        assert_eq!(g.entregado, 12);
    }

    #[test]
    fn group_delivery_prefers_current_name_when_both_sent() {
        let g: GroupDelivery = serde_json::from_str(
            r#"{"grupo": "Norte", "entregado": "15", "total_entregado": "12"}"#,
        )
        .unwrap();
        assert_eq!(g.entregado, 15);

        let g: GroupDelivery =
            serde_json::from_str(r#"{"grupo": "Sur", "entregado": null, "total_entregado": 3}"#)
                .unwrap();
        assert_eq!(g.entregado, 3);
    }
}
