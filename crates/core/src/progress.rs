//! Delivery-progress aggregation.
//!
//! Pure functions over already-fetched institutions. Nothing here is cached:
//! classifications are recomputed every time a view renders.

use crate::model::{Institution, ProgressSnapshot};

/// Completion status of one institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// delivered ≥ target and target > 0
    Completed,
    /// 0 < delivered < target
    Partial,
    /// nothing delivered yet, or no measurable target
    Pending,
}

impl Classification {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Classification::Completed => "Completado",
            Classification::Partial => "Parcial",
            Classification::Pending => "Pendiente",
        }
    }
}

/// Presentation token for a classification. Views map tokens to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Positive,
    Warning,
    Neutral,
}

impl Tone {
    /// CSS-friendly name of the token.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Warning => "warning",
            Tone::Neutral => "neutral",
        }
    }
}

/// Summed targets and deliveries across a list of institutions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub total_target: u64,
    pub total_delivered: u64,
    pub percentage: f64,
}

/// Classify raw counts.
#[must_use]
pub fn classify_counts(delivered: u64, target: u64) -> Classification {
    if target > 0 && delivered >= target {
        Classification::Completed
    } else if delivered > 0 && delivered < target {
        Classification::Partial
    } else {
        Classification::Pending
    }
}

/// Classify an institution by its own target and delivered count.
#[must_use]
pub fn classify(institution: &Institution) -> Classification {
    classify_counts(institution.delivered(), institution.target())
}

#[must_use]
pub fn tone_for(classification: Classification) -> Tone {
    match classification {
        Classification::Completed => Tone::Positive,
        Classification::Partial => Tone::Warning,
        Classification::Pending => Tone::Neutral,
    }
}

/// Sum target and delivered counts; the percentage is 0 for an empty target.
#[must_use]
pub fn aggregate_totals(institutions: &[Institution]) -> Totals {
    let (total_target, total_delivered) =
        institutions
            .iter()
            .fold((0_u64, 0_u64), |(target, delivered), inst| {
                (
                    target.saturating_add(inst.target()),
                    delivered.saturating_add(inst.delivered()),
                )
            });

    Totals {
        total_target,
        total_delivered,
        percentage: percentage(total_delivered, total_target),
    }
}

/// `part / whole × 100`, rounded to one decimal; 0 when `whole` is 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_one_decimal(part as f64 / whole as f64 * 100.0)
}

#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Units still missing to reach the global goal, never negative.
#[must_use]
pub fn remaining(progress: &ProgressSnapshot) -> u64 {
    progress.meta.saturating_sub(progress.entregado)
}
