use blitz_core::format::{format_count, format_percent};
use blitz_core::model::{Institution, InstitutionId};
use blitz_core::progress::{aggregate_totals, classify, tone_for};

/// UI-ready institution row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstitutionRowVm {
    pub id: InstitutionId,
    pub nombre: String,
    pub address: String,
    pub jornada: &'static str,
    pub target: String,
    pub delivered: String,
    pub status: &'static str,
    /// CSS class suffix for the status badge.
    pub tone: &'static str,
    pub maps_url: Option<String>,
}

#[must_use]
pub fn map_institution_rows(institutions: &[Institution]) -> Vec<InstitutionRowVm> {
    institutions
        .iter()
        .map(|inst| {
            let classification = classify(inst);
            InstitutionRowVm {
                id: inst.id.clone(),
                nombre: inst.nombre.clone(),
                address: inst.address_label().to_string(),
                jornada: inst.jornada.label(),
                target: format_count(inst.target()),
                delivered: format_count(inst.delivered()),
                status: classification.label(),
                tone: tone_for(classification).as_str(),
                maps_url: inst.maps_url.clone(),
            }
        })
        .collect()
}

/// Header figures for a group's institution list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TotalsVm {
    pub target: String,
    pub delivered: String,
    pub percentage: String,
}

#[must_use]
pub fn map_totals(institutions: &[Institution]) -> TotalsVm {
    let totals = aggregate_totals(institutions);
    TotalsVm {
        target: format_count(totals.total_target),
        delivered: format_count(totals.total_delivered),
        percentage: format_percent(totals.percentage),
    }
}
