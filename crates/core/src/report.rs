//! Layout model of the exported summary report.
//!
//! `ReportDocument` fixes which fields appear and in which order; the PDF
//! renderer only decides how they look.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::format::{format_count, format_percent};
use crate::model::{ReportBundle, ReportSummary};
use crate::progress::percentage;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    #[error("statistics have not been loaded yet")]
    MissingBundle,
    #[error("statistics have no summary to export")]
    MissingSummary,
}

/// Knobs that change the numbers in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Goal used when the backend reports no target (missing or zero).
    pub default_goal: Option<u64>,
}

pub const TABLE_HEADER: [&str; 3] = ["Grupo / Equipo", "Cantidad Entregada", "% del Total General"];
pub const SIGNATURES: [&str; 2] = ["Firma Coordinación", "Sello de Operaciones"];

/// Share of the overall delivered total contributed by one group, one decimal.
#[must_use]
pub fn contribution_share(group_delivered: u64, total_delivered: u64) -> f64 {
    percentage(group_delivered, total_delivered)
}

/// Target after applying the configured fallback goal.
#[must_use]
pub fn effective_target(summary: &ReportSummary, options: ReportOptions) -> u64 {
    match (summary.meta_estudiantes, options.default_goal) {
        (0, Some(goal)) => goal,
        (meta, _) => meta,
    }
}

/// Download name for a report generated on `date`.
#[must_use]
pub fn report_filename(date: NaiveDate) -> String {
    format!("Reporte_Blitz_{}.pdf", date.format("%Y-%m-%d"))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportKpis {
    pub total_delivered: u64,
    pub target: u64,
    pub percentage: f64,
}

impl ReportKpis {
    /// Label/value pairs in document order.
    #[must_use]
    pub fn cells(&self) -> [(&'static str, String); 3] {
        [
            ("TOTAL ENTREGADO", format_count(self.total_delivered)),
            ("META OBJETIVO", format_count(self.target)),
            ("AVANCE %", format_percent(self.percentage)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub group: String,
    pub delivered: u64,
    pub share: f64,
}

impl ReportRow {
    #[must_use]
    pub fn cells(&self) -> [String; 3] {
        [
            self.group.clone(),
            format_count(self.delivered),
            format_percent(self.share),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub generated_on: String,
    pub kpis: ReportKpis,
    pub rows: Vec<ReportRow>,
    pub filename: String,
}

impl ReportDocument {
    /// Lay out the report for `bundle` as of `date`.
    ///
    /// Group rows keep the order the backend sent them in.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::MissingBundle` when nothing was loaded and
    /// `ReportError::MissingSummary` when the bundle lacks its summary.
    pub fn build(
        bundle: Option<&ReportBundle>,
        date: NaiveDate,
        options: ReportOptions,
    ) -> Result<Self, ReportError> {
        let bundle = bundle.ok_or(ReportError::MissingBundle)?;
        let summary = bundle.summary.as_ref().ok_or(ReportError::MissingSummary)?;

        let total_delivered = summary.total_entregado;
        let target = effective_target(summary, options);

        let rows = bundle
            .group_performance
            .iter()
            .map(|group| ReportRow {
                group: group.nombre.clone(),
                delivered: group.total_entregado,
                share: contribution_share(group.total_entregado, total_delivered),
            })
            .collect();

        Ok(Self {
            title: format!("REPORTE EJECUTIVO BLITZ {}", date.year()),
            generated_on: format!("Generado el: {}", date.format("%d/%m/%Y")),
            kpis: ReportKpis {
                total_delivered,
                target,
                percentage: percentage(total_delivered, target),
            },
            rows,
            filename: report_filename(date),
        })
    }

    #[must_use]
    pub fn signatures(&self) -> [&'static str; 2] {
        SIGNATURES
    }
}
