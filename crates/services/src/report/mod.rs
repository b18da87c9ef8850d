use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use api::repository::ReportRepository;
use blitz_core::model::ReportBundle;
use blitz_core::report::{ReportDocument, ReportError, ReportOptions};
use tracing::{info, warn};

use crate::Clock;
use crate::error::ReportServiceError;

pub mod pdf;

pub use pdf::render_pdf;

/// Fetches the statistics bundle and exports it as a PDF.
#[derive(Clone)]
pub struct ReportService {
    clock: Clock,
    reports: Arc<dyn ReportRepository>,
    options: ReportOptions,
    output_dir: PathBuf,
}

impl ReportService {
    #[must_use]
    pub fn new(
        clock: Clock,
        reports: Arc<dyn ReportRepository>,
        options: ReportOptions,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            clock,
            reports,
            options,
            output_dir,
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn options(&self) -> ReportOptions {
        self.options
    }

    /// # Errors
    ///
    /// Returns `ReportServiceError::Api` on network, status or decode failure.
    pub async fn fetch(&self) -> Result<ReportBundle, ReportServiceError> {
        self.reports
            .global_report()
            .await
            .inspect_err(|err| warn!(error = %err, "report fetch failed"))
            .map_err(ReportServiceError::from)
    }

    /// Lay out `bundle` as of today.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` when the bundle or its summary is missing.
    pub fn document(&self, bundle: Option<&ReportBundle>) -> Result<ReportDocument, ReportError> {
        ReportDocument::build(bundle, self.clock.today(), self.options)
    }

    /// Render the report for `bundle` and write it into `dir`.
    ///
    /// The PDF is rendered completely in memory before anything is written,
    /// so a failed export leaves no partial file behind.
    ///
    /// # Errors
    ///
    /// Returns `ReportServiceError::Report` when the summary is missing (no
    /// file is written), `ReportServiceError::Pdf` if rendering fails and
    /// `ReportServiceError::Io` if the file cannot be written.
    pub fn export(
        &self,
        bundle: Option<&ReportBundle>,
        dir: &Path,
    ) -> Result<PathBuf, ReportServiceError> {
        let document = self
            .document(bundle)
            .inspect_err(|err| warn!(error = %err, "report export aborted"))?;
        let bytes = render_pdf(&document)?;

        fs::create_dir_all(dir)?;
        let path = dir.join(&document.filename);
        fs::write(&path, bytes)?;
        info!(path = %path.display(), "report exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::InMemoryRepository;
    use blitz_core::time::fixed_clock;

    fn service(repo: &InMemoryRepository, options: ReportOptions) -> ReportService {
        ReportService::new(
            fixed_clock(),
            Arc::new(repo.clone()),
            options,
            PathBuf::from("reports"),
        )
    }

    #[tokio::test]
    async fn export_writes_dated_pdf() {
        let repo = InMemoryRepository::new();
        repo.insert_group("Norte", None);
        let service = service(&repo, ReportOptions::default());
        let bundle = service.fetch().await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = service.export(Some(&bundle), dir.path()).unwrap();

        assert_eq!(path, dir.path().join("Reporte_Blitz_2026-02-20.pdf"));
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn missing_summary_writes_nothing() {
        let repo = InMemoryRepository::new();
        repo.set_report(ReportBundle::default());
        let service = service(&repo, ReportOptions::default());
        let bundle = service.fetch().await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let err = service.export(Some(&bundle), dir.path()).unwrap_err();

        assert!(matches!(
            err,
            ReportServiceError::Report(ReportError::MissingSummary)
        ));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn nothing_loaded_writes_nothing() {
        let repo = InMemoryRepository::new();
        let service = service(&repo, ReportOptions::default());
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out");

        let err = service.export(None, &target).unwrap_err();
        assert!(matches!(
            err,
            ReportServiceError::Report(ReportError::MissingBundle)
        ));
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn document_applies_default_goal() {
        let repo = InMemoryRepository::new();
        let options = ReportOptions {
            default_goal: Some(40_000),
        };
        let service = service(&repo, options);
        let bundle = service.fetch().await.unwrap();

        let doc = service.document(Some(&bundle)).unwrap();
        assert_eq!(doc.kpis.target, 40_000);
        assert_eq!(doc.kpis.cells()[1].1, "40,000");
    }
}
