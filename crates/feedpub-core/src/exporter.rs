use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::ExportCredentials;

/// Errors surfaced at the export pipeline boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("export pipeline reported an unsuccessful run")]
    Unsuccessful,

    #[error("export pipeline error: {0}")]
    Pipeline(String),
}

/// Outcome of a gated export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The pipeline ran and reported success.
    Completed,
    /// Credentials were incomplete; nothing ran.
    Skipped { missing: Vec<&'static str> },
}

impl ExportOutcome {
    pub const fn completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Boundary contract for the external price export pipeline.
///
/// The pipeline itself (provider fetches, publication) lives outside
/// this crate; implementations resolve to its success indicator.
pub trait PriceExporter: Send + Sync {
    fn run_export<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<bool, ExportError>> + Send + 'a>>;
}

/// Deterministic stand-in used where no real pipeline is wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExporter;

impl PriceExporter for NoopExporter {
    fn run_export<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<bool, ExportError>> + Send + 'a>> {
        Box::pin(async { Ok(true) })
    }
}

/// Runs the exporter only when every required credential is present.
///
/// An incomplete credential set is a deliberate skip, not a failure;
/// the exporter is not invoked at all. When the pipeline does run, its
/// success indicator must be truthy or the gate raises
/// [`ExportError::Unsuccessful`].
pub async fn run_export_if_credentialed(
    exporter: &dyn PriceExporter,
    credentials: &ExportCredentials,
) -> Result<ExportOutcome, ExportError> {
    let missing = credentials.missing();
    if !missing.is_empty() {
        return Ok(ExportOutcome::Skipped { missing });
    }

    if exporter.run_export().await? {
        Ok(ExportOutcome::Completed)
    } else {
        Err(ExportError::Unsuccessful)
    }
}
