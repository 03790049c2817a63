//! Submission boundary: where a completed [`Report`] leaves the form.

use crate::model::Report;

/// Errors a submission sink can report.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The record could not be serialized for the diagnostic log.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Receives assembled records. Synchronous by contract: the caller performs
/// no retry, and any in-flight guarding belongs behind this boundary.
pub trait SubmissionSink {
    fn submit(&mut self, report: &Report) -> Result<(), SubmitError>;
}

/// The default sink: serializes the record and emits it on the `log` facade
/// at info level, then acknowledges. A backend integration replaces this
/// without changing the form's contracts.
#[derive(Debug, Default)]
pub struct DiagnosticSink;

impl SubmissionSink for DiagnosticSink {
    fn submit(&mut self, report: &Report) -> Result<(), SubmitError> {
        let payload = serde_json::to_string(report)?;
        log::info!("denuncia recibida: {payload}");
        Ok(())
    }
}
