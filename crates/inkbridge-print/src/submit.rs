// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Job submitter: one best-effort upload attempt per queued job.
//
// The guard, start signal, config read, attribute translation, and
// document read all happen on the caller's context; only the network
// call runs in a spawned task, so the host's job-queued notification
// returns promptly.  Each job's task is fully isolated — concurrent
// submissions share no mutable state.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

use inkbridge_core::config::ConfigStore;
use inkbridge_core::error::{InkbridgeError, Result};
use inkbridge_core::types::{DocumentSource, JobState, PrintJobRequest};

use crate::client::WorkCentreClient;
use crate::host::JobHandle;

/// User-visible reason for a local document read failure.
pub const DOCUMENT_READ_MESSAGE: &str = "Could not read the print document.";

/// User-visible reason for any upload failure (transport, non-2xx, or
/// anything unexpected during submission).
pub const SEND_FAILURE_MESSAGE: &str = "Could not send the document to the printer.";

/// Structured terminal result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Completed,
    Failed(String),
}

/// Handle on an in-flight upload task.
///
/// The terminal host signal (complete/fail) is delivered by the task
/// itself; the ticket additionally exposes the outcome as a future and
/// allows aborting the upload.
pub struct SubmitTicket {
    task: JoinHandle<SubmitOutcome>,
}

impl SubmitTicket {
    /// Abort the in-flight upload. No further host signal is emitted for
    /// an aborted job.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Wait for the upload task to finish and return its outcome.
    pub async fn outcome(self) -> SubmitOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => SubmitOutcome::Failed("upload cancelled".into()),
            Err(e) => SubmitOutcome::Failed(format!("upload task failed: {e}")),
        }
    }
}

/// Submits queued jobs to the configured printer.
///
/// Host cancellation requests for a job that is already uploading are
/// accepted and ignored by the submitter itself; callers holding the
/// [`SubmitTicket`] may abort explicitly instead.
pub struct JobSubmitter {
    config: Arc<dyn ConfigStore>,
}

impl JobSubmitter {
    pub fn new(config: Arc<dyn ConfigStore>) -> Self {
        Self { config }
    }

    /// Submit one job.
    ///
    /// Returns `None` without any side effect when the job is not queued
    /// (re-entry is an idempotent no-op), and `None` after signalling
    /// failure when the document cannot be read — no HTTP request is made
    /// in either case.  Otherwise the upload runs in a spawned task and
    /// the returned ticket resolves to its outcome.
    #[instrument(skip(self, job, handle), fields(job = %job.id, name = %job.name))]
    pub async fn submit(
        &self,
        job: PrintJobRequest,
        handle: Arc<dyn JobHandle>,
    ) -> Option<SubmitTicket> {
        if handle.state() != JobState::Queued {
            debug!("job is not queued; ignoring");
            return None;
        }

        info!("starting print job");
        handle.start();

        // Fresh read — the host may have been changed since the last job.
        let config = self.config.current();
        let attrs = job.attributes;

        let document = match read_document(job.document).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(error = %e, "document read failed; no upload attempted");
                handle.fail(DOCUMENT_READ_MESSAGE);
                return None;
            }
        };

        let task = tokio::spawn(async move {
            let result = async {
                let client = WorkCentreClient::new(&config)?;
                client.upload(&attrs, document).await
            }
            .await;

            match result {
                Ok(()) => {
                    info!("print job completed");
                    handle.complete();
                    SubmitOutcome::Completed
                }
                Err(e) => {
                    error!(error = %e, "print job failed");
                    handle.fail(SEND_FAILURE_MESSAGE);
                    SubmitOutcome::Failed(e.to_string())
                }
            }
        });

        Some(SubmitTicket { task })
    }
}

/// Materialize the job's document payload.
async fn read_document(source: DocumentSource) -> Result<Vec<u8>> {
    match source {
        DocumentSource::Bytes(bytes) => Ok(bytes),
        DocumentSource::File(path) => tokio::fs::read(&path)
            .await
            .map_err(|e| InkbridgeError::DocumentRead(format!("{}: {e}", path.display()))),
    }
}
