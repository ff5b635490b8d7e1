use crate::api::{JobApi, ProjectStatus};
use crate::polling::PollEvent;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

pub trait PollSink: Send + Sync {
    fn emit(&self, event: PollEvent);
}

/// How a poll loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// A terminal status was observed
    Settled(ProjectStatus),
    /// The watch was cancelled (new job, or shutdown)
    Cancelled,
}

/// Poll `job_id` until it reaches a terminal status or `cancel` fires.
///
/// The first fetch is issued immediately, then one every `interval` after the
/// previous fetch finished. Failed fetches are reported and retried on the
/// same cadence. No fetch is issued after a terminal status.
pub async fn poll_job(
    api: &dyn JobApi,
    job_id: &str,
    generation: u64,
    interval: Duration,
    cancel: &CancellationToken,
    sink: &dyn PollSink,
) -> PollOutcome {
    let mut seq = 0u64;

    loop {
        seq += 1;
        sink.emit(PollEvent::FetchStarted { generation, seq });

        let result = tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Poll for {} cancelled mid-fetch", job_id);
                return PollOutcome::Cancelled;
            }
            result = api.get_job(job_id) => result,
        };

        match result {
            Ok(job) => {
                let status = job.status;
                debug!("Job {} is {} (fetch #{})", job_id, status, seq);
                sink.emit(PollEvent::Snapshot {
                    generation,
                    seq,
                    job,
                });
                if status.is_terminal() {
                    info!("Job {} reached {}, polling stopped", job_id, status);
                    return PollOutcome::Settled(status);
                }
            }
            Err(error) => {
                if error.is_recoverable() {
                    warn!("Polling job {} failed, retrying: {}", job_id, error);
                } else {
                    error!("Polling job {} failed and may not recover: {}", job_id, error);
                }
                sink.emit(PollEvent::FetchFailed {
                    generation,
                    seq,
                    error,
                });
            }
        }

        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Poll for {} cancelled", job_id);
                return PollOutcome::Cancelled;
            }
            _ = tokio::time::sleep(interval) => {}
        }
    }
}
