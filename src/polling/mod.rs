//! Job status polling
//!
//! `poller` runs the fetch/sleep loop for one job, `worker` hosts those loops
//! (and uploads) on a background tokio runtime, and `session` is the UI-side
//! state machine that folds the resulting events into a view.

pub mod poller;
pub mod session;
pub mod worker;

use crate::api::Job;
use crate::ClipperError;

pub use poller::{poll_job, PollOutcome, PollSink};
pub use session::{PollPhase, PollSession};
pub use worker::{JobWorker, WorkerCommand, WorkerEvent};

/// Events produced by a poll loop.
///
/// `generation` identifies the watch that produced the event; `seq` counts
/// fetches within that watch, starting at 1.
#[derive(Debug, Clone)]
pub enum PollEvent {
    /// A `get_job` request has been issued
    FetchStarted { generation: u64, seq: u64 },

    /// A fetch succeeded
    Snapshot { generation: u64, seq: u64, job: Job },

    /// A fetch failed; the next tick retries
    FetchFailed {
        generation: u64,
        seq: u64,
        error: ClipperError,
    },
}

impl PollEvent {
    pub fn generation(&self) -> u64 {
        match self {
            PollEvent::FetchStarted { generation, .. }
            | PollEvent::Snapshot { generation, .. }
            | PollEvent::FetchFailed { generation, .. } => *generation,
        }
    }

    pub fn seq(&self) -> u64 {
        match self {
            PollEvent::FetchStarted { seq, .. }
            | PollEvent::Snapshot { seq, .. }
            | PollEvent::FetchFailed { seq, .. } => *seq,
        }
    }
}
