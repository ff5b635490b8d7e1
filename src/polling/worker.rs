//! Background worker for uploads and status polling
//!
//! Runs a tokio runtime on its own thread and talks to the UI over
//! crossbeam channels, so the egui frame loop never blocks on the network.

use crate::api::{HttpJobApi, JobApi, UploadFile};
use crate::config::ClipperConfig;
use crate::polling::poller::{poll_job, PollOutcome, PollSink};
use crate::polling::PollEvent;
use crate::{ClipperError, Result};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Called whenever an event is queued, so the UI can schedule a repaint
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Commands that can be sent to the worker
#[derive(Debug, Clone)]
pub enum WorkerCommand {
    /// Read `path` and upload it as a new job
    Upload { request_id: Uuid, path: PathBuf },

    /// Abort an in-flight upload
    CancelUpload { request_id: Uuid },

    /// Start polling `job_id`, replacing any previous watch
    Watch { job_id: String, generation: u64 },

    /// Shutdown the worker
    Shutdown,
}

/// Events emitted by the worker
#[derive(Debug, Clone)]
pub enum WorkerEvent {
    /// Upload accepted by the backend
    Uploaded {
        request_id: Uuid,
        project_id: String,
    },

    /// Upload failed or was cancelled
    UploadFailed {
        request_id: Uuid,
        error: ClipperError,
    },

    /// Progress from the active poll loop
    Poll(PollEvent),

    /// Worker has shut down
    Shutdown,
}

#[derive(Clone)]
struct EventSink {
    tx: Sender<WorkerEvent>,
    waker: Option<Waker>,
}

impl EventSink {
    fn send(&self, event: WorkerEvent) {
        if self.tx.send(event).is_err() {
            debug!("Event receiver dropped");
            return;
        }
        if let Some(wake) = &self.waker {
            wake();
        }
    }
}

impl PollSink for EventSink {
    fn emit(&self, event: PollEvent) {
        self.send(WorkerEvent::Poll(event));
    }
}

/// Upload/poll worker with channel-based communication
pub struct JobWorker {
    poll_interval: Duration,
    command_tx: Sender<WorkerCommand>,
    command_rx: Receiver<WorkerCommand>,
    event_tx: Sender<WorkerEvent>,
    event_rx: Receiver<WorkerEvent>,
    waker: Option<Waker>,
}

impl JobWorker {
    pub fn new(config: &ClipperConfig) -> Self {
        let (command_tx, command_rx) = bounded(100);
        let (event_tx, event_rx) = unbounded();

        Self {
            poll_interval: config.poll_interval,
            command_tx,
            command_rx,
            event_tx,
            event_rx,
            waker: None,
        }
    }

    /// Invoke `waker` after every queued event
    pub fn with_waker(mut self, waker: Waker) -> Self {
        self.waker = Some(waker);
        self
    }

    pub fn command_sender(&self) -> Sender<WorkerCommand> {
        self.command_tx.clone()
    }

    pub fn event_receiver(&self) -> Receiver<WorkerEvent> {
        self.event_rx.clone()
    }

    /// Start the worker against the HTTP backend described by `config`
    pub fn start(self, config: &ClipperConfig) -> Result<JoinHandle<()>> {
        let api = HttpJobApi::new(config)?;
        self.start_with_api(Arc::new(api))
    }

    /// Start the worker thread against any [`JobApi`]
    pub fn start_with_api(self, api: Arc<dyn JobApi>) -> Result<JoinHandle<()>> {
        let command_rx = self.command_rx;
        let sink = EventSink {
            tx: self.event_tx,
            waker: self.waker,
        };
        let poll_interval = self.poll_interval;

        std::thread::Builder::new()
            .name("clipper-worker".to_string())
            .spawn(move || run_worker(api, command_rx, sink, poll_interval))
            .map_err(|e| ClipperError::Worker(format!("failed to spawn worker thread: {}", e)))
    }
}

fn run_worker(
    api: Arc<dyn JobApi>,
    command_rx: Receiver<WorkerCommand>,
    sink: EventSink,
    poll_interval: Duration,
) {
    info!("Job worker starting");

    let runtime = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            sink.send(WorkerEvent::Shutdown);
            return;
        }
    };

    let mut upload: Option<(Uuid, CancellationToken)> = None;
    let mut watch: Option<CancellationToken> = None;

    loop {
        match command_rx.recv() {
            Ok(WorkerCommand::Upload { request_id, path }) => {
                if let Some((previous, token)) = upload.take() {
                    debug!("Superseding upload {}", previous);
                    token.cancel();
                }
                let token = CancellationToken::new();
                upload = Some((request_id, token.clone()));

                let api = api.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    let event = match upload_file(api.as_ref(), &path, &token).await {
                        Ok(project_id) => {
                            info!("Upload {} created project {}", request_id, project_id);
                            WorkerEvent::Uploaded {
                                request_id,
                                project_id,
                            }
                        }
                        Err(error) => {
                            error!("Upload {} failed: {}", request_id, error);
                            WorkerEvent::UploadFailed { request_id, error }
                        }
                    };
                    sink.send(event);
                });
            }

            Ok(WorkerCommand::CancelUpload { request_id }) => match &upload {
                Some((current, token)) if *current == request_id => {
                    info!("Cancelling upload {}", request_id);
                    token.cancel();
                }
                _ => debug!("No in-flight upload {} to cancel", request_id),
            },

            Ok(WorkerCommand::Watch { job_id, generation }) => {
                if let Some(previous) = watch.take() {
                    previous.cancel();
                }
                let token = CancellationToken::new();
                watch = Some(token.clone());

                let api = api.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    let outcome =
                        poll_job(api.as_ref(), &job_id, generation, poll_interval, &token, &sink)
                            .await;
                    if outcome == PollOutcome::Cancelled {
                        debug!("Watch on {} (generation {}) ended", job_id, generation);
                    }
                });
            }

            Ok(WorkerCommand::Shutdown) => {
                info!("Job worker shutting down");
                break;
            }

            Err(e) => {
                warn!("Command channel closed: {}", e);
                break;
            }
        }
    }

    if let Some((_, token)) = upload.take() {
        token.cancel();
    }
    if let Some(token) = watch.take() {
        token.cancel();
    }
    runtime.shutdown_timeout(Duration::from_secs(1));
    sink.send(WorkerEvent::Shutdown);

    info!("Job worker stopped");
}

async fn upload_file(
    api: &dyn JobApi,
    path: &std::path::Path,
    cancel: &CancellationToken,
) -> Result<String> {
    let file = tokio::select! {
        _ = cancel.cancelled() => return Err(ClipperError::Cancelled),
        file = UploadFile::from_path(path) => file?,
    };
    let response = api.create_job(file, cancel).await?;
    Ok(response.project_id)
}
