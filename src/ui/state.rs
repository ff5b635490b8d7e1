//! Dashboard state management
//!
//! Owns the upload widget state, the poll session for the active project and
//! the preview selection. All mutation happens on the UI thread; the worker
//! only talks to it through [`WorkerEvent`]s.

use crate::api::{Clip, ProjectStatus};
use crate::demo::demo_clips;
use crate::polling::{PollPhase, PollSession, WorkerCommand, WorkerEvent};
use crossbeam_channel::{Receiver, Sender};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed. Please try again.";

/// Upload widget state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    /// Ready to accept a file
    Ready,
    /// Waiting for the backend to accept `request_id`
    Uploading { request_id: Uuid },
}

/// Central dashboard state
pub struct DashboardState {
    /// Upload widget state
    pub upload: UploadState,

    /// Inline message under the upload button
    pub upload_error: Option<String>,

    /// Files are being dragged over the window
    pub is_dragging: bool,

    /// Poll state for the active project
    pub session: PollSession,

    /// Clip shown in the preview dialog
    pub selected_clip: Option<Clip>,

    /// Scroll the dashboard into view on the next frame
    pub scroll_to_dashboard: bool,

    /// Worker-level problem that is not tied to an upload
    pub last_error: Option<String>,

    /// Consecutive poll failures before the soft warning appears
    pub poll_warning_after: u32,

    demo: Vec<Clip>,

    /// Channel to send worker commands
    command_tx: Option<Sender<WorkerCommand>>,

    /// Channel to receive worker events
    event_rx: Option<Receiver<WorkerEvent>>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            upload: UploadState::Ready,
            upload_error: None,
            is_dragging: false,
            session: PollSession::new(),
            selected_clip: None,
            scroll_to_dashboard: false,
            last_error: None,
            poll_warning_after: 3,
            demo: demo_clips(),
            command_tx: None,
            event_rx: None,
        }
    }

    /// Wire the state to a running worker
    pub fn connect(&mut self, command_tx: Sender<WorkerCommand>, event_rx: Receiver<WorkerEvent>) {
        self.command_tx = Some(command_tx);
        self.event_rx = Some(event_rx);
    }

    pub fn is_connected(&self) -> bool {
        self.command_tx.is_some()
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.upload, UploadState::Uploading { .. })
    }

    /// Project id of the job being tracked, if any
    pub fn project_id(&self) -> Option<&str> {
        self.session.job_id()
    }

    fn send(&self, command: WorkerCommand) -> bool {
        match &self.command_tx {
            Some(tx) => match tx.send(command) {
                Ok(()) => true,
                Err(e) => {
                    error!("Worker command channel closed: {}", e);
                    false
                }
            },
            None => {
                warn!("No worker connected, dropping {:?}", command);
                false
            }
        }
    }

    /// Upload the first of `files`. An empty selection is ignored.
    pub fn handle_files(&mut self, files: Vec<PathBuf>) {
        let Some(path) = files.into_iter().next() else {
            return;
        };
        if self.is_uploading() {
            debug!("Upload already in progress, ignoring {:?}", path);
            return;
        }

        let request_id = Uuid::new_v4();
        info!("Uploading {:?} as request {}", path, request_id);
        self.upload_error = None;

        if self.send(WorkerCommand::Upload { request_id, path }) {
            self.upload = UploadState::Uploading { request_id };
        } else {
            self.upload_error = Some(UPLOAD_FAILED_MESSAGE.to_string());
        }
    }

    /// Abort the in-flight upload, if any
    pub fn cancel_upload(&mut self) {
        if let UploadState::Uploading { request_id } = self.upload {
            self.send(WorkerCommand::CancelUpload { request_id });
        }
    }

    /// Start tracking a project, abandoning the previous one
    pub fn set_project(&mut self, project_id: impl Into<String>) {
        let job_id = project_id.into();
        let generation = self.session.watch(job_id.clone());
        self.send(WorkerCommand::Watch { job_id, generation });
    }

    /// Apply a single worker event
    pub fn apply_event(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::Uploaded {
                request_id,
                project_id,
            } => {
                if self.upload != (UploadState::Uploading { request_id }) {
                    debug!("Ignoring result of superseded upload {}", request_id);
                    return;
                }
                self.upload = UploadState::Ready;
                self.set_project(project_id);
            }
            WorkerEvent::UploadFailed { request_id, error } => {
                if self.upload != (UploadState::Uploading { request_id }) {
                    return;
                }
                warn!("Upload {} failed: {}", request_id, error);
                self.upload = UploadState::Ready;
                self.upload_error = Some(UPLOAD_FAILED_MESSAGE.to_string());
            }
            WorkerEvent::Poll(event) => {
                self.session.apply(event);
            }
            WorkerEvent::Shutdown => {
                info!("Worker shut down");
                if self.is_uploading() {
                    self.upload = UploadState::Ready;
                    self.upload_error = Some(UPLOAD_FAILED_MESSAGE.to_string());
                }
                self.command_tx = None;
            }
        }
    }

    /// Drain pending worker events
    pub fn poll_events(&mut self) {
        let events: Vec<WorkerEvent> = match &self.event_rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        };
        for event in events {
            self.apply_event(event);
        }
    }

    /// Step the stepper should highlight
    pub fn current_step(&self) -> ProjectStatus {
        self.session.current_status()
    }

    /// Clips of the live job when it has any, otherwise the demo set
    pub fn clips(&self) -> &[Clip] {
        match self.session.snapshot() {
            Some(job) if !job.clips.is_empty() => &job.clips,
            _ => &self.demo,
        }
    }

    /// Pipeline panel status line
    pub fn status_text(&self) -> String {
        if self.project_id().is_none() {
            return "Upload a file to start the pipeline.".to_string();
        }
        if self.session.is_fetching() {
            return "Syncing with Clipper.ai…".to_string();
        }
        format!("Status: {}", self.session.current_status())
    }

    /// Caption above the clip grid
    pub fn grid_caption(&self) -> String {
        match self.project_id() {
            Some(id) => format!("Project {}", id),
            None => "Demo view".to_string(),
        }
    }

    /// Soft warning after repeated poll failures
    pub fn poll_warning(&self) -> Option<&'static str> {
        let failing = self.poll_warning_after > 0
            && self.session.phase() == PollPhase::Polling
            && self.session.consecutive_failures() >= self.poll_warning_after;
        failing.then_some("Still trying to reach Clipper.ai…")
    }

    pub fn open_clip(&mut self, clip: Clip) {
        self.selected_clip = Some(clip);
    }

    pub fn close_preview(&mut self) {
        self.selected_clip = None;
    }

    /// Whether anything is in flight that needs the UI to keep redrawing
    pub fn needs_repaint(&self) -> bool {
        self.is_uploading() || self.session.phase() == PollPhase::Polling
    }

    /// Ask the worker to stop and forget the active project
    pub fn shutdown(&mut self) {
        self.send(WorkerCommand::Shutdown);
        self.session.reset();
    }
}
