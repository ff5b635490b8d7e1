use crate::api::{Job, ProjectStatus};
use crate::polling::PollEvent;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPhase {
    /// No job id yet
    Idle,
    /// Job id set, last known status is not terminal
    Polling,
    /// Terminal status observed; nothing more will be applied for this job
    Settled,
}

/// Client-side view of the one job being watched.
///
/// Every [`PollSession::watch`] bumps the generation. Events from older
/// generations are dropped, as are snapshots whose sequence number is not
/// newer than the last one applied, so a slow response can never overwrite
/// fresher state.
#[derive(Debug, Clone)]
pub struct PollSession {
    job_id: Option<String>,
    generation: u64,
    phase: PollPhase,
    snapshot: Option<Job>,
    is_fetching: bool,
    in_flight_seq: u64,
    last_applied_seq: u64,
    consecutive_failures: u32,
}

impl Default for PollSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PollSession {
    pub fn new() -> Self {
        Self {
            job_id: None,
            generation: 0,
            phase: PollPhase::Idle,
            snapshot: None,
            is_fetching: false,
            in_flight_seq: 0,
            last_applied_seq: 0,
            consecutive_failures: 0,
        }
    }

    /// Start tracking `job_id`, discarding everything known about the previous job.
    ///
    /// Returns the generation the poll loop must tag its events with.
    pub fn watch(&mut self, job_id: impl Into<String>) -> u64 {
        let job_id = job_id.into();
        self.generation += 1;
        info!("Watching job {} (generation {})", job_id, self.generation);
        self.job_id = Some(job_id);
        self.phase = PollPhase::Polling;
        self.clear_progress();
        self.generation
    }

    /// Forget the current job entirely
    pub fn reset(&mut self) {
        self.generation += 1;
        self.job_id = None;
        self.phase = PollPhase::Idle;
        self.clear_progress();
    }

    fn clear_progress(&mut self) {
        self.snapshot = None;
        self.is_fetching = false;
        self.in_flight_seq = 0;
        self.last_applied_seq = 0;
        self.consecutive_failures = 0;
    }

    /// Fold one poll event into the session. Returns whether it was applied.
    pub fn apply(&mut self, event: PollEvent) -> bool {
        if self.phase != PollPhase::Polling || event.generation() != self.generation {
            debug!(
                "Dropping poll event for generation {} (current {}, {:?})",
                event.generation(),
                self.generation,
                self.phase
            );
            return false;
        }

        match event {
            PollEvent::FetchStarted { seq, .. } => {
                self.in_flight_seq = self.in_flight_seq.max(seq);
                self.is_fetching = true;
                true
            }
            PollEvent::Snapshot { seq, job, .. } => {
                if seq <= self.last_applied_seq {
                    debug!("Dropping stale snapshot #{} (have #{})", seq, self.last_applied_seq);
                    return false;
                }
                self.last_applied_seq = seq;
                self.consecutive_failures = 0;
                if seq >= self.in_flight_seq {
                    self.is_fetching = false;
                }
                if job.status.is_terminal() {
                    info!("Job {} settled with status {}", job.id, job.status);
                    self.phase = PollPhase::Settled;
                    self.is_fetching = false;
                }
                self.snapshot = Some(job);
                true
            }
            PollEvent::FetchFailed { seq, .. } => {
                if seq < self.last_applied_seq {
                    return false;
                }
                self.consecutive_failures += 1;
                if seq >= self.in_flight_seq {
                    self.is_fetching = false;
                }
                true
            }
        }
    }

    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> PollPhase {
        self.phase
    }

    pub fn snapshot(&self) -> Option<&Job> {
        self.snapshot.as_ref()
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Status of the latest snapshot, `Queued` before the first one arrives
    pub fn current_status(&self) -> ProjectStatus {
        self.snapshot
            .as_ref()
            .map(|job| job.status)
            .unwrap_or(ProjectStatus::Queued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn job(id: &str, status: ProjectStatus) -> Job {
        Job {
            id: id.to_string(),
            status,
            created_at: Some(Utc::now()),
            clips: Vec::new(),
        }
    }

    fn snapshot(generation: u64, seq: u64, status: ProjectStatus) -> PollEvent {
        PollEvent::Snapshot {
            generation,
            seq,
            job: job("p1", status),
        }
    }

    #[test]
    fn test_starts_idle() {
        let session = PollSession::new();
        assert_eq!(session.phase(), PollPhase::Idle);
        assert_eq!(session.current_status(), ProjectStatus::Queued);
        assert!(!session.is_fetching());
    }

    #[test]
    fn test_events_ignored_while_idle() {
        let mut session = PollSession::new();
        assert!(!session.apply(snapshot(0, 1, ProjectStatus::Processing)));
        assert!(session.snapshot().is_none());
    }

    #[test]
    fn test_fetch_flag_follows_request() {
        let mut session = PollSession::new();
        let gen = session.watch("p1");

        session.apply(PollEvent::FetchStarted { generation: gen, seq: 1 });
        assert!(session.is_fetching());

        session.apply(snapshot(gen, 1, ProjectStatus::Processing));
        assert!(!session.is_fetching());
        assert_eq!(session.current_status(), ProjectStatus::Processing);
        assert_eq!(session.phase(), PollPhase::Polling);
    }

    #[test]
    fn test_terminal_status_settles() {
        let mut session = PollSession::new();
        let gen = session.watch("p1");
        session.apply(snapshot(gen, 1, ProjectStatus::Done));
        assert_eq!(session.phase(), PollPhase::Settled);

        // Absorbing
        assert!(!session.apply(snapshot(gen, 2, ProjectStatus::Processing)));
        assert_eq!(session.current_status(), ProjectStatus::Done);
    }

    #[test]
    fn test_out_of_order_snapshot_dropped() {
        let mut session = PollSession::new();
        let gen = session.watch("p1");
        assert!(session.apply(snapshot(gen, 3, ProjectStatus::Preview)));
        assert!(!session.apply(snapshot(gen, 2, ProjectStatus::Processing)));
        assert_eq!(session.current_status(), ProjectStatus::Preview);
    }

    #[test]
    fn test_switching_jobs_drops_old_generation() {
        let mut session = PollSession::new();
        let old = session.watch("p1");
        session.apply(snapshot(old, 1, ProjectStatus::Processing));

        let new = session.watch("p2");
        assert_ne!(old, new);
        assert!(session.snapshot().is_none());
        assert!(!session.apply(snapshot(old, 2, ProjectStatus::Done)));
        assert_eq!(session.job_id(), Some("p2"));
        assert_eq!(session.phase(), PollPhase::Polling);
    }

    #[test]
    fn test_failures_counted_and_cleared() {
        let mut session = PollSession::new();
        let gen = session.watch("p1");
        for seq in 1..=3 {
            session.apply(PollEvent::FetchStarted { generation: gen, seq });
            session.apply(PollEvent::FetchFailed {
                generation: gen,
                seq,
                error: crate::ClipperError::Transport("down".into()),
            });
        }
        assert_eq!(session.consecutive_failures(), 3);
        assert_eq!(session.phase(), PollPhase::Polling);
        assert!(!session.is_fetching());

        session.apply(snapshot(gen, 4, ProjectStatus::Processing));
        assert_eq!(session.consecutive_failures(), 0);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut session = PollSession::new();
        let gen = session.watch("p1");
        session.reset();
        assert_eq!(session.phase(), PollPhase::Idle);
        assert!(session.job_id().is_none());
        assert!(!session.apply(snapshot(gen, 1, ProjectStatus::Processing)));
    }
}
