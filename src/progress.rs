//! Pipeline progress steps
//!
//! A fixed, ordered lookup table. A step is completed iff it sits before the
//! current status in this table; the matching step is active.

use crate::api::ProjectStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub id: ProjectStatus,
    pub label: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 4] = [
    Step {
        id: ProjectStatus::Queued,
        label: "Queued",
        description: "File received",
    },
    Step {
        id: ProjectStatus::Processing,
        label: "Processing",
        description: "Transcribing & extracting audio",
    },
    Step {
        id: ProjectStatus::Preview,
        label: "Preview",
        description: "Highlights ready",
    },
    Step {
        id: ProjectStatus::Done,
        label: "Done",
        description: "Clips ready to download",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

/// Position of `status` in [`STEPS`]. `Error` has none.
pub fn step_index(status: ProjectStatus) -> Option<usize> {
    STEPS.iter().position(|step| step.id == status)
}

/// Render state of every step for the given current status
pub fn step_states(current: ProjectStatus) -> [(Step, StepState); 4] {
    let current_index = step_index(current);
    STEPS.map(|step| {
        let index = step_index(step.id);
        let state = match (index, current_index) {
            (Some(i), Some(c)) if i < c => StepState::Completed,
            _ if step.id == current => StepState::Active,
            _ => StepState::Pending,
        };
        (step, state)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_status_marks_prefix_completed() {
        for (current_index, current) in STEPS.iter().enumerate() {
            for (i, (step, state)) in step_states(current.id).iter().enumerate() {
                let expected = if i < current_index {
                    StepState::Completed
                } else if step.id == current.id {
                    StepState::Active
                } else {
                    StepState::Pending
                };
                assert_eq!(*state, expected, "step {} while {}", step.label, current.id);
            }
        }
    }

    #[test]
    fn test_error_marks_nothing() {
        assert_eq!(step_index(ProjectStatus::Error), None);
        assert!(step_states(ProjectStatus::Error)
            .iter()
            .all(|(_, state)| *state == StepState::Pending));
    }

    #[test]
    fn test_queued_is_first() {
        assert_eq!(STEPS[0].id, ProjectStatus::Queued);
        assert_eq!(step_states(ProjectStatus::Queued)[0].1, StepState::Active);
    }
}
