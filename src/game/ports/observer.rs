//! Outbound notification port for stage advances.

use crate::game::domain::{Stage, TaskId};

/// Receives stage-advance signals as tasks complete.
///
/// Called exactly once per newly completed task, never for repeated
/// gestures against an already-completed task.
pub trait StageObserver: Send + Sync {
    /// Notifies that `task` completed and `stage` was selected for display.
    fn stage_advanced(&self, task: TaskId, stage: Stage);
}
