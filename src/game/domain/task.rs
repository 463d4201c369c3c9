//! Task aggregate and its progress rules.

use super::{GameDomainError, GestureKind, TargetCount, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A trackable achievement with a target count and completion flag.
///
/// Progress is monotonic: it never decreases, and `completed` never reverts
/// to false once set. After every update `completed == (progress >= target)`
/// holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    description: String,
    kind: GestureKind,
    progress: u32,
    target: TargetCount,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a validated task with zero progress.
    ///
    /// # Errors
    ///
    /// Returns [`GameDomainError::EmptyTaskName`] if the name is blank.
    pub fn new(
        id: TaskId,
        kind: GestureKind,
        target: TargetCount,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, GameDomainError> {
        let task_name = name.into();
        if task_name.trim().is_empty() {
            return Err(GameDomainError::EmptyTaskName);
        }
        Ok(Self::from_parts(id, kind, target, task_name, description.into()))
    }

    /// Builds a task from pre-validated parts.
    pub(crate) const fn from_parts(
        id: TaskId,
        kind: GestureKind,
        target: TargetCount,
        name: String,
        description: String,
    ) -> Self {
        Self {
            id,
            name,
            description,
            kind,
            progress: 0,
            target,
            completed: false,
            completed_at: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the gesture kind this task tracks.
    #[must_use]
    pub const fn kind(&self) -> GestureKind {
        self.kind
    }

    /// Returns the current progress count.
    #[must_use]
    pub const fn progress(&self) -> u32 {
        self.progress
    }

    /// Returns the completion goal.
    #[must_use]
    pub const fn target(&self) -> TargetCount {
        self.target
    }

    /// Whether the task has reached its target.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the completion timestamp, if the task has completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns how many steps remain until completion.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.target.value().saturating_sub(self.progress)
    }

    /// Advances progress by `amount`, clamping at the target.
    ///
    /// Returns true when this call completes the task for the first time.
    /// Completed tasks and zero amounts are no-ops.
    pub(crate) fn advance(&mut self, amount: u32, clock: &impl Clock) -> bool {
        if self.completed || amount == 0 {
            return false;
        }
        self.progress = self
            .progress
            .saturating_add(amount)
            .min(self.target.value());
        self.refresh_completion(clock)
    }

    /// Aligns progress with the live point total.
    ///
    /// Used for [`GestureKind::Points`] tasks: progress tracks the total
    /// itself, not an increment. Returns true when this call completes the
    /// task for the first time.
    pub(crate) fn sync_to_points(&mut self, total_points: u64, clock: &impl Clock) -> bool {
        if self.completed {
            return false;
        }
        let desired = total_points.min(u64::from(self.target.value()));
        if desired > u64::from(self.progress) {
            // desired fits in u32 because it is capped at the target.
            self.progress = u32::try_from(desired).unwrap_or(u32::MAX);
        }
        self.refresh_completion(clock)
    }

    /// Caches the completion flag; returns true on the first transition.
    fn refresh_completion(&mut self, clock: &impl Clock) -> bool {
        if self.progress >= self.target.value() {
            self.completed = true;
            self.completed_at = Some(clock.utc());
            return true;
        }
        false
    }
}
