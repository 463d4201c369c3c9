//! Progress tracking service for the game session.

use super::rewards;
use crate::game::domain::{GestureKind, SessionId, Stage, Task, TaskId, default_catalog};
use crate::game::ports::{BonusRoll, StageObserver};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// One first-time task completion and the stage signalled for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// The task that reached its target.
    pub task: TaskId,
    /// The stage selected when this completion was observed.
    pub stage: Stage,
}

/// Report returned by each tracker update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureOutcome {
    /// Points credited by this update.
    pub points_awarded: u64,
    /// First-time completions observed during this update, in task order.
    pub completions: Vec<Completion>,
    /// Stage selected after this update.
    pub stage: Stage,
}

impl GestureOutcome {
    /// Whether this update advanced the display stage.
    #[must_use]
    pub fn stage_advanced(&self) -> bool {
        !self.completions.is_empty()
    }

    /// An update that changed nothing.
    const fn quiet(stage: Stage) -> Self {
        Self {
            points_awarded: 0,
            completions: Vec::new(),
            stage,
        }
    }
}

/// Read-only view of the session handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Identifier of the play session.
    pub session_id: SessionId,
    /// Running point total.
    pub points: u64,
    /// Stage currently selected for display.
    pub stage: Stage,
    /// Ordered task views for the progress display.
    pub tasks: Vec<Task>,
    /// When the session started.
    pub started_at: DateTime<Utc>,
}

/// Tracks gesture-driven task progress, points, and the display stage.
///
/// The tracker owns the task table and point total exclusively; consumers
/// read snapshots rather than holding aliased references. Each update method
/// applies as one indivisible step over the task table, and the core is
/// total over its input domain: unknown kinds, completed tasks, and zero
/// amounts are silent no-ops.
pub struct ProgressTracker<C, B>
where
    C: Clock + Send + Sync,
    B: BonusRoll,
{
    session_id: SessionId,
    clock: Arc<C>,
    bonus: Arc<B>,
    observers: Vec<Arc<dyn StageObserver>>,
    tasks: Vec<Task>,
    points: u64,
    completions_observed: usize,
    stage: Stage,
    started_at: DateTime<Utc>,
}

impl<C, B> ProgressTracker<C, B>
where
    C: Clock + Send + Sync,
    B: BonusRoll,
{
    /// Creates a tracker seeded with the built-in task catalogue.
    #[must_use]
    pub fn new(clock: Arc<C>, bonus: Arc<B>) -> Self {
        Self::with_tasks(default_catalog(), clock, bonus)
    }

    /// Creates a tracker over a custom task table.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>, clock: Arc<C>, bonus: Arc<B>) -> Self {
        let started_at = clock.utc();
        let completions_observed = tasks.iter().filter(|task| task.is_completed()).count();
        Self {
            session_id: SessionId::new(),
            clock,
            bonus,
            observers: Vec::new(),
            tasks,
            points: 0,
            completions_observed,
            stage: Stage::for_completions(completions_observed),
            started_at,
        }
    }

    /// Registers an observer notified on every stage advance.
    pub fn subscribe(&mut self, observer: Arc<dyn StageObserver>) {
        self.observers.push(observer);
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Returns the running point total.
    #[must_use]
    pub const fn points(&self) -> u64 {
        self.points
    }

    /// Returns the stage currently selected for display.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns when the session started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns the ordered task views.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by id.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Builds a read-only snapshot of the whole session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id,
            points: self.points,
            stage: self.stage,
            tasks: self.tasks.clone(),
            started_at: self.started_at,
        }
    }

    /// Records a classified gesture event with the default amount of one.
    pub fn record_gesture(&mut self, kind: GestureKind) -> GestureOutcome {
        self.record_gesture_with(kind, 1)
    }

    /// Records a classified gesture event against every matching open task.
    ///
    /// Tasks of the synthetic [`GestureKind::Points`] kind re-align their
    /// progress with the live point total and ignore `amount`; all other
    /// matching tasks advance by `amount`, clamped at their target. A zero
    /// amount is a no-op, as is a kind with no open task.
    pub fn record_gesture_with(&mut self, kind: GestureKind, amount: u32) -> GestureOutcome {
        if amount == 0 && !kind.is_synthetic() {
            return GestureOutcome::quiet(self.stage);
        }
        debug!(kind = %kind, amount, "gesture recorded");
        let mut completions = Vec::new();
        for task in &mut self.tasks {
            if task.kind() != kind || task.is_completed() {
                continue;
            }
            let finished = if kind.is_synthetic() {
                task.sync_to_points(self.points, &*self.clock)
            } else {
                task.advance(amount, &*self.clock)
            };
            if finished {
                self.completions_observed += 1;
                self.stage = Stage::for_completions(self.completions_observed);
                info!(task = %task.id(), stage = %self.stage, "task completed");
                completions.push(Completion {
                    task: task.id(),
                    stage: self.stage,
                });
            }
        }
        let outcome = GestureOutcome {
            points_awarded: 0,
            completions,
            stage: self.stage,
        };
        self.notify(&outcome.completions);
        outcome
    }

    /// Credits points and re-runs the `points`-kind task update.
    ///
    /// The re-sync is explicit: every point change triggers a
    /// [`GestureKind::Points`] pass within the same call, so point-based
    /// tasks never lag behind the total. A zero amount is a no-op.
    pub fn add_points(&mut self, amount: u64) -> GestureOutcome {
        if amount == 0 {
            return GestureOutcome::quiet(self.stage);
        }
        self.points = self.points.saturating_add(amount);
        debug!(amount, total = self.points, "points credited");
        let mut outcome = self.record_gesture(GestureKind::Points);
        outcome.points_awarded = amount;
        outcome
    }

    /// Applies a recognised gesture end to end.
    ///
    /// Credits the gesture's point reward (rolling the swipe bonus through
    /// the [`BonusRoll`] port), then records progress for the gesture
    /// itself, returning one combined report. The synthetic `points` kind
    /// only re-runs the points pass.
    pub fn apply_gesture(&mut self, kind: GestureKind) -> GestureOutcome {
        if kind.is_synthetic() {
            return self.record_gesture(kind);
        }
        let reward = u64::from(rewards::reward_for(kind, &*self.bonus));
        let mut outcome = if reward == 0 {
            GestureOutcome::quiet(self.stage)
        } else {
            self.add_points(reward)
        };
        let recorded = self.record_gesture(kind);
        outcome.completions.extend(recorded.completions);
        outcome.stage = recorded.stage;
        outcome
    }

    fn notify(&self, completions: &[Completion]) {
        for completion in completions {
            for observer in &self.observers {
                observer.stage_advanced(completion.task, completion.stage);
            }
        }
    }
}
