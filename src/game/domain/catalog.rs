//! Seed catalogue defining the tasks of a game session.

use super::{GameDomainError, GestureKind, TargetCount, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors returned while loading a task catalogue.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A seed entry failed domain validation.
    #[error(transparent)]
    Domain(#[from] GameDomainError),

    /// The catalogue JSON could not be parsed.
    #[error("malformed catalogue JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two seed entries share an id.
    #[error("duplicate task id in catalogue: {0}")]
    DuplicateTaskId(TaskId),
}

/// Raw definition of one task, as supplied by a host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSeed {
    /// Unique positive task id.
    pub id: u32,
    /// Display name; must not be blank.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Gesture kind the task tracks.
    pub kind: GestureKind,
    /// Positive completion goal.
    pub target: u32,
}

impl TaskSeed {
    /// Validates the seed and builds a zero-progress task from it.
    ///
    /// # Errors
    ///
    /// Returns [`GameDomainError`] when the id, target, or name is invalid.
    pub fn into_task(self) -> Result<Task, GameDomainError> {
        Task::new(
            TaskId::new(self.id)?,
            self.kind,
            TargetCount::new(self.target)?,
            self.name,
            self.description,
        )
    }
}

/// Validates a seed list and builds the session task table.
///
/// # Errors
///
/// Returns [`CatalogError::DuplicateTaskId`] when two seeds share an id, or
/// [`CatalogError::Domain`] when any single seed is invalid.
pub fn tasks_from_seeds(
    seeds: impl IntoIterator<Item = TaskSeed>,
) -> Result<Vec<Task>, CatalogError> {
    let mut seen = HashSet::new();
    let mut tasks = Vec::new();
    for seed in seeds {
        let task = seed.into_task()?;
        if !seen.insert(task.id()) {
            return Err(CatalogError::DuplicateTaskId(task.id()));
        }
        tasks.push(task);
    }
    Ok(tasks)
}

/// Loads a task table from its JSON form (an array of seed objects).
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] for unparseable JSON, otherwise the
/// same validation errors as [`tasks_from_seeds`].
pub fn tasks_from_json(json: &str) -> Result<Vec<Task>, CatalogError> {
    let seeds: Vec<TaskSeed> = serde_json::from_str(json)?;
    tasks_from_seeds(seeds)
}

/// Builds the fixed default task table seeded at session start.
///
/// One task per gesture kind, zero progress, nothing completed.
#[must_use]
pub fn default_catalog() -> Vec<Task> {
    vec![
        built_in(1, GestureKind::Tap, 10, "Playful Paw", "Tap ten times like a playful kitten"),
        built_in(2, GestureKind::DoubleTap, 5, "Happy Hops", "Double-tap five times, like a cat spotting treats"),
        built_in(3, GestureKind::LongPress, 1, "Sleepy Kitten", "Hold still like a dozing cat"),
        built_in(4, GestureKind::Drag, 1, "Ball of Yarn", "Drag around as if playing with a ball of yarn"),
        built_in(5, GestureKind::SwipeRight, 1, "Curious Paw", "Swipe right, knocking things off the table"),
        built_in(6, GestureKind::SwipeLeft, 1, "Mischievous Swat", "Swipe left, hiding toys under the sofa"),
        built_in(7, GestureKind::Pinch, 1, "Big Stretch", "Stretch out like a cat waking from a nap"),
        built_in(8, GestureKind::Points, 100, "Treat Collector", "Collect one hundred cat treats"),
    ]
}

/// Builds a built-in catalogue entry from known-valid literals.
fn built_in(id: u32, kind: GestureKind, target: u32, name: &str, description: &str) -> Task {
    Task::from_parts(
        seed_id(id),
        kind,
        seed_target(target),
        name.to_owned(),
        description.to_owned(),
    )
}

const fn seed_id(value: u32) -> TaskId {
    match TaskId::new(value) {
        Ok(id) => id,
        Err(_) => panic!("built-in task ids are positive"),
    }
}

const fn seed_target(value: u32) -> TargetCount {
    match TargetCount::new(value) {
        Ok(target) => target,
        Err(_) => panic!("built-in targets are positive"),
    }
}
