//! Unit tests for the task seed catalogue.

use crate::game::domain::{
    CatalogError, GameDomainError, GestureKind, TaskSeed, default_catalog, tasks_from_json,
    tasks_from_seeds,
};
use rstest::rstest;
use std::collections::HashSet;

fn seed(id: u32, kind: GestureKind, target: u32) -> TaskSeed {
    TaskSeed {
        id,
        name: format!("Task {id}"),
        description: "A trackable achievement".to_owned(),
        kind,
        target,
    }
}

#[rstest]
fn default_catalog_seeds_one_task_per_gesture_kind() {
    let tasks = default_catalog();
    assert_eq!(tasks.len(), 8);

    let kinds: HashSet<_> = tasks.iter().map(|task| task.kind()).collect();
    assert_eq!(kinds.len(), 8);

    let ids: HashSet<_> = tasks.iter().map(|task| task.id().value()).collect();
    assert_eq!(ids, (1..=8).collect::<HashSet<_>>());

    for task in &tasks {
        assert_eq!(task.progress(), 0);
        assert!(!task.is_completed());
    }
}

#[rstest]
fn default_catalog_matches_the_shipped_targets() {
    let tasks = default_catalog();
    let target_of = |kind: GestureKind| {
        tasks
            .iter()
            .find(|task| task.kind() == kind)
            .map(|task| task.target().value())
    };

    assert_eq!(target_of(GestureKind::Tap), Some(10));
    assert_eq!(target_of(GestureKind::DoubleTap), Some(5));
    assert_eq!(target_of(GestureKind::LongPress), Some(1));
    assert_eq!(target_of(GestureKind::Points), Some(100));
}

#[rstest]
fn tasks_from_seeds_accepts_valid_entries() -> eyre::Result<()> {
    let tasks = tasks_from_seeds(vec![
        seed(1, GestureKind::Tap, 10),
        seed(2, GestureKind::Pinch, 1),
    ])?;

    assert_eq!(tasks.len(), 2);
    let first = tasks.first().ok_or_else(|| eyre::eyre!("missing task"))?;
    assert_eq!(first.name(), "Task 1");
    assert_eq!(first.kind(), GestureKind::Tap);
    Ok(())
}

#[rstest]
fn tasks_from_seeds_rejects_duplicate_ids() {
    let result = tasks_from_seeds(vec![
        seed(3, GestureKind::Tap, 10),
        seed(3, GestureKind::Drag, 1),
    ]);
    assert!(matches!(result, Err(CatalogError::DuplicateTaskId(id)) if id.value() == 3));
}

#[rstest]
fn tasks_from_seeds_rejects_zero_target() {
    let result = tasks_from_seeds(vec![seed(1, GestureKind::Tap, 0)]);
    assert!(matches!(
        result,
        Err(CatalogError::Domain(GameDomainError::InvalidTarget(0)))
    ));
}

#[rstest]
fn tasks_from_seeds_rejects_blank_name() {
    let mut blank = seed(1, GestureKind::Tap, 10);
    blank.name = "  ".to_owned();
    let result = tasks_from_seeds(vec![blank]);
    assert!(matches!(
        result,
        Err(CatalogError::Domain(GameDomainError::EmptyTaskName))
    ));
}

#[rstest]
fn tasks_from_json_parses_seed_arrays() -> eyre::Result<()> {
    let json = r#"[
        {
            "id": 1,
            "name": "Window Watcher",
            "description": "Swipe left to chase the birds away",
            "kind": "swipe_left",
            "target": 3
        }
    ]"#;

    let tasks = tasks_from_json(json)?;
    let task = tasks.first().ok_or_else(|| eyre::eyre!("missing task"))?;
    assert_eq!(task.id().value(), 1);
    assert_eq!(task.kind(), GestureKind::SwipeLeft);
    assert_eq!(task.target().value(), 3);
    Ok(())
}

#[rstest]
fn tasks_from_json_rejects_malformed_input() {
    let result = tasks_from_json("not json");
    assert!(matches!(result, Err(CatalogError::Malformed(_))));
}
